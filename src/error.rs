//! Error types for the PDF Insight server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::summarize::ValidationError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {}", e);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "extraction_failed",
                    "Failed to extract text, try another file.".to_string(),
                )
            }
            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                let message = match e {
                    ValidationError::EmptyText | ValidationError::TooShort { .. } => {
                        "Text too short to summarize."
                    }
                    ValidationError::InvalidSentenceCount(_) => {
                        "Sentence count must be at least 1."
                    }
                    ValidationError::NoSentences => "Failed to summarize, try another PDF.",
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "validation_failed",
                    message.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status(AppError::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(status(AppError::BadRequest("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(
            status(ExtractionError::NoReadableText.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(ValidationError::NoSentences.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
