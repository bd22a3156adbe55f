//! Document routes
//!
//! One-shot extraction and summarization of an uploaded PDF. Nothing is
//! kept once the response is sent.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::upload::read_upload;
use crate::error::{AppError, Result};
use crate::extract::{extract_document, ExtractionResult};
use crate::state::AppState;
use crate::summarize::summarize;

/// Create the document router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/extract", post(extract))
        .route("/summarize", post(summarize_upload))
        .route("/summarize/text", post(summarize_text))
}

/// Summary response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub summary: String,
    /// Requested sentence count
    pub sentences: usize,
    /// Pages that contributed text, when summarizing a document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

/// Raw-text summarize request
#[derive(Debug, Deserialize)]
pub struct SummarizeTextRequest {
    pub text: String,
    pub sentences: Option<usize>,
}

/// Extract page text from an uploaded PDF
///
/// POST /api/v1/extract (multipart, field `file`)
async fn extract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractionResult>> {
    let upload = read_upload(multipart).await?;
    let options = state.config().extract_options();

    let result = extract_document(state.engine(), upload.data, upload.file_name, &options).await?;
    Ok(Json(result))
}

/// Summarize an uploaded PDF
///
/// POST /api/v1/summarize (multipart, field `file`, optional field `sentences`)
async fn summarize_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SummaryResponse>> {
    let upload = read_upload(multipart).await?;
    let sentences = match upload.fields.get("sentences") {
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
            AppError::BadRequest(format!("'sentences' must be a positive integer, got {:?}", raw))
        })?,
        None => state.config().pipeline.summary_sentences,
    };

    let options = state.config().extract_options();
    let extracted =
        extract_document(state.engine(), upload.data, upload.file_name, &options).await?;
    let summary = summarize(&extracted.full_text, sentences)?;

    Ok(Json(SummaryResponse {
        summary,
        sentences,
        page_count: Some(extracted.pages.len()),
    }))
}

/// Summarize text supplied directly
///
/// POST /api/v1/summarize/text
async fn summarize_text(
    State(state): State<AppState>,
    Json(request): Json<SummarizeTextRequest>,
) -> Result<Json<SummaryResponse>> {
    let sentences = request
        .sentences
        .unwrap_or(state.config().pipeline.summary_sentences);
    let summary = summarize(&request.text, sentences)?;

    Ok(Json(SummaryResponse {
        summary,
        sentences,
        page_count: None,
    }))
}
