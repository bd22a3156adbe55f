//! Document error types

use std::time::Duration;

use thiserror::Error;

/// Errors raised by a PDF capability implementation
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to parse document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Page outside `1..=page_count`
    #[error("Page {0} not found (document has {1} pages)")]
    PageNotFound(usize, usize),

    /// Text extraction error
    #[error("Text extraction error: {0}")]
    TextExtractionError(String),

    /// MuPDF context error
    #[error("MuPDF error: {0}")]
    ContextError(String),

    /// Blocking task failed to complete
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Alias for Result
pub type DocumentResult<T> = Result<T>;

impl From<mupdf::Error> for DocumentError {
    fn from(err: mupdf::Error) -> Self {
        DocumentError::ContextError(err.to_string())
    }
}

/// Engine startup failures
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("PDF engine did not become ready within {0:?}")]
    TimedOut(Duration),

    #[error("PDF engine failed to initialize: {0}")]
    Failed(String),
}
