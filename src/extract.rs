//! Page-aware text extraction
//!
//! Walks the first pages of a document in order and produces normalized
//! per-page text plus the concatenated full text. A page that fails to load
//! is logged and skipped; only a document with no readable text at all is an
//! error.
//!
//! Extraction is cancelled by dropping the future. Pages not yet requested are
//! never fetched and no partial result is returned.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{PageTextSource, PdfEngine};
use crate::text::normalize_whitespace;

/// Pages visited by default
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Document-level extraction failures
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Document could not be parsed: {0}")]
    Unparseable(String),

    #[error("Document has no pages")]
    NoPages,

    #[error("no readable text")]
    NoReadableText,
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Normalized text of one page that had any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageText {
    /// 1-indexed
    pub page_number: usize,
    pub text: String,
}

/// Output of a successful extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Page texts joined by single spaces
    pub full_text: String,
    pub pages: Vec<PageText>,
}

/// Extraction options
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Pages after this one are never visited
    pub max_pages: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Open `data` with `engine` and extract its text
pub async fn extract_document(
    engine: &dyn PdfEngine,
    data: Vec<u8>,
    id: String,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    let source = engine.open(data, id.clone()).await.map_err(|e| {
        tracing::warn!("Failed to open '{}': {}", id, e);
        ExtractionError::Unparseable(e.to_string())
    })?;

    extract_text(source.as_ref(), options).await
}

/// Extract text from an opened document
///
/// Pages are fetched strictly one after another.
pub async fn extract_text(
    source: &dyn PageTextSource,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    let page_count = source.page_count();
    if page_count == 0 {
        return Err(ExtractionError::NoPages);
    }

    let last_page = page_count.min(options.max_pages);
    let mut pages = Vec::new();
    let mut full_text = String::new();

    for page_number in 1..=last_page {
        let items = match source.text_items(page_number).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Skipping page {}: {}", page_number, e);
                continue;
            }
        };

        let joined = items
            .iter()
            .map(|item| item.text.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let text = normalize_whitespace(&joined);

        if !text.is_empty() {
            full_text.push_str(&text);
            full_text.push(' ');
            pages.push(PageText { page_number, text });
        }
    }

    let full_text = full_text.trim().to_string();
    if full_text.is_empty() {
        return Err(ExtractionError::NoReadableText);
    }

    tracing::debug!(
        pages_visited = last_page,
        pages_with_text = pages.len(),
        chars = full_text.len(),
        "Extraction complete"
    );

    Ok(ExtractionResult { full_text, pages })
}
