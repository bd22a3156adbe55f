//! Document traits
//!
//! Injected capabilities for turning PDF bytes into per-page text items.

use std::sync::Arc;

use async_trait::async_trait;

use super::error::Result;
use super::types::TextItem;

/// An opened document that can report text page by page
///
/// Pages are 1-indexed. Each call may suspend while the engine loads the page.
#[async_trait]
pub trait PageTextSource: Send + Sync {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Ordered text items of a single page
    async fn text_items(&self, page_number: usize) -> Result<Vec<TextItem>>;
}

/// PDF parsing capability
///
/// Constructed once by the application bootstrap (see
/// [`initialize_engine`](super::initialize_engine)) and passed down.
#[async_trait]
pub trait PdfEngine: Send + Sync {
    /// Parse a document held in memory
    async fn open(&self, data: Vec<u8>, id: String) -> Result<Arc<dyn PageTextSource>>;
}
