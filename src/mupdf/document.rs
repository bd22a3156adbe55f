//! Thread-safe MuPDF document
//!
//! Stores the document bytes and opens a fresh MuPDF document for each
//! operation. Access is serialized with a `parking_lot::Mutex`.

use std::sync::Arc;

use async_trait::async_trait;
use mupdf::{Document, TextPageOptions};
use parking_lot::Mutex;

use crate::document::{DocumentError, DocumentResult, PageTextSource, TextItem};

const PDF_MIME: &str = "application/pdf";

/// A parsed PDF held in memory
#[derive(Clone)]
pub struct MupdfDocument {
    inner: Arc<Inner>,
}

struct Inner {
    data: Vec<u8>,
    id: String,
    page_count: usize,
    lock: Mutex<()>,
}

impl Inner {
    /// Open a fresh document and run `f` against it
    fn with_doc<F, R>(&self, f: F) -> DocumentResult<R>
    where
        F: FnOnce(&Document) -> DocumentResult<R>,
    {
        let _guard = self.lock.lock();
        let doc = Document::from_bytes(&self.data, PDF_MIME)?;
        f(&doc)
    }
}

impl MupdfDocument {
    /// Parse `data`, failing if MuPDF cannot open it
    ///
    /// Blocking; call from a blocking context.
    pub fn from_bytes(data: Vec<u8>, id: String) -> DocumentResult<Self> {
        let doc = Document::from_bytes(&data, PDF_MIME)
            .map_err(|e| DocumentError::ParseError(format!("{}: {}", id, e)))?;
        let page_count = doc.page_count()? as usize;

        tracing::debug!("Opened '{}' with {} pages", id, page_count);

        Ok(Self {
            inner: Arc::new(Inner {
                data,
                id,
                page_count,
                lock: Mutex::new(()),
            }),
        })
    }

    /// Document identifier
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    fn validate_page_number(&self, page_number: usize) -> DocumentResult<()> {
        if page_number == 0 || page_number > self.inner.page_count {
            return Err(DocumentError::PageNotFound(
                page_number,
                self.inner.page_count,
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PageTextSource for MupdfDocument {
    fn page_count(&self) -> usize {
        self.inner.page_count
    }

    async fn text_items(&self, page_number: usize) -> DocumentResult<Vec<TextItem>> {
        self.validate_page_number(page_number)?;
        let inner = Arc::clone(&self.inner);

        // MuPDF work is CPU-bound
        tokio::task::spawn_blocking(move || {
            inner.with_doc(|doc| {
                let page = doc.load_page((page_number - 1) as i32)?;
                let text_page = page.to_text_page(TextPageOptions::empty())?;

                let mut items = Vec::new();
                for block in text_page.blocks() {
                    for line in block.lines() {
                        let text: String = line.chars().filter_map(|ch| ch.char()).collect();
                        items.push(TextItem { text });
                    }
                }

                Ok(items)
            })
        })
        .await
        .map_err(|e| DocumentError::TaskJoin(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mupdf::sample::build_pdf;

    #[test]
    fn test_rejects_garbage() {
        let result = MupdfDocument::from_bytes(b"not a pdf".to_vec(), "junk".into());
        assert!(matches!(result, Err(DocumentError::ParseError(_))));
    }

    #[test]
    fn test_page_count() {
        let doc = MupdfDocument::from_bytes(build_pdf(&["one", "two", ""]), "three".into())
            .unwrap();
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.id(), "three");
    }

    #[tokio::test]
    async fn test_text_items_per_line() {
        let doc = MupdfDocument::from_bytes(
            build_pdf(&["Hello world from page one", "Second page text"]),
            "hello".into(),
        )
        .unwrap();

        let first = doc.text_items(1).await.unwrap();
        let joined: String = first.iter().map(|i| i.text.as_str()).collect();
        assert!(joined.contains("Hello world from page one"));

        let second = doc.text_items(2).await.unwrap();
        let joined: String = second.iter().map(|i| i.text.as_str()).collect();
        assert!(joined.contains("Second page text"));
    }

    #[tokio::test]
    async fn test_blank_page_has_no_text() {
        let doc = MupdfDocument::from_bytes(build_pdf(&[""]), "blank".into()).unwrap();
        let items = doc.text_items(1).await.unwrap();
        assert!(items.iter().all(|i| i.text.trim().is_empty()));
    }

    #[tokio::test]
    async fn test_page_out_of_range() {
        let doc = MupdfDocument::from_bytes(build_pdf(&["only"]), "one".into()).unwrap();

        assert!(matches!(
            doc.text_items(0).await,
            Err(DocumentError::PageNotFound(0, 1))
        ));
        assert!(matches!(
            doc.text_items(2).await,
            Err(DocumentError::PageNotFound(2, 1))
        ));
    }
}
