//! MuPDF engine

use std::sync::Arc;

use async_trait::async_trait;

use super::document::MupdfDocument;
use super::sample::build_pdf;
use crate::document::{DocumentError, DocumentResult, PageTextSource, PdfEngine};

/// PDF engine backed by MuPDF
///
/// Obtain one through [`MupdfEngine::initialize`], usually wrapped in
/// [`initialize_engine`](crate::document::initialize_engine).
pub struct MupdfEngine {
    _ready: (),
}

impl MupdfEngine {
    /// Check MuPDF can open and read a document, then hand out the engine
    pub async fn initialize() -> DocumentResult<Arc<dyn PdfEngine>> {
        tokio::task::spawn_blocking(|| {
            let probe = MupdfDocument::from_bytes(build_pdf(&[""]), "probe".to_string())?;
            if probe.page_count() != 1 {
                return Err(DocumentError::ParseError(format!(
                    "probe document reported {} pages",
                    probe.page_count()
                )));
            }
            Ok(())
        })
        .await
        .map_err(|e| DocumentError::TaskJoin(e.to_string()))??;

        Ok(Arc::new(Self { _ready: () }))
    }
}

#[async_trait]
impl PdfEngine for MupdfEngine {
    async fn open(&self, data: Vec<u8>, id: String) -> DocumentResult<Arc<dyn PageTextSource>> {
        let doc = tokio::task::spawn_blocking(move || MupdfDocument::from_bytes(data, id))
            .await
            .map_err(|e| DocumentError::TaskJoin(e.to_string()))??;

        Ok(Arc::new(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_and_open() {
        let engine = MupdfEngine::initialize().await.unwrap();
        let source = engine
            .open(build_pdf(&["alpha", "beta"]), "ab".into())
            .await
            .unwrap();
        assert_eq!(source.page_count(), 2);
    }

    #[tokio::test]
    async fn test_open_garbage_fails() {
        let engine = MupdfEngine::initialize().await.unwrap();
        let result = engine.open(vec![0u8; 64], "zeros".into()).await;
        assert!(result.is_err());
    }
}
