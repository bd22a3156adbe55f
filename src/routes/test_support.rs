//! Router fixtures backed by a plain-text engine

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;

use crate::config::Config;
use crate::document::{DocumentError, DocumentResult, PageTextSource, PdfEngine, TextItem};
use crate::state::AppState;

/// Reads uploads as UTF-8 text, one page per form feed, one item per line
pub(crate) struct TextEngine;

struct TextDocument {
    pages: Vec<String>,
}

#[async_trait]
impl PageTextSource for TextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn text_items(&self, page_number: usize) -> DocumentResult<Vec<TextItem>> {
        let page = &self.pages[page_number - 1];
        Ok(page.lines().map(TextItem::new).collect())
    }
}

#[async_trait]
impl PdfEngine for TextEngine {
    async fn open(&self, data: Vec<u8>, _id: String) -> DocumentResult<Arc<dyn PageTextSource>> {
        let text = String::from_utf8(data)
            .map_err(|e| DocumentError::ParseError(e.to_string()))?;
        let pages = text.split('\u{c}').map(str::to_string).collect();
        Ok(Arc::new(TextDocument { pages }))
    }
}

pub(crate) fn server() -> TestServer {
    let state = AppState::new(Config::default(), Arc::new(TextEngine));
    TestServer::new(super::app(state)).unwrap()
}

pub(crate) fn upload(contents: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(contents.as_bytes().to_vec())
            .file_name("notes.pdf")
            .mime_type("application/pdf"),
    )
}
