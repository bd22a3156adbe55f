//! Document text capability
//!
//! This module defines the boundary between the text pipeline and whatever
//! library actually parses PDFs. The pipeline only ever sees a page count and
//! an ordered list of text items per page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │           initialize_engine(init, timeout)              │
//! │   (awaited once at bootstrap, bounded by a timeout)     │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!   ┌─────────────────────────────────────────────────────┐
//!   │               Arc<dyn PdfEngine>                    │
//!   │   open(bytes) → Arc<dyn PageTextSource>             │
//!   └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!   ┌─────────────────────────────────────────────────────┐
//!   │             extract::extract_text                    │
//!   │   (pages 1..=cap, sequential, skip failed pages)    │
//!   └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use pdf_insight::document::initialize_engine;
//! use pdf_insight::mupdf::MupdfEngine;
//!
//! let engine = initialize_engine(MupdfEngine::initialize(), Duration::from_secs(5)).await?;
//! let source = engine.open(bytes, "report.pdf".into()).await?;
//! let items = source.text_items(1).await?;
//! ```

mod error;
mod init;
mod traits;
mod types;

pub use error::{DocumentError, DocumentResult, InitializationError, Result};
pub use init::initialize_engine;
pub use traits::{PageTextSource, PdfEngine};
pub use types::TextItem;
