//! MuPDF-backed text capability
//!
//! MuPDF's `fz_context` is **NOT thread-safe**. Documents here keep their
//! bytes, open a fresh MuPDF document for every operation under a mutex, and
//! run that work on tokio's blocking pool.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pdf_insight::document::initialize_engine;
//! use pdf_insight::mupdf::MupdfEngine;
//!
//! let engine = initialize_engine(MupdfEngine::initialize(), Duration::from_secs(5)).await?;
//! let source = engine.open(pdf_bytes, "doc-123".into()).await?;
//! ```

mod document;
mod engine;
mod sample;

pub use document::MupdfDocument;
pub use engine::MupdfEngine;
