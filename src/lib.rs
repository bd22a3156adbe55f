//! PDF Insight Library
//!
//! Extractive summaries and page-aware question answering over the text of
//! PDF documents. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `document`: Text capability traits and engine initialization
//! - `mupdf`: MuPDF implementation of the text capability
//! - `extract`: Page-aware text extraction
//! - `summarize`: Frequency-based extractive summarizer
//! - `chunk` / `retrieve`: Page-tagged chunks and lexical ranking
//! - `chat`: Sessions, transcripts and answer assembly
//! - `routes`: HTTP surface

pub mod chat;
pub mod chunk;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod mupdf;
pub mod retrieve;
pub mod routes;
pub mod state;
pub mod summarize;
pub mod text;
