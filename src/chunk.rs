//! Fixed-size, page-tagged chunking
//!
//! Boundaries are positional: a chunk may end mid-word, and never spans two
//! pages. Sizes are counted in characters.

use serde::{Deserialize, Serialize};

use crate::extract::PageText;

/// Default `max_chars_per_chunk`
pub const DEFAULT_MAX_CHARS_PER_CHUNK: usize = 1200;

/// A bounded slice of one page's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-indexed source page
    pub page: usize,
    pub text: String,
}

/// Split pages into chunks of at most `max_chars_per_chunk` characters
///
/// Output is in page order, then in offset order within a page. A
/// `max_chars_per_chunk` of 0 is treated as 1.
pub fn chunk_pages(pages: &[PageText], max_chars_per_chunk: usize) -> Vec<Chunk> {
    let max_chars = max_chars_per_chunk.max(1);
    let mut chunks = Vec::new();

    for page in pages {
        let mut rest = page.text.as_str();
        while !rest.is_empty() {
            let split_at = rest
                .char_indices()
                .nth(max_chars)
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len());

            let (head, tail) = rest.split_at(split_at);
            chunks.push(Chunk {
                page: page.page_number,
                text: head.to_string(),
            });
            rest = tail;
        }
    }

    chunks
}
