//! Lexical retrieval by token overlap
//!
//! A chunk's score is the number of distinct query tokens found in its set of
//! unique tokens. No stopword filtering is applied on either side.

use std::collections::HashSet;

use serde::Serialize;

use crate::chunk::Chunk;
use crate::text::tokenize;

/// A chunk with its overlap score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: usize,
}

/// Rank chunks by overlap with `query`, best first, keeping at most `k`
///
/// Ties keep their original order. Returns nothing when the query has no
/// tokens.
pub fn rank(query: &str, chunks: &[Chunk], k: usize) -> Vec<ScoredChunk> {
    // A repeated query word still counts once
    let query_tokens: HashSet<String> = tokenize(query).into_iter().collect();
    if query_tokens.is_empty() || chunks.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredChunk> = chunks
        .iter()
        .map(|chunk| {
            let chunk_tokens: HashSet<String> = tokenize(&chunk.text).into_iter().collect();
            let score = query_tokens
                .iter()
                .filter(|t| chunk_tokens.contains(t.as_str()))
                .count();
            ScoredChunk {
                chunk: chunk.clone(),
                score,
            }
        })
        .collect();

    // Stable sort keeps original order among equal scores
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(k);
    scored
}

/// [`rank`] without the scores
pub fn retrieve(query: &str, chunks: &[Chunk], k: usize) -> Vec<Chunk> {
    rank(query, chunks, k)
        .into_iter()
        .map(|scored| scored.chunk)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(page: usize, text: &str) -> Chunk {
        Chunk {
            page,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_single_overlap_wins() {
        let chunks = vec![chunk(1, "dogs bark loudly"), chunk(2, "cats sleep")];
        let ranked = rank("bark loyal", &chunks, 1);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].chunk.page, 1);
        assert_eq!(ranked[0].score, 1);
        assert_eq!(retrieve("bark loyal", &chunks, 1), vec![chunks[0].clone()]);
    }

    #[test]
    fn test_repetition_in_chunk_counts_once() {
        let chunks = vec![
            chunk(1, "bark bark bark bark"),
            chunk(2, "bark and loyal"),
        ];
        let ranked = rank("bark loyal", &chunks, 2);

        assert_eq!(ranked[0].chunk.page, 2);
        assert_eq!(ranked[0].score, 2);
        assert_eq!(ranked[1].score, 1);
    }

    #[test]
    fn test_repetition_in_query_counts_once() {
        let chunks = vec![chunk(1, "bark"), chunk(2, "dogs bark")];
        let ranked = rank("bark bark BARK", &chunks, 2);

        assert_eq!(ranked[0].score, 1);
        assert_eq!(ranked[1].score, 1);
        assert_eq!(ranked[0].chunk.page, 1);

        let ranked = rank("dogs dogs bark", &chunks, 2);
        assert_eq!(ranked[0].chunk.page, 2);
        assert_eq!(ranked[0].score, 2);
    }

    #[test]
    fn test_descending_and_stable() {
        let chunks = vec![
            chunk(1, "nothing relevant"),
            chunk(2, "rust"),
            chunk(3, "rust ownership"),
            chunk(4, "ownership"),
            chunk(5, "Rust and ownership and borrowing"),
        ];
        let ranked = rank("Rust ownership borrowing", &chunks, 5);

        let pages: Vec<usize> = ranked.iter().map(|s| s.chunk.page).collect();
        assert_eq!(pages, vec![5, 3, 2, 4, 1]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_result_capped_at_k_or_len() {
        let chunks = vec![chunk(1, "a"), chunk(2, "b"), chunk(3, "c")];

        assert_eq!(retrieve("a", &chunks, 2).len(), 2);
        assert_eq!(retrieve("a", &chunks, 10).len(), 3);
    }

    #[test]
    fn test_zero_scores_keep_original_order() {
        let chunks = vec![chunk(7, "x"), chunk(8, "y"), chunk(9, "z")];
        let pages: Vec<usize> = retrieve("unmatched", &chunks, 3)
            .iter()
            .map(|c| c.page)
            .collect();
        assert_eq!(pages, vec![7, 8, 9]);
    }

    #[test]
    fn test_empty_inputs() {
        let chunks = vec![chunk(1, "text")];
        assert!(retrieve("?!", &chunks, 3).is_empty());
        assert!(retrieve("", &chunks, 3).is_empty());
        assert!(retrieve("text", &[], 3).is_empty());
    }
}
