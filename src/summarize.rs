//! Extractive, frequency-based summarization
//!
//! Sentences are scored by the mean document-wide frequency of their content
//! tokens. The best `n` are returned in document order.

use std::collections::HashMap;

use thiserror::Error;

use crate::text::{char_len, content_tokens, normalize_whitespace, split_sentences};

/// Normalized input shorter than this is rejected
pub const MIN_TEXT_CHARS: usize = 50;

/// Sentences of this many characters or fewer are discarded
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Input rejected by the summarizer
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Text is empty")]
    EmptyText,

    #[error("Text too short to summarize ({length} characters)")]
    TooShort { length: usize },

    #[error("No sentences long enough to summarize")]
    NoSentences,

    #[error("Sentence count must be at least 1, got {0}")]
    InvalidSentenceCount(usize),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Build an extractive summary of `text` with at most `sentence_count` sentences
pub fn summarize(text: &str, sentence_count: usize) -> Result<String> {
    if sentence_count == 0 {
        return Err(ValidationError::InvalidSentenceCount(sentence_count));
    }
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let normalized = normalize_whitespace(text);
    let length = char_len(&normalized);
    if length < MIN_TEXT_CHARS {
        return Err(ValidationError::TooShort { length });
    }

    let sentences: Vec<&str> = split_sentences(&normalized)
        .into_iter()
        .map(str::trim)
        .filter(|s| char_len(s) > MIN_SENTENCE_CHARS)
        .collect();

    if sentences.is_empty() {
        return Err(ValidationError::NoSentences);
    }

    if sentences.len() <= sentence_count {
        return Ok(sentences.join(" "));
    }

    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| content_tokens(s)).collect();
    let frequencies = term_frequencies(&tokenized);

    let scores: Vec<f64> = tokenized
        .iter()
        .map(|tokens| score_sentence(tokens, &frequencies))
        .collect();

    let mut selected = top_indices(&scores, sentence_count);
    if selected.is_empty() {
        selected = (0..sentence_count.min(sentences.len())).collect();
    }

    tracing::debug!(
        "Selected {} of {} sentences",
        selected.len(),
        sentences.len()
    );

    Ok(selected
        .into_iter()
        .map(|i| sentences[i])
        .collect::<Vec<_>>()
        .join(" "))
}

fn term_frequencies(tokenized: &[Vec<String>]) -> HashMap<&str, usize> {
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for token in tokenized.iter().flatten() {
        *frequencies.entry(token.as_str()).or_insert(0) += 1;
    }
    frequencies
}

/// Mean frequency of the sentence's tokens; 0 for a sentence without any
fn score_sentence(tokens: &[String], frequencies: &HashMap<&str, usize>) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let total: usize = tokens
        .iter()
        .map(|t| frequencies.get(t.as_str()).copied().unwrap_or(0))
        .sum();
    total as f64 / tokens.len() as f64
}

/// Indices of the `n` best scores, returned in ascending index order
///
/// Equal scores rank the earlier sentence first.
fn top_indices(scores: &[f64], n: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    ranked.truncate(n);
    ranked.sort_unstable();
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIMALS: &str = "Cats are small. Dogs are loyal animals that bark. \
                           Cats often sleep most of the day and love warmth.";

    #[test]
    fn test_picks_two_in_document_order() {
        let summary = summarize(ANIMALS, 2).unwrap();
        assert_eq!(
            summary,
            "Cats are small. Cats often sleep most of the day and love warmth."
        );
    }

    #[test]
    fn test_short_document_passthrough() {
        let summary = summarize(ANIMALS, 3).unwrap();
        assert_eq!(
            summary,
            "Cats are small. Dogs are loyal animals that bark. \
             Cats often sleep most of the day and love warmth."
        );

        let summary = summarize(ANIMALS, 10).unwrap();
        assert_eq!(summary, normalize_whitespace(ANIMALS));
    }

    #[test]
    fn test_output_keeps_source_order() {
        let text = "Rust programs compile to native code quickly. \
                    Unrelated weather remarks appear here today. \
                    Rust compile times for native Rust programs matter. \
                    Another sentence about gardening and flowers. \
                    Native Rust code compile programs Rust.";
        let summary = summarize(text, 2).unwrap();

        let normalized = normalize_whitespace(text);
        let sentences: Vec<&str> = split_sentences(&normalized);
        let positions: Vec<usize> = split_sentences(&summary)
            .iter()
            .map(|s| sentences.iter().position(|o| o == s).unwrap())
            .collect();

        assert_eq!(positions.len(), 2);
        assert!(positions[0] < positions[1]);
        // Gardening and weather sentences score lowest
        assert!(!summary.contains("weather"));
        assert!(!summary.contains("gardening"));
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        // Every content token appears exactly once, so all scores are 1.0
        let text = "Alpha bravo charlie delta. Echo foxtrot golf hotel. \
                    India juliet kilo lima. Mike november oscar papa.";
        let summary = summarize(text, 2).unwrap();
        assert_eq!(summary, "Alpha bravo charlie delta. Echo foxtrot golf hotel.");
    }

    #[test]
    fn test_sentence_without_tokens_scores_zero() {
        let text = "It is what it is, or not. Sunny beaches attract sunny tourists. \
                    Sunny weather brings tourists.";
        let summary = summarize(text, 2).unwrap();
        assert!(!summary.contains("It is what"));
    }

    #[test]
    fn test_short_fragments_dropped() {
        let text = "Ok. Fine. The committee approved the final budget yesterday. \
                    Yes. Members then debated the schedule for next year.";
        let summary = summarize(text, 5).unwrap();
        assert_eq!(
            summary,
            "The committee approved the final budget yesterday. \
             Members then debated the schedule for next year."
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(summarize("", 3), Err(ValidationError::EmptyText)));
        assert!(matches!(summarize(" \n\t ", 3), Err(ValidationError::EmptyText)));
    }

    #[test]
    fn test_rejects_too_short() {
        let result = summarize("Far   too   short to   matter.", 3);
        assert!(matches!(result, Err(ValidationError::TooShort { length: 24 })));
    }

    #[test]
    fn test_rejects_no_sentences() {
        let text = "Tiny one. Tiny two. Tiny six. Tiny ten. Tiny red. Tiny big. Tiny hat.";
        assert!(matches!(summarize(text, 2), Err(ValidationError::NoSentences)));
    }

    #[test]
    fn test_rejects_zero_count() {
        assert!(matches!(
            summarize(ANIMALS, 0),
            Err(ValidationError::InvalidSentenceCount(0))
        ));
    }

    #[test]
    fn test_top_indices() {
        assert_eq!(top_indices(&[1.0, 3.0, 2.0, 3.0], 2), vec![1, 3]);
        assert_eq!(top_indices(&[0.0, 0.0, 0.0], 2), vec![0, 1]);
    }
}
