//! Text primitives shared by the summarizer and the retriever

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").unwrap());

/// Punctuation that ends a sentence, plus the whitespace after it
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "is", "at", "of", "on", "and", "a", "to", "in", "for", "with", "as", "by", "an",
        "be", "are", "or", "from", "that", "this", "it", "we", "you", "but", "not", "what", "go",
        "their",
    ]
    .into_iter()
    .collect()
});

/// Collapse every whitespace run to a single space and trim
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Lowercase and return every `[a-z0-9]+` run, in order
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// [`tokenize`], minus stopwords and tokens of two characters or fewer
pub fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.len() > 2 && !STOP_WORDS.contains(t.as_str()))
        .collect()
}

/// Split after `.`, `!` or `?` when followed by whitespace
///
/// The punctuation stays with its sentence; the whitespace is dropped.
/// Abbreviations such as "e.g. this" split too.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        // Keep the single punctuation byte
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Length in characters, not bytes
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First `n` characters of `text`
pub fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
