//! Chat session state and answer assembly

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;
use crate::retrieve::{rank, ScoredChunk};
use crate::text::prefix_chars;

/// Reply used when retrieval comes back empty
pub const NOT_FOUND_ANSWER: &str =
    "I couldn't find anything in this document related to your question.";

/// Transcript speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Assistant reply plus the chunks it quotes
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<ScoredChunk>,
}

/// Chunks and transcript for one uploaded document
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: String,
    pub document_name: String,
    pub page_count: usize,
    pub created_at: DateTime<Utc>,
    chunks: Vec<Chunk>,
    transcript: Vec<Message>,
}

impl ChatSession {
    pub fn new(id: String, document_name: String, page_count: usize, chunks: Vec<Chunk>) -> Self {
        Self {
            id,
            document_name,
            page_count,
            created_at: Utc::now(),
            chunks,
            transcript: Vec::new(),
        }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Answer `question` from the top `k` chunks and record both turns
    pub fn ask(&mut self, question: &str, k: usize, snippet_chars: usize) -> Answer {
        let sources = rank(question, &self.chunks, k);
        let text = compose_answer(question, &sources, snippet_chars);

        tracing::debug!(
            session = %self.id,
            sources = sources.len(),
            "Answered question"
        );

        self.transcript.push(Message::user(question));
        self.transcript.push(Message::assistant(text.clone()));

        Answer { text, sources }
    }

    /// Drop the whole transcript; chunks stay
    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}

/// Template answer: a `[Page N]` excerpt per chunk, then the question echoed
pub fn compose_answer(question: &str, sources: &[ScoredChunk], snippet_chars: usize) -> String {
    if sources.is_empty() {
        return NOT_FOUND_ANSWER.to_string();
    }

    let excerpts = sources
        .iter()
        .map(|s| {
            format!(
                "[Page {}] {}",
                s.chunk.page,
                prefix_chars(&s.chunk.text, snippet_chars)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\nQuestion: {}", excerpts, question)
}
