//! Chat with one document
//!
//! A session holds the chunks of a single uploaded document and an
//! append-only transcript. Answers are assembled from the retrieved chunks;
//! nothing is generated.

mod session;
mod store;

pub use session::{compose_answer, Answer, ChatSession, Message, Role, NOT_FOUND_ANSWER};
pub use store::{SessionInfo, SessionStore, DEFAULT_MAX_SESSIONS};

/// Chunks retrieved per question
pub const DEFAULT_TOP_K: usize = 3;

/// Characters of each chunk quoted in an answer
pub const DEFAULT_SNIPPET_CHARS: usize = 300;
