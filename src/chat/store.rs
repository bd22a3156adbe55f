//! In-memory session store with LRU eviction
//!
//! Sessions live only in process memory. When the store is full the least
//! recently used session is dropped.

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use lru::LruCache;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::session::{Answer, ChatSession, Message};
use crate::chunk::Chunk;

/// Sessions kept when no capacity is configured
pub const DEFAULT_MAX_SESSIONS: usize = 64;

/// Summary of a stored session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
    pub document_name: String,
    pub page_count: usize,
    pub chunk_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&ChatSession> for SessionInfo {
    fn from(session: &ChatSession) -> Self {
        Self {
            session_id: session.id.clone(),
            document_name: session.document_name.clone(),
            page_count: session.page_count,
            chunk_count: session.chunks().len(),
            created_at: session.created_at,
        }
    }
}

/// Shared handle to all live chat sessions
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<LruCache<String, ChatSession>>>,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    /// Create a store holding at most `capacity` sessions (0 means the default)
    pub fn new(capacity: usize) -> Self {
        let size = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_MAX_SESSIONS))
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            sessions: Arc::new(RwLock::new(LruCache::new(size))),
            capacity: size.get(),
        }
    }

    /// Start a session for an already-chunked document
    pub async fn create(
        &self,
        document_name: String,
        page_count: usize,
        chunks: Vec<Chunk>,
    ) -> SessionInfo {
        let id = Uuid::new_v4().to_string();
        let session = ChatSession::new(id.clone(), document_name, page_count, chunks);
        let info = SessionInfo::from(&session);

        let mut sessions = self.sessions.write().await;
        if let Some((evicted, _)) = sessions.push(id, session) {
            tracing::info!("Session store full, evicted session {}", evicted);
        }

        info
    }

    /// Ask a question in session `id`; `None` if the session is gone
    pub async fn ask(
        &self,
        id: &str,
        question: &str,
        k: usize,
        snippet_chars: usize,
    ) -> Option<Answer> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id)?;
        Some(session.ask(question, k, snippet_chars))
    }

    pub async fn info(&self, id: &str) -> Option<SessionInfo> {
        let sessions = self.sessions.read().await;
        sessions.peek(id).map(SessionInfo::from)
    }

    pub async fn transcript(&self, id: &str) -> Option<Vec<Message>> {
        let mut sessions = self.sessions.write().await;
        sessions.get(id).map(|s| s.transcript().to_vec())
    }

    /// Empty a session's transcript; `false` if the session is gone
    pub async fn clear_transcript(&self, id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(id) {
            Some(session) => {
                session.clear();
                true
            }
            None => false,
        }
    }

    /// End a session; `false` if it did not exist
    pub async fn remove(&self, id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.pop(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
