//! Application state management

use std::sync::Arc;

use crate::chat::SessionStore;
use crate::config::Config;
use crate::document::PdfEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    engine: Arc<dyn PdfEngine>,
    sessions: SessionStore,
}

impl AppState {
    /// Create application state around an already-initialized engine
    pub fn new(config: Config, engine: Arc<dyn PdfEngine>) -> Self {
        let sessions = SessionStore::new(config.sessions.max_sessions);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                engine,
                sessions,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the PDF engine
    pub fn engine(&self) -> &dyn PdfEngine {
        self.inner.engine.as_ref()
    }

    /// Get the chat session store
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }
}
