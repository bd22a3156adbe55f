//! Configuration management for PDF Insight

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::chat::{DEFAULT_MAX_SESSIONS, DEFAULT_SNIPPET_CHARS, DEFAULT_TOP_K};
use crate::chunk::DEFAULT_MAX_CHARS_PER_CHUNK;
use crate::extract::{ExtractOptions, DEFAULT_MAX_PAGES};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineConfig,
    pub pipeline: PipelineConfig,
    pub sessions: SessionConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Request body limit for uploads
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub init_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_pages: usize,
    pub max_chars_per_chunk: usize,
    pub retrieval_top_k: usize,
    pub answer_snippet_chars: usize,
    pub summary_sentences: usize,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub max_sessions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_upload_bytes: 50 * 1024 * 1024,
            },
            engine: EngineConfig {
                init_timeout_secs: 5,
            },
            pipeline: PipelineConfig {
                max_pages: DEFAULT_MAX_PAGES,
                max_chars_per_chunk: DEFAULT_MAX_CHARS_PER_CHUNK,
                retrieval_top_k: DEFAULT_TOP_K,
                answer_snippet_chars: DEFAULT_SNIPPET_CHARS,
                summary_sentences: 5,
            },
            sessions: SessionConfig {
                max_sessions: DEFAULT_MAX_SESSIONS,
            },
        }
    }
}

impl Config {
    /// Read configuration from the environment, defaulting unset variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_or(&lookup, "SERVER_PORT", defaults.server.port)?,
                max_upload_bytes: parse_or(
                    &lookup,
                    "UPLOAD_MAX_BYTES",
                    defaults.server.max_upload_bytes,
                )?,
            },
            engine: EngineConfig {
                init_timeout_secs: parse_or(
                    &lookup,
                    "ENGINE_INIT_TIMEOUT_SECS",
                    defaults.engine.init_timeout_secs,
                )?,
            },
            pipeline: PipelineConfig {
                max_pages: positive_or(&lookup, "EXTRACT_MAX_PAGES", defaults.pipeline.max_pages)?,
                max_chars_per_chunk: positive_or(
                    &lookup,
                    "CHUNK_MAX_CHARS",
                    defaults.pipeline.max_chars_per_chunk,
                )?,
                retrieval_top_k: positive_or(
                    &lookup,
                    "RETRIEVAL_TOP_K",
                    defaults.pipeline.retrieval_top_k,
                )?,
                answer_snippet_chars: parse_or(
                    &lookup,
                    "ANSWER_SNIPPET_CHARS",
                    defaults.pipeline.answer_snippet_chars,
                )?,
                summary_sentences: positive_or(
                    &lookup,
                    "SUMMARY_SENTENCES",
                    defaults.pipeline.summary_sentences,
                )?,
            },
            sessions: SessionConfig {
                max_sessions: positive_or(
                    &lookup,
                    "CHAT_MAX_SESSIONS",
                    defaults.sessions.max_sessions,
                )?,
            },
        })
    }

    pub fn engine_init_timeout(&self) -> Duration {
        Duration::from_secs(self.engine.init_timeout_secs)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            max_pages: self.pipeline.max_pages,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn positive_or<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        });
    }
    Ok(value)
}
