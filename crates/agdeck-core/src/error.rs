//! Error type shared by every Agency Deck crate
//!
//! Nothing in the core is fatal: storage problems fall back to defaults
//! and assistant failures become a fallback chat message. Errors reach
//! `main` only from terminal setup and logging.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal / configuration
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Preference storage unavailable at: {path}")]
    StorageUnavailable { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Assistant (text-generation collaborator)
    // ─────────────────────────────────────────────────────────────
    #[error("Assistant error: {message}")]
    Assistant { message: String },

    #[error("Assistant request timed out after {secs}s")]
    AssistantTimeout { secs: u64 },

    #[error("Assistant is not configured (no API key)")]
    AssistantUnconfigured,
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn storage_unavailable(path: impl Into<PathBuf>) -> Self {
        Self::StorageUnavailable { path: path.into() }
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self::Assistant {
            message: message.into(),
        }
    }

    /// Collaborator failures; the chat shows a fallback reply for these.
    pub fn is_assistant_failure(&self) -> bool {
        matches!(
            self,
            Error::Assistant { .. } | Error::AssistantTimeout { .. } | Error::AssistantUnconfigured
        )
    }
}

/// Log an error with a short description of what was being attempted
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", context.into(), err);
            err
        })
    }
}
