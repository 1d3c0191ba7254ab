//! Error types for AgriGuide.
//!
//! Library crates use [`AgriGuideError`] via `thiserror`.
//! The CLI app wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all AgriGuide operations.
#[derive(Debug, thiserror::Error)]
pub enum AgriGuideError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/transport failure or non-success status from the generation
    /// endpoint. Never retried by the engine; surfaced to the caller as a
    /// connectivity failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered successfully but the payload carried no
    /// generated text.
    #[error("generation endpoint returned an empty response")]
    EmptyResponse,

    /// Every catalog field fell back to placeholder text — the response
    /// contained nothing the extractor could recognize. Distinct from
    /// [`Transport`](Self::Transport) so callers can tell "service
    /// unreachable" from "service returned unparseable content".
    #[error("no usable content extracted for {subject:?}")]
    NoUsableContent { subject: String },

    /// Filesystem I/O error (config file handling).
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, AgriGuideError>;

impl AgriGuideError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a transport error from any displayable message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
