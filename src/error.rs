//! Error types for the assistant

use thiserror::Error;

/// Main error type
///
/// Lookup misses (unknown phrase, word, language or relationship) are never
/// errors; they resolve to a fallback value at the table level.
#[derive(Error, Debug)]
pub enum Error {
    /// The host has no backend for the requested capability.
    #[error("{0} is not supported in this environment")]
    Unsupported(&'static str),

    /// Listening was requested while a recognition is already running.
    #[error("already listening; stop the current recognition first")]
    Busy,

    #[error("speech error: {0}")]
    Speech(String),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("invalid setting {key}={value}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
