// Error types for resume-match.
// Covers local validation, analysis service failures, and filesystem errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The analysis service answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl MatchError {
    pub fn validation(message: impl Into<String>) -> Self {
        MatchError::Validation(message.into())
    }

    /// True if the error was produced without talking to the server.
    pub fn is_local(&self) -> bool {
        matches!(self, MatchError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
