//! Centralized error types for PitchLens.

use thiserror::Error;

/// Fallback shown when an upload fails without a backend detail.
pub const UPLOAD_FAILED: &str = "Upload failed";

/// Fallback shown when a single analysis cannot be loaded.
pub const ANALYSIS_FAILED: &str = "Failed to load analysis";

/// Fallback shown when a comparison request fails.
pub const COMPARE_FAILED: &str = "Failed to compare pitches";

/// Main error type for PitchLens operations.
#[derive(Error, Debug)]
pub enum PitchError {
    /// Rejected on the client before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with an error body carrying a `detail` string.
    #[error("Backend error ({status}): {detail}")]
    Backend { status: u16, detail: String },

    #[error("Unexpected response ({status}): {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for PitchLens operations.
pub type PitchResult<T> = Result<T, PitchError>;

impl PitchError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Backend-provided detail, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Backend { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Text to show the user: the backend detail or validation message
    /// verbatim, otherwise the operation's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            _ => self.detail().unwrap_or(fallback).to_string(),
        }
    }
}
