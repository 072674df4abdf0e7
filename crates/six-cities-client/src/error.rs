//! Error type for API calls
//!
//! Every failure is reported upward unchanged; callers decide what a
//! rejection means for them.

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status code
    #[error("{method} {path} failed with status {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },

    /// No response within the client-wide timeout
    #[error("{method} {path} timed out")]
    Timeout { method: &'static str, path: String },

    /// Connection, TLS or protocol failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Timeout { .. } | Self::Decode(_) => None,
        }
    }

    /// The server rejected the request's credentials
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
