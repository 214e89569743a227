//! Failures on the lookup path.
//!
//! Every variant ends up as the same kind of thing for the user: a single
//! message in the widget's error line. The variants exist so logs and the
//! one-shot `search` command can say what actually went wrong.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("GitHub API error: {message} ({status})")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response from GitHub: {0}")]
    Parse(String),
}

impl FetchError {
    /// Build a status error, falling back to the canonical reason phrase
    /// when the API gave no message of its own.
    pub fn status(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = status.canonical_reason().unwrap_or("Unknown").to_string();
        }
        FetchError::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// Whether the API refused the request because of rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if *status == 403 || *status == 429)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::status(status, String::new());
        }
        if err.is_decode() {
            return FetchError::Parse(err.to_string());
        }
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
