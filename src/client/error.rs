use reqwest::StatusCode;
use thiserror::Error;

/// Shown when a search fails without a message from the backend.
pub const SEARCH_FAILED: &str = "Eroare la căutare. Vă rugăm să încercați din nou.";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, TLS).
    #[error("Failed to send request: {0}")]
    Network(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Backend-provided message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message to show the user after a failed search.
    pub fn search_message(&self) -> String {
        self.detail().unwrap_or(SEARCH_FAILED).to_string()
    }
}
