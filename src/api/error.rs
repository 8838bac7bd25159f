use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the resource layer. Nothing retries; every error is
/// terminal for the request that produced it and the user re-initiates.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Timeout, connectivity, TLS and other transport-level failures.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the backend's `message` field when the
    /// error body carried one, a generic fallback otherwise.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// 2xx response whose body does not match the canonical `data` envelope.
    #[error("unexpected response from server: {0}")]
    InvalidResponse(String),

    /// Local storage failed while preparing the request (credential read,
    /// image file read).
    #[error("local storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}
