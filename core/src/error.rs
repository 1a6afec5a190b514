//! Error types for the divination API client.
//!
//! # Design
//! Transport failures keep the original `reqwest::Error` so callers receive
//! exactly what the HTTP layer produced. Non-2xx responses land in `Http` with
//! the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `DivinationClient` and `ApiClient`.
///
/// Every variant means the request failed and no result is returned.
/// `is_request_failure` narrows that to failures on the wire: the backend
/// was unreachable or rejected the call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// True for `Transport` and `Http`; false for local codec failures.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Http { .. })
    }

    /// Status code of a rejected request, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
