//! HTTP facade error definitions.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while sending a request through the facade.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Value },

    /// No response arrived within the configured timeout.
    #[error("Timeout of {0}ms exceeded")]
    Timeout(u64),

    /// Connection-level failure (DNS, refused, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The request target could not be turned into a URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The method is not a valid HTTP token.
    #[error("Invalid request method '{0}'")]
    InvalidMethod(String),
}

impl HttpError {
    /// HTTP status carried by the failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body carried by the failure, if a response was received.
    pub fn body(&self) -> Option<&Value> {
        match self {
            HttpError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for HTTP facade operations.
pub type HttpResult<T> = Result<T, HttpError>;
