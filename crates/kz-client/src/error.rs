//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Kambaz backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// `message` field of the error body, or the raw body.
        message: String,
    },

    /// Failed to parse a backend response, or to build a request.
    #[error("parse error: {0}")]
    Parse(String),

    /// Signin was rejected.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl ClientError {
    /// HTTP status, if the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::InvalidCredentials => Some(401),
            _ => None,
        }
    }
}
