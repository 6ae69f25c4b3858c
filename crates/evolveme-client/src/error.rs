//! Error types for the API client.

use evolveme_core::text;
use evolveme_core::CoreError;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when using the API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response from the backend.
    #[error("API error (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        /// The body's `error` field, when the backend sent one.
        message: Option<String>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Token storage could not be read or written.
    #[error("token storage error: {0}")]
    Storage(String),

    /// Rejected locally before sending.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The operation needs a stored token and there is none.
    #[error("not logged in")]
    NotAuthenticated,
}

impl ClientError {
    /// Text for the error banner: the server's message if it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ClientError::Invalid(e) => e.to_string(),
            ClientError::NotAuthenticated => text::NOT_LOGGED_IN.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error body returned by the backend: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
