//! Core domain errors.

use thiserror::Error;

/// Core domain errors for EvolveMe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required form field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Message content was empty or whitespace.
    #[error("Message content cannot be empty")]
    EmptyMessage,

    /// Timestamp could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
