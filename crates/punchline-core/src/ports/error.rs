//! Error types for the joke pipeline.
//!
//! The pipeline can fail in exactly two ways. Both are ordinary values: they
//! are recovered at the pipeline boundary and always end up as a message on
//! screen.

use serde::Serialize;
use thiserror::Error;

use crate::domain::ValidationError;

/// Prefix shown before a transport failure's cause.
pub const NETWORK_ERROR_PREFIX: &str = "There was something wrong with the API call!";

/// Prefix shown before a shape mismatch's detail.
pub const VALIDATION_ERROR_PREFIX: &str = "The data did not return in the shape we expected!";

/// Any transport-level failure: DNS, connect, timeout, non-2xx status, or an
/// unreadable body.
///
/// The message is the stringified cause, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NetworkError {
    message: String,
}

impl NetworkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a failed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JokeError {
    /// The fetch step failed; validation never ran.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The fetch succeeded but the body had the wrong shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for pipeline operations.
pub type JokeResult<T> = Result<T, JokeError>;

/// Discriminant of [`JokeError`], for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JokeErrorKind {
    Network,
    Validation,
}

impl JokeError {
    pub const fn kind(&self) -> JokeErrorKind {
        match self {
            Self::Network(_) => JokeErrorKind::Network,
            Self::Validation(_) => JokeErrorKind::Validation,
        }
    }

    /// The text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(e) => format!("{NETWORK_ERROR_PREFIX} {e}"),
            Self::Validation(e) => format!("{VALIDATION_ERROR_PREFIX} {e}"),
        }
    }
}
