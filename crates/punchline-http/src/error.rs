//! Internal error types for HTTP fetches.
//!
//! These errors are internal to `punchline-http` and are mapped to the core
//! `NetworkError` at the port boundary.

use thiserror::Error;

/// Result type alias for HTTP operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while fetching a payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Connect, TLS, timeout or body-read failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}
