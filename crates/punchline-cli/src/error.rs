//! CLI-specific error types and exit-code mapping.
//!
//! Pipeline failures are not errors here: they are rendered as display text.
//! These variants cover what can go wrong around the pipeline.

use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid URL, timeout or client setup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading stdin or writing stdout failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Rendering the outcome failed.
    #[error("Output error: {0}")]
    Output(String),

    /// A spawned request task panicked or was aborted.
    #[error("Request task failed: {0}")]
    Task(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: displayed an error message (returned by `main`, not by this type)
    /// - 70: internal software error
    /// - 74: I/O error
    /// - 78: configuration error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,                 // EX_CONFIG
            Self::Io(_) => 74,                     // EX_IOERR
            Self::Output(_) | Self::Task(_) => 70, // EX_SOFTWARE
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

impl From<tokio::task::JoinError> for CliError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
