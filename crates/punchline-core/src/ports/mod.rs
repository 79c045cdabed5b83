//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - Transport failures are reported as [`NetworkError`], never as panics
//! - One capability per trait

mod error;
mod joke_source;

pub use error::{
    JokeError, JokeErrorKind, JokeResult, NETWORK_ERROR_PREFIX, NetworkError, VALIDATION_ERROR_PREFIX,
};
pub use joke_source::JokeSourcePort;

#[cfg(test)]
pub use joke_source::MockJokeSourcePort;
