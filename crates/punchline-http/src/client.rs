//! HTTP joke source.

use punchline_core::NetworkError;

use crate::config::JokeClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default joke source using the reqwest HTTP backend.
pub type DefaultJokeSource = HttpJokeSource<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Joke source backed by an HTTP client.
///
/// This type is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultJokeSource` for production code and interact with it through
/// the `JokeSourcePort` trait.
pub struct HttpJokeSource<B: HttpBackend> {
    pub(crate) backend: B,
}

impl DefaultJokeSource {
    /// Create a new source with the given configuration.
    ///
    /// Fails only if the underlying HTTP client cannot be built (for example
    /// when no TLS backend is available).
    pub fn new(config: &JokeClientConfig) -> Result<Self, NetworkError> {
        let backend = ReqwestBackend::new(config).map_err(crate::port::map_error)?;
        Ok(Self { backend })
    }
}

impl<B: HttpBackend> HttpJokeSource<B> {
    /// Create a new source with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}
