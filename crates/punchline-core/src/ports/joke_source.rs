//! Joke source port trait.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::error::NetworkError;

/// Port for the transport that fetches raw joke payloads.
///
/// This trait defines the single capability the pipeline needs from the
/// network. The HTTP implementation lives in `punchline-http`.
///
/// # Design
///
/// - Returns the body untyped; shape checks happen in the pipeline
/// - Every failure is a [`NetworkError`] carrying the stringified cause
/// - One outbound request per call, no retries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JokeSourcePort: Send + Sync {
    /// Perform a GET against `url` and return the parsed JSON body.
    async fn get(&self, url: &Url) -> Result<Value, NetworkError>;
}
