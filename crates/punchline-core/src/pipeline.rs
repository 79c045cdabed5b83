//! The fetch-then-validate pipeline.
//!
//! A [`JokeRequest`] is a description of work: building one performs no I/O.
//! The network call happens only when the request is run against a
//! [`JokeSourcePort`], which is supplied at that point rather than captured
//! at construction.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{Joke, validate_joke};
use crate::ports::{JokeError, JokeResult, JokeSourcePort};

/// The public random-joke endpoint.
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// A pending pipeline run that owns everything it needs.
pub type JokeTask = Pin<Box<dyn Future<Output = JokeResult<Joke>> + Send + 'static>>;

/// One fetch-validate run against a fixed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeRequest {
    url: Url,
}

impl JokeRequest {
    pub const fn new(url: Url) -> Self {
        Self { url }
    }

    /// Parse `url` and describe a request against it.
    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Url::parse(url).map(Self::new)
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Execute the request: fetch, then validate.
    ///
    /// Validation only runs when the fetch succeeded. The returned future does
    /// nothing until polled.
    pub async fn run<S>(&self, source: &S) -> JokeResult<Joke>
    where
        S: JokeSourcePort + ?Sized,
    {
        debug!(url = %self.url, "Fetching joke");

        let body = source.get(&self.url).await.inspect_err(|e| {
            warn!(url = %self.url, error = %e, "Joke fetch failed");
        })?;

        validate_joke(&body).map_err(|e| {
            warn!(url = %self.url, error = %e, "Joke payload failed validation");
            JokeError::from(e)
        })
    }

    /// Bind the request to a shared source, producing a `'static` task that can
    /// be spawned.
    pub fn into_task(self, source: Arc<dyn JokeSourcePort>) -> JokeTask {
        Box::pin(async move { self.run(source.as_ref()).await })
    }
}

impl Default for JokeRequest {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_JOKE_URL).expect("default joke URL is valid"))
    }
}
