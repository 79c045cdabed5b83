//! Port trait implementation for `HttpJokeSource`.
//!
//! This module implements the core-owned `JokeSourcePort` trait, converting
//! internal fetch errors into the core `NetworkError`.

use async_trait::async_trait;
use punchline_core::{JokeSourcePort, NetworkError, Url};
use serde_json::Value;
use tracing::debug;

use crate::client::HttpJokeSource;
use crate::error::FetchError;
use crate::http::HttpBackend;

/// Convert internal `FetchError` to core `NetworkError`.
///
/// Every variant is a transport-level failure from the pipeline's point of
/// view, so the mapping only stringifies the cause.
pub(crate) fn map_error(err: FetchError) -> NetworkError {
    match &err {
        FetchError::Status { status, url } => {
            debug!(status, %url, "Joke endpoint returned an error status");
        }
        FetchError::Transport(e) => {
            debug!(error = %e, timeout = e.is_timeout(), "HTTP transport failed");
        }
    }
    NetworkError::new(err.to_string())
}

#[async_trait]
impl<B: HttpBackend + Send + Sync> JokeSourcePort for HttpJokeSource<B> {
    async fn get(&self, url: &Url) -> Result<Value, NetworkError> {
        let body = self.backend.get_json(url).await.map_err(map_error)?;
        debug!(%url, "Fetched joke payload");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use punchline_core::{JokeError, JokeRequest};
    use serde_json::json;

    fn url() -> Url {
        Url::parse("https://example.com/random_joke").unwrap()
    }

    #[test]
    fn test_map_error_status() {
        let err = FetchError::Status {
            status: 404,
            url: "https://example.com/random_joke".to_string(),
        };
        assert_eq!(
            map_error(err).message(),
            "Request failed with status code 404"
        );
    }

    #[tokio::test]
    async fn test_get_passes_body_through() {
        let body = json!({"id": 7, "setup": "a", "punchline": "b"});
        let source = HttpJokeSource::with_backend(FakeBackend::new(CannedResponse::Json(
            body.clone(),
        )));

        assert_eq!(source.get(&url()).await.unwrap(), body);
        assert_eq!(source.backend.requested(), [url().to_string()]);
    }

    #[tokio::test]
    async fn test_get_maps_status_to_network_error() {
        let source = HttpJokeSource::with_backend(FakeBackend::new(CannedResponse::Status(500)));

        let err = source.get(&url()).await.unwrap_err();
        assert_eq!(err.message(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_non_json_body_reaches_the_validator() {
        let source =
            HttpJokeSource::with_backend(FakeBackend::new(CannedResponse::Raw("<html>oops</html>")));

        let err = JokeRequest::new(url()).run(&source).await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "The data did not return in the shape we expected! $: expected object, received string"
        );
        assert!(matches!(err, JokeError::Validation(_)));
    }
}
