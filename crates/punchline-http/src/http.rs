//! HTTP backend abstraction.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and performs exactly one request per call.

use async_trait::async_trait;
use punchline_core::Url;
use serde_json::Value;
use tracing::debug;

use crate::config::JokeClientConfig;
use crate::error::{FetchError, FetchResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `JokeSourcePort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url` and return the body as untyped JSON.
    ///
    /// A 2xx body that is not JSON comes back as a JSON string holding the
    /// raw text, leaving the shape check to the validator.
    async fn get_json(&self, url: &Url) -> FetchResult<Value>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &JokeClientConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json(&self, url: &Url) -> FetchResult<Value> {
        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "Received response");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(parse_body(&bytes))
    }
}

/// Parse a response body, falling back to the raw text when it is not JSON.
pub(crate) fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        debug!(error = %e, len = bytes.len(), "Response body is not JSON, passing it on as text");
        Value::String(String::from_utf8_lossy(bytes).into_owned())
    })
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
