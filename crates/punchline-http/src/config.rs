//! Public configuration for the HTTP joke source.

use std::time::Duration;

/// Configuration for the HTTP joke source.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use punchline_http::JokeClientConfig;
/// use std::time::Duration;
///
/// let config = JokeClientConfig::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct JokeClientConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Whole-request timeout, connect included
    pub(crate) timeout: Duration,
}

impl Default for JokeClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("punchline/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl JokeClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds. A request that exceeds it is reported as a
    /// network failure.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
