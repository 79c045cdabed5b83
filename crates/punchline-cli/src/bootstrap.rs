//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The HTTP source is instantiated here and handed to
//! handlers behind the `JokeSourcePort` trait.

use std::sync::Arc;
use std::time::Duration;

use punchline_core::{JokeController, JokeRequest, JokeSourcePort};
use punchline_http::{DefaultJokeSource, JokeClientConfig};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Joke endpoint, not yet validated.
    pub url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            url: cli.url.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Transport used by every request.
    pub source: Arc<dyn JokeSourcePort>,
    /// The request every trigger runs.
    pub request: JokeRequest,
}

impl CliContext {
    pub fn new(source: Arc<dyn JokeSourcePort>, request: JokeRequest) -> Self {
        Self { source, request }
    }

    /// A controller sharing this context's source and request.
    pub fn controller(&self) -> JokeController {
        JokeController::new(Arc::clone(&self.source), self.request.clone())
    }
}

/// Validate configuration and build the HTTP-backed context.
///
/// Nothing is fetched here.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let request = JokeRequest::parse(&config.url)
        .map_err(|e| CliError::Config(format!("invalid URL '{}': {e}", config.url)))?;

    if !matches!(request.url().scheme(), "http" | "https") {
        return Err(CliError::Config(format!(
            "unsupported URL scheme '{}', expected http or https",
            request.url().scheme()
        )));
    }

    if config.timeout.is_zero() {
        return Err(CliError::Config(
            "timeout must be at least one second".to_string(),
        ));
    }

    let client_config = JokeClientConfig::new().with_timeout(config.timeout);
    let source = DefaultJokeSource::new(&client_config)
        .map_err(|e| CliError::Config(format!("failed to build HTTP client: {e}")))?;

    debug!(url = %request.url(), timeout = ?config.timeout, "CLI context ready");

    Ok(CliContext::new(Arc::new(source), request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(url: &str, timeout_secs: u64) -> CliConfig {
        CliConfig {
            url: url.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::parse_from(["punchline", "--timeout-secs", "3"]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.url, punchline_core::DEFAULT_JOKE_URL);
    }

    #[test]
    fn test_bootstrap_default_url() {
        let ctx = bootstrap(&config(punchline_core::DEFAULT_JOKE_URL, 10)).unwrap();
        assert_eq!(ctx.request, JokeRequest::default());
    }

    #[test]
    fn test_bootstrap_rejects_invalid_url() {
        let err = bootstrap(&config("not a url", 10)).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_bootstrap_rejects_non_http_scheme() {
        let err = bootstrap(&config("file:///etc/jokes.json", 10)).err().unwrap();
        assert!(err.to_string().contains("unsupported URL scheme"));
    }

    #[test]
    fn test_bootstrap_rejects_zero_timeout() {
        let err = bootstrap(&config(punchline_core::DEFAULT_JOKE_URL, 0)).err().unwrap();
        assert!(matches!(err, CliError::Config(_)));
    }
}
