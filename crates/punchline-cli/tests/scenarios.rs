//! End-to-end scenarios through the CLI handlers with a fake transport.
//!
//! Each scenario wires a `CliContext` around a canned source, runs a handler
//! and checks the exact text written to stdout.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use punchline_cli::handlers::{interactive, once};
use punchline_cli::{CliContext, OutputFormat};
use punchline_core::{JokeError, JokeRequest, JokeSourcePort, NetworkError, PLACEHOLDER, Url};
use serde_json::{Value, json};

/// Transport that answers every request with the same canned result.
struct CannedSource {
    response: Result<Value, NetworkError>,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl CannedSource {
    fn resolves(body: Value) -> Self {
        Self {
            response: Ok(body),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn rejects(message: &str) -> Self {
        Self {
            response: Err(NetworkError::new(message)),
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl JokeSourcePort for CannedSource {
    async fn get(&self, _url: &Url) -> Result<Value, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response.clone()
    }
}

fn context(source: CannedSource) -> (CliContext, Arc<AtomicUsize>) {
    let calls = Arc::clone(&source.calls);
    let request = JokeRequest::parse("http://mocked-url.com/").unwrap();
    (CliContext::new(Arc::new(source), request), calls)
}

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_resolved_joke_is_displayed() {
    let (ctx, calls) = context(CannedSource::resolves(
        json!({"setup": "a", "punchline": "b"}),
    ));
    let mut out = Vec::new();

    let outcome = once::execute(&ctx, OutputFormat::Text, &mut out)
        .await
        .unwrap();

    let joke = outcome.unwrap();
    assert_eq!((joke.setup(), joke.punchline()), ("a", "b"));
    assert_eq!(lines(&out), ["a ... b"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_rejected_transport_is_displayed_as_api_error() {
    let (ctx, _) = context(CannedSource::rejects("mocked error"));
    let mut out = Vec::new();

    let outcome = once::execute(&ctx, OutputFormat::Text, &mut out)
        .await
        .unwrap();

    assert_eq!(
        outcome.unwrap_err(),
        JokeError::Network(NetworkError::new("mocked error"))
    );
    assert_eq!(
        lines(&out),
        ["There was something wrong with the API call! mocked error"]
    );
}

#[tokio::test]
async fn test_missing_punchline_is_displayed_as_shape_error() {
    let (ctx, _) = context(CannedSource::resolves(json!({"setup": "a"})));
    let mut out = Vec::new();

    let outcome = once::execute(&ctx, OutputFormat::Text, &mut out)
        .await
        .unwrap();

    assert!(matches!(outcome, Err(JokeError::Validation(_))));
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("The data did not return in the shape we expected!"));
}

#[tokio::test]
async fn test_once_json_output() {
    let (ctx, _) = context(CannedSource::resolves(
        json!({"id": 3, "type": "general", "setup": "a", "punchline": "b"}),
    ));
    let mut out = Vec::new();

    once::execute(&ctx, OutputFormat::Json, &mut out)
        .await
        .unwrap()
        .unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        value,
        json!({"status": "joke", "setup": "a", "punchline": "b"})
    );
}

#[tokio::test]
async fn test_interactive_shows_placeholder_then_joke() {
    let (ctx, calls) = context(CannedSource::resolves(
        json!({"setup": "a", "punchline": "b"}),
    ));
    let mut out = Vec::new();

    let summary = interactive::execute(&ctx, OutputFormat::Text, &b"\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(summary.started, 1);
    assert_eq!(lines(&out), [PLACEHOLDER, "a ... b"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_interactive_quit_without_fetching() {
    let (ctx, calls) = context(CannedSource::resolves(
        json!({"setup": "a", "punchline": "b"}),
    ));
    let mut out = Vec::new();

    let summary = interactive::execute(&ctx, OutputFormat::Text, &b"q\n\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(summary.started, 0);
    assert_eq!(lines(&out), [PLACEHOLDER]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_interactive_ignores_presses_while_in_flight() {
    let (ctx, calls) = context(
        CannedSource::resolves(json!({"setup": "a", "punchline": "b"}))
            .with_delay(Duration::from_millis(200)),
    );
    let mut out = Vec::new();

    let summary = interactive::execute(&ctx, OutputFormat::Text, &b"\n\n\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(summary.started, 1);
    assert_eq!(summary.ignored, 2);
    assert_eq!(lines(&out), [PLACEHOLDER, "a ... b"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_interactive_non_utf8_line_is_a_press() {
    let (ctx, calls) = context(CannedSource::resolves(
        json!({"setup": "a", "punchline": "b"}),
    ));
    let mut out = Vec::new();

    let summary = interactive::execute(&ctx, OutputFormat::Text, &b"\xff\xfe\n"[..], &mut out)
        .await
        .unwrap();

    assert_eq!(summary.started, 1);
    assert_eq!(lines(&out), [PLACEHOLDER, "a ... b"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_interactive_error_output_in_json() {
    let (ctx, _) = context(CannedSource::rejects("offline"));
    let mut out = Vec::new();

    interactive::execute(&ctx, OutputFormat::Json, &b"\n"[..], &mut out)
        .await
        .unwrap();

    let printed = lines(&out);
    assert_eq!(printed.len(), 1);
    let value: Value = serde_json::from_str(&printed[0]).unwrap();
    assert_eq!(value["kind"], "network");
    assert_eq!(
        value["message"],
        "There was something wrong with the API call! offline"
    );
}
