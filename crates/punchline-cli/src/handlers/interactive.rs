//! Interactive session handler.
//!
//! Each line on the input is a press of the "Get a joke" button, whatever
//! bytes it holds. Requests run
//! in the background so input keeps being read while one is in flight; presses
//! that arrive during that time are ignored. `q` or end of input ends the
//! session after the in-flight request, if any, has settled.

use std::io::{self, Write};

use punchline_core::{Joke, JokeController, JokeResult, Trigger};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{OutcomeView, OutputFormat};

/// Shown on stderr when the session starts.
pub const HINT: &str = "Press Enter to get a joke, or type q to quit.";

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Presses that started a request.
    pub started: usize,
    /// Presses ignored because a request was in flight.
    pub ignored: usize,
}

enum Event {
    Input(io::Result<Option<Vec<u8>>>),
    Settled(Result<JokeResult<Joke>, JoinError>),
}

/// Run an interactive session reading presses from `input`.
pub async fn execute<R, W>(
    ctx: &CliContext,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<SessionSummary, CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let controller = ctx.controller();
    let mut lines = input.split(b'\n');
    let mut pending: Option<JoinHandle<JokeResult<Joke>>> = None;
    let mut summary = SessionSummary::default();

    if format == OutputFormat::Text {
        writeln!(out, "{}", controller.display_text().await)?;
    }
    eprintln!("{HINT}");

    loop {
        let event = tokio::select! {
            line = lines.next_segment() => Event::Input(line),
            settled = settle(&mut pending) => Event::Settled(settled),
        };

        match event {
            Event::Input(Err(e)) => return Err(e.into()),
            Event::Input(Ok(None)) => break,
            Event::Input(Ok(Some(line))) if is_quit(&line) => break,
            Event::Input(Ok(Some(_))) => match controller.trigger() {
                Trigger::Started(handle) => {
                    pending = Some(handle);
                    summary.started += 1;
                }
                Trigger::Ignored => {
                    summary.ignored += 1;
                    eprintln!("Still fetching the last joke...");
                }
            },
            Event::Settled(joined) => {
                pending = None;
                show(&controller, &joined?, format, out).await?;
            }
        }
    }

    // Requests are never cancelled; let the last one land before leaving.
    if let Some(handle) = pending.take() {
        show(&controller, &handle.await?, format, out).await?;
    }

    debug!(?summary, "Interactive session ended");
    Ok(summary)
}

/// Resolve the in-flight request, or never resolve when there is none.
async fn settle(
    pending: &mut Option<JoinHandle<JokeResult<Joke>>>,
) -> Result<JokeResult<Joke>, JoinError> {
    match pending.as_mut() {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

async fn show<W: Write>(
    controller: &JokeController,
    outcome: &JokeResult<Joke>,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", controller.display_text().await)?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::to_string(&OutcomeView::from(outcome))?
        )?,
    }
    out.flush()?;
    Ok(())
}

fn is_quit(line: &[u8]) -> bool {
    matches!(line.trim_ascii(), b"q" | b"Q" | b"quit" | b"exit")
}
