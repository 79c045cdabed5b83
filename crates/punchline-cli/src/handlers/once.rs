//! Single fetch handler.

use std::io::Write;

use punchline_core::{Joke, JokeBoard, JokeResult};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{OutputFormat, render};

/// Run the pipeline once and write the rendered outcome.
///
/// Returns the outcome so the caller can pick an exit code. A failed fetch or
/// a malformed payload is not a `CliError`: it has already been rendered.
pub async fn execute<W: Write>(
    ctx: &CliContext,
    format: OutputFormat,
    out: &mut W,
) -> Result<JokeResult<Joke>, CliError> {
    let outcome = ctx.request.run(ctx.source.as_ref()).await;
    debug!(success = outcome.is_ok(), "Single fetch finished");

    let mut board = JokeBoard::new();
    board.apply(&outcome);
    writeln!(out, "{}", render(&board, &outcome, format)?)?;

    Ok(outcome)
}
