//! Rendering of pipeline outcomes.

use clap::ValueEnum;
use punchline_core::{FieldIssue, Joke, JokeBoard, JokeError, JokeErrorKind, JokeResult};
use serde::Serialize;

use crate::error::CliError;

/// How outcomes are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The display text, one line per outcome.
    #[default]
    Text,
    /// One JSON object per outcome.
    Json,
}

/// Serializable view of one outcome.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeView<'a> {
    Joke(&'a Joke),
    Error {
        kind: JokeErrorKind,
        message: String,
        /// Field-level mismatches; only present for validation failures.
        #[serde(skip_serializing_if = "Option::is_none")]
        issues: Option<&'a [FieldIssue]>,
    },
}

impl<'a> From<&'a JokeResult<Joke>> for OutcomeView<'a> {
    fn from(outcome: &'a JokeResult<Joke>) -> Self {
        match outcome {
            Ok(joke) => Self::Joke(joke),
            Err(e) => Self::Error {
                kind: e.kind(),
                message: e.user_message(),
                issues: match e {
                    JokeError::Validation(v) => Some(v.issues()),
                    JokeError::Network(_) => None,
                },
            },
        }
    }
}

/// Render the outcome that was just applied to `board`.
pub fn render(
    board: &JokeBoard,
    outcome: &JokeResult<Joke>,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(board.display_text()),
        OutputFormat::Json => Ok(serde_json::to_string(&OutcomeView::from(outcome))?),
    }
}
