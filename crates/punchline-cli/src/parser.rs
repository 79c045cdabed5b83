//! Main CLI parser and top-level argument handling.

use clap::Parser;
use punchline_core::DEFAULT_JOKE_URL;

use crate::commands::Commands;
use crate::presentation::OutputFormat;

/// Command-line interface for the joke fetcher.
///
/// Global options configure the transport and output; the subcommand picks
/// between a single fetch and an interactive session.
#[derive(Parser, Debug)]
#[command(name = "punchline")]
#[command(about = "Fetch a random joke, or explain why one could not be fetched")]
#[command(version)]
pub struct Cli {
    /// Joke endpoint to query
    #[arg(long, env = "PUNCHLINE_URL", default_value = DEFAULT_JOKE_URL, global = true)]
    pub url: String,

    /// Request timeout in seconds
    #[arg(
        long = "timeout-secs",
        env = "PUNCHLINE_TIMEOUT_SECS",
        default_value_t = 10,
        global = true
    )]
    pub timeout_secs: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, defaulting to a single fetch.
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Once)
    }
}
