//! Subcommand definitions.

use clap::Subcommand;

/// What to do once the source is wired up.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Fetch one joke and print it (the default)
    Once,
    /// Press Enter to get a joke, `q` to quit
    Interactive,
}
