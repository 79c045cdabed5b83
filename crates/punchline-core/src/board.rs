//! Display state for the joke surface.

use crate::domain::Joke;
use crate::ports::JokeResult;

/// Shown before the first joke arrives.
pub const PLACEHOLDER: &str = "Just waiting for you to get a joke...";

/// The three pieces of display state the pipeline writes to.
///
/// A successful run replaces the joke and clears any previous error. A failed
/// run sets the error and leaves the last joke in place, hidden behind the
/// error until the next success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JokeBoard {
    setup: String,
    punchline: String,
    error: String,
}

impl JokeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one pipeline outcome into the display state.
    pub fn apply(&mut self, outcome: &JokeResult<Joke>) {
        match outcome {
            Ok(joke) => {
                joke.setup().clone_into(&mut self.setup);
                joke.punchline().clone_into(&mut self.punchline);
                self.error.clear();
            }
            Err(e) => self.error = e.user_message(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        (!self.error.is_empty()).then_some(self.error.as_str())
    }

    /// The single line of text the surface shows.
    pub fn display_text(&self) -> String {
        if !self.error.is_empty() {
            self.error.clone()
        } else if !self.setup.is_empty() && !self.punchline.is_empty() {
            format!("{} ... {}", self.setup, self.punchline)
        } else {
            PLACEHOLDER.to_string()
        }
    }
}
