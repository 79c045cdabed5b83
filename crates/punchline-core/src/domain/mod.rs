//! Core domain types.
//!
//! Everything here is pure: no I/O, no async, no transport types.

mod joke;
mod validation;

pub use joke::{Joke, validate_joke};
pub use validation::{FieldIssue, JsonKind, ValidationError};
