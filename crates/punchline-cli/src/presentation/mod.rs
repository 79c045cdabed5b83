//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no pipeline logic, no I/O.

pub mod outcome;

pub use outcome::{OutcomeView, OutputFormat, render};
