//! Command handlers.
//!
//! Handlers receive the composed `CliContext` and write display text to the
//! writer they are given, so they can be driven from tests.

pub mod interactive;
pub mod once;
