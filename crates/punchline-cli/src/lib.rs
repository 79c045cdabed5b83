#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the main.rs binary
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

// Silence unused dev-dependency warnings; async-trait serves the integration tests
#[cfg(test)]
use async_trait as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use presentation::OutputFormat;
