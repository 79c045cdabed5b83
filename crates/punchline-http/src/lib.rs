#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultJokeSource is meant to be used through the JokeSourcePort trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultJokeSource;

// Configuration
pub use config::JokeClientConfig;

// Silence unused dev-dependency warnings; axum serves the integration tests
#[cfg(test)]
use axum as _;
