#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod board;
pub mod controller;
pub mod domain;
pub mod pipeline;
pub mod ports;

// Re-export commonly used types for convenience
pub use board::{JokeBoard, PLACEHOLDER};
pub use controller::{JokeController, Trigger};
pub use domain::{FieldIssue, Joke, JsonKind, ValidationError, validate_joke};
pub use pipeline::{DEFAULT_JOKE_URL, JokeRequest, JokeTask};
pub use ports::{
    JokeError, JokeErrorKind, JokeResult, JokeSourcePort, NETWORK_ERROR_PREFIX, NetworkError,
    VALIDATION_ERROR_PREFIX,
};

// Re-exported so adapters name the same `Url` the port uses
pub use url::Url;
