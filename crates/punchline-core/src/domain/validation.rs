//! Field-level validation issues for untyped JSON payloads.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// The JSON type observed (or required) at a given path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    /// The key was absent from its parent object.
    Missing,
}

impl JsonKind {
    /// Classify a JSON value.
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Classify an optional JSON value, treating `None` as a missing key.
    pub fn of_field(value: Option<&Value>) -> Self {
        value.map_or(Self::Missing, Self::of)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single schema mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted path to the offending value; `$` is the payload root.
    pub path: String,
    /// The type the schema requires at `path`.
    pub expected: JsonKind,
    /// The type actually found at `path`.
    pub received: JsonKind,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, expected: JsonKind, received: JsonKind) -> Self {
        Self {
            path: path.into(),
            expected,
            received,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.received == JsonKind::Missing {
            write!(f, "{}: required {} is missing", self.path, self.expected)
        } else {
            write!(
                f,
                "{}: expected {}, received {}",
                self.path, self.expected, self.received
            )
        }
    }
}

/// A payload did not match the expected shape.
///
/// Always carries at least one issue; every mismatch found in the payload is
/// reported, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty(), "validation error without issues");
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
