//! The validated joke type.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::validation::{FieldIssue, JsonKind, ValidationError};

/// Path reported when the payload root itself has the wrong type.
const ROOT_PATH: &str = "$";

/// A joke that has passed shape validation.
///
/// Fields are private and the only constructor is [`validate_joke`], so every
/// `Joke` in the program came from a payload with two string fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Joke {
    setup: String,
    punchline: String,
}

impl Joke {
    pub fn setup(&self) -> &str {
        &self.setup
    }

    pub fn punchline(&self) -> &str {
        &self.punchline
    }
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ... {}", self.setup, self.punchline)
    }
}

/// Check an untyped payload against `{ setup: string, punchline: string }`.
///
/// Extra keys are ignored. All mismatches are collected before failing.
pub fn validate_joke(value: &Value) -> Result<Joke, ValidationError> {
    let Some(object) = value.as_object() else {
        let issue = FieldIssue::new(ROOT_PATH, JsonKind::Object, JsonKind::of(value));
        return Err(ValidationError::new(vec![issue]));
    };

    let mut issues = Vec::new();
    let setup = required_string(object.get("setup"), "setup", &mut issues);
    let punchline = required_string(object.get("punchline"), "punchline", &mut issues);

    match (setup, punchline) {
        (Some(setup), Some(punchline)) => Ok(Joke {
            setup: setup.to_owned(),
            punchline: punchline.to_owned(),
        }),
        _ => Err(ValidationError::new(issues)),
    }
}

fn required_string<'a>(
    field: Option<&'a Value>,
    path: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<&'a str> {
    let found = field.and_then(Value::as_str);
    if found.is_none() {
        issues.push(FieldIssue::new(
            path,
            JsonKind::String,
            JsonKind::of_field(field),
        ));
    }
    found
}
