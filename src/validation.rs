//! Violation collection shared by the request validators.
//!
//! Every validation operation checks all of its fields before returning, so
//! a failed request carries one [`Violation`] per violated constraint and a
//! caller can render every field error at once.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;

/// A single failed constraint: the offending field path and a user-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path as seen by the client, e.g. `name` or `params.id`.
    pub field: String,
    /// Human-readable message describing the failed constraint.
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Failure outcome of a validation operation.
///
/// Carries at least one violation. Middleware serializes this into the 4xx
/// response payload, so the structure and the literal messages are part of
/// the observable contract.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", summarize(.violations))]
pub struct ValidationFailure {
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    let details = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join("; ");
    format!("validation failed: {details}")
}

/// Accumulates violations across every field check of a single request.
#[derive(Debug, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one failed constraint.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(Violation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the accumulator into a [`ValidationFailure`].
    pub fn into_failure(self) -> ValidationFailure {
        ValidationFailure { violations: self.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_lists_every_violation() {
        let mut violations = Violations::new();
        violations.push("name", "姓名不能为空");
        violations.push("params.id", "ID格式不正确");

        let failure = violations.into_failure();

        assert_eq!(
            failure.to_string(),
            "validation failed: name: 姓名不能为空; params.id: ID格式不正确"
        );
    }

    #[test]
    fn test_failure_serializes_field_message_pairs() {
        let failure = Violations::new().into_failure();
        assert!(failure.violations.is_empty());

        let mut violations = Violations::new();
        violations.push("phone", "手机号格式不正确");
        let json = serde_json::to_value(violations.into_failure()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "violations": [{"field": "phone", "message": "手机号格式不正确"}]
            })
        );
    }
}
