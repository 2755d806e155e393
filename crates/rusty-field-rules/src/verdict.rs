// File: src/verdict.rs
// Purpose: Outcome of evaluating a single rule

use crate::field::FieldRef;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pass/fail result of one rule evaluation
///
/// A failed verdict always carries its message. `target` names the field the
/// message was attached to, or is `None` for page-level failures.
#[must_use = "a failed verdict is only visible if the caller checks it"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    pub message: Option<String>,
    #[serde(rename = "targetField")]
    pub target: Option<FieldRef>,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: None,
            target: None,
        }
    }

    pub fn fail_inline(target: FieldRef, message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
            target: Some(target),
        }
    }

    pub fn fail_page(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
            target: None,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.passed
    }

    pub fn is_page_level(&self) -> bool {
        !self.passed && self.target.is_none()
    }

    /// Convert into a `Result` so failures can be propagated with `?`
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.passed {
            return Ok(());
        }
        Err(ValidationFailure {
            message: self.message.unwrap_or_default(),
            target: self.target,
        })
    }
}

/// The one error kind a rule can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub message: String,
    pub target: Option<FieldRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_into_result() {
        assert!(Verdict::pass().into_result().is_ok());
    }

    #[test]
    fn test_inline_failure_into_result() {
        let verdict = Verdict::fail_inline(FieldRef::from("P1_EMAIL"), "bad email");
        assert!(!verdict.is_page_level());

        let err = verdict.into_result().unwrap_err();
        assert_eq!(err.to_string(), "bad email");
        assert_eq!(err.target, Some(FieldRef::from("P1_EMAIL")));
    }

    #[test]
    fn test_page_failure() {
        let verdict = Verdict::fail_page("pick one");
        assert!(verdict.is_page_level());
        assert_eq!(verdict.into_result().unwrap_err().target, None);
    }

    #[test]
    fn test_serializes_target_field() {
        let verdict = Verdict::fail_inline(FieldRef::from("P1_END"), "End date must be after start date.");
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["targetField"], "P1_END");
        assert_eq!(json["passed"], false);
    }
}
