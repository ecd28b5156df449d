//! Failure descriptor reported by rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single reason an input was rejected.
///
/// Errors are plain values: two errors are the same error iff both the
/// message and the recovery hint match. This is what lets results
/// collapse repeated failures into one entry.
///
/// # Example
///
/// ```rust
/// use validkit::core::ValidationError;
///
/// let error = ValidationError::new("Invalid Zip").with_recovery("Use five digits");
///
/// assert_eq!(error.message(), "Invalid Zip");
/// assert_eq!(error.recovery(), Some("Use five digits"));
/// assert_eq!(error.to_string(), "Invalid Zip");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    #[serde(default)]
    recovery: Option<String>,
}

impl ValidationError {
    /// Create an error with a message and no recovery hint.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            recovery: None,
        }
    }

    /// Attach a recovery hint.
    pub fn with_recovery(mut self, recovery: impl Into<String>) -> Self {
        self.recovery = Some(recovery.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn recovery(&self) -> Option<&str> {
        self.recovery.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn errors_with_same_fields_are_equal() {
        let a = ValidationError::new("Invalid Name");
        let b = ValidationError::new("Invalid Name");
        assert_eq!(a, b);
    }

    #[test]
    fn recovery_participates_in_equality() {
        let plain = ValidationError::new("Invalid Name");
        let hinted = ValidationError::new("Invalid Name").with_recovery("Add a last name");

        assert_ne!(plain, hinted);
        assert_ne!(
            hinted,
            ValidationError::new("Invalid Name").with_recovery("Add a first name")
        );
    }

    #[test]
    fn equal_errors_collapse_in_a_set() {
        let set: HashSet<_> = [
            ValidationError::new("Invalid Zip"),
            ValidationError::new("Invalid Zip"),
            ValidationError::new("Unsupported character"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_shows_message() {
        let error = ValidationError::new("Must not be empty").with_recovery("Type something");
        assert_eq!(error.to_string(), "Must not be empty");
    }

    #[test]
    fn error_serializes_both_fields() {
        let json = serde_json::to_string(&ValidationError::new("Invalid SSN")).unwrap();
        assert_eq!(json, r#"{"message":"Invalid SSN","recovery":null}"#);

        let parsed: ValidationError = serde_json::from_str(r#"{"message":"Invalid SSN"}"#).unwrap();
        assert_eq!(parsed, ValidationError::new("Invalid SSN"));

        let hinted = ValidationError::new("Invalid SSN").with_recovery("Use 123-45-6789");
        let json = serde_json::to_string(&hinted).unwrap();
        let back: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(hinted, back);
    }
}
