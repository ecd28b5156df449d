//! Full-name rule: two or more names, none of them a bare initial.

use crate::core::{Rule, ValidationError, ValidationResult};

/// Requires a name made of at least two space-separated tokens, each longer
/// than one character.
///
/// Runs of spaces do not produce empty tokens. Single-word names and
/// initials ("J Smith") are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullNameRule {
    priority: i32,
    error: ValidationError,
}

impl FullNameRule {
    pub const DEFAULT_MESSAGE: &'static str = "Invalid Name";

    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            error: ValidationError::new(Self::DEFAULT_MESSAGE),
        }
    }
}

rule_settings!(FullNameRule);

impl Rule for FullNameRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, input: &str) -> ValidationResult {
        let tokens: Vec<&str> = input.split(' ').filter(|t| !t.is_empty()).collect();
        self.check(tokens.len() > 1 && tokens.iter().all(|t| t.chars().count() > 1))
    }
}
