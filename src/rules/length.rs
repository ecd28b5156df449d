//! Length rules.
//!
//! Length is counted in Unicode scalar values, not bytes.

use crate::core::{Rule, ValidationError, ValidationResult};

/// Requires the input to have exactly `length` characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthRule {
    length: usize,
    priority: i32,
    error: ValidationError,
}

impl LengthRule {
    pub fn new(length: usize, priority: i32) -> Self {
        Self {
            length,
            priority,
            error: ValidationError::new(format!("Must be equal to {length}")),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

rule_settings!(LengthRule);

impl Rule for LengthRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, input: &str) -> ValidationResult {
        self.check(input.chars().count() == self.length)
    }
}

/// Requires `min <= length <= max`.
///
/// A rule built with `min > max` accepts nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeLengthRule {
    min: usize,
    max: usize,
    priority: i32,
    error: ValidationError,
}

impl RangeLengthRule {
    pub fn new(min: usize, max: usize, priority: i32) -> Self {
        Self {
            min,
            max,
            priority,
            error: ValidationError::new(format!("Must be between {min} {max}")),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

rule_settings!(RangeLengthRule);

impl Rule for RangeLengthRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, input: &str) -> ValidationResult {
        self.check((self.min..=self.max).contains(&input.chars().count()))
    }
}
