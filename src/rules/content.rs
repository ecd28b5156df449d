//! Content rules: character repertoire, emptiness, unconditional pass.

use crate::core::{Rule, ValidationError, ValidationResult};

/// Rejects input containing non-ASCII characters.
///
/// Leading and trailing whitespace is trimmed before the check, so
/// surrounding non-ASCII whitespace does not count against the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonAsciiRule {
    priority: i32,
    error: ValidationError,
}

impl NonAsciiRule {
    pub const DEFAULT_MESSAGE: &'static str = "Unsupported character";

    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            error: ValidationError::new(Self::DEFAULT_MESSAGE),
        }
    }
}

rule_settings!(NonAsciiRule);

impl Rule for NonAsciiRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, input: &str) -> ValidationResult {
        self.check(input.trim().is_ascii())
    }
}

/// Rejects the empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonEmptyRule {
    priority: i32,
    error: ValidationError,
}

impl NonEmptyRule {
    pub const DEFAULT_MESSAGE: &'static str = "Must not be empty";

    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            error: ValidationError::new(Self::DEFAULT_MESSAGE),
        }
    }
}

rule_settings!(NonEmptyRule);

impl Rule for NonEmptyRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, input: &str) -> ValidationResult {
        self.check(!input.is_empty())
    }
}

/// Accepts every input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlwaysValidRule {
    priority: i32,
    error: ValidationError,
}

impl AlwaysValidRule {
    pub fn new(priority: i32) -> Self {
        Self {
            priority,
            error: ValidationError::new(""),
        }
    }
}

rule_settings!(AlwaysValidRule);

impl Rule for AlwaysValidRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, _input: &str) -> ValidationResult {
        ValidationResult::Valid
    }
}
