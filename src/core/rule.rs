//! The rule capability.
//!
//! A rule is a single deterministic predicate over an input string paired
//! with the error it reports and a priority that orders evaluation inside
//! a validator.

use super::error::ValidationError;
use super::result::ValidationResult;
use std::fmt::Debug;

/// A single validation predicate.
///
/// Implementations must be total and pure: every string (empty, ASCII,
/// whitespace, non-ASCII) produces a result, and the same input always
/// produces the same result. On failure a rule reports exactly its own
/// [`validation_error`](Rule::validation_error).
///
/// # Example
///
/// ```rust
/// use validkit::core::{Rule, ValidationError, ValidationResult};
///
/// #[derive(Debug)]
/// struct NoSpaces {
///     error: ValidationError,
/// }
///
/// impl Rule for NoSpaces {
///     fn priority(&self) -> i32 {
///         0
///     }
///
///     fn validation_error(&self) -> &ValidationError {
///         &self.error
///     }
///
///     fn validate(&self, input: &str) -> ValidationResult {
///         self.check(!input.contains(' '))
///     }
/// }
///
/// let rule = NoSpaces { error: ValidationError::new("No spaces allowed") };
/// assert!(rule.validate("abc").is_valid());
/// assert!(!rule.validate("a b").is_valid());
/// ```
pub trait Rule: Debug + Send + Sync {
    /// Evaluation priority. Higher runs first.
    fn priority(&self) -> i32;

    /// The error reported when this rule fails.
    fn validation_error(&self) -> &ValidationError;

    fn validate(&self, input: &str) -> ValidationResult;

    /// `Valid` when `passed`, otherwise this rule's error.
    fn check(&self, passed: bool) -> ValidationResult {
        if passed {
            ValidationResult::Valid
        } else {
            ValidationResult::invalid(self.validation_error().clone())
        }
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn priority(&self) -> i32 {
        (**self).priority()
    }

    fn validation_error(&self) -> &ValidationError {
        (**self).validation_error()
    }

    fn validate(&self, input: &str) -> ValidationResult {
        (**self).validate(input)
    }
}
