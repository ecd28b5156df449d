//! Closure-backed rules for checks the stock catalogue does not cover.

use crate::core::{Rule, ValidationError, ValidationResult};
use std::fmt;
use std::sync::Arc;

/// A rule whose check is a caller-supplied pure predicate.
///
/// The predicate must be deterministic and free of side effects, like every
/// other rule, and thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```rust
/// use validkit::core::{Rule, ValidationError};
/// use validkit::rules::PredicateRule;
///
/// let digits_only = PredicateRule::new(
///     |input: &str| input.chars().all(|c| c.is_ascii_digit()),
///     ValidationError::new("Digits only"),
///     1,
/// );
///
/// assert!(digits_only.validate("344").is_valid());
/// assert!(!digits_only.validate("34a").is_valid());
/// ```
#[derive(Clone)]
pub struct PredicateRule {
    predicate: Arc<dyn Fn(&str) -> bool + Send + Sync>,
    priority: i32,
    error: ValidationError,
}

impl PredicateRule {
    pub fn new<F>(predicate: F, error: ValidationError, priority: i32) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            priority,
            error,
        }
    }
}

rule_settings!(PredicateRule);

impl fmt::Debug for PredicateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateRule")
            .field("priority", &self.priority)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl Rule for PredicateRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, input: &str) -> ValidationResult {
        self.check((self.predicate)(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_digits() -> PredicateRule {
        PredicateRule::new(
            |input: &str| !input.chars().any(|c| c.is_ascii_digit()),
            ValidationError::new("No digits"),
            2,
        )
    }

    #[test]
    fn predicate_decides_outcome() {
        let rule = no_digits();
        assert!(rule.validate("Smith").is_valid());
        assert_eq!(
            rule.validate("Sm1th"),
            ValidationResult::invalid(ValidationError::new("No digits"))
        );
    }

    #[test]
    fn predicate_is_deterministic() {
        let rule = no_digits();
        assert_eq!(rule.validate("a1"), rule.validate("a1"));
    }

    #[test]
    fn clones_share_the_predicate() {
        let rule = no_digits().with_priority(7);
        let cloned = rule.clone();

        assert_eq!(cloned.priority(), 7);
        assert_eq!(rule.validate("x9"), cloned.validate("x9"));
    }

    #[test]
    fn debug_omits_closure() {
        let debug = format!("{:?}", no_digits());
        assert!(debug.starts_with("PredicateRule"));
        assert!(debug.contains("No digits"));
    }
}
