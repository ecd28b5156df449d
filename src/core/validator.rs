//! Validators: ordered rule collections evaluated as one.

use super::result::ValidationResult;
use super::rule::Rule;
use std::cmp::Reverse;
use tracing::{debug, trace};

/// An ordered collection of rules evaluated together against one input.
///
/// Implementors only provide [`rules`](Validator::rules). Evaluation runs
/// every rule, highest priority first, and merges all outcomes. A failing
/// rule never stops the remaining rules from running.
///
/// # Example
///
/// ```rust
/// use validkit::core::{RuleSet, Validator};
/// use validkit::rules::{NonAsciiRule, NonEmptyRule};
///
/// let validator = RuleSet::new(validkit::rules![NonAsciiRule::new(0), NonEmptyRule::new(1)]);
///
/// assert!(validator.is_valid("hello"));
/// assert_eq!(validator.validate("").errors().map(|e| e.len()), Some(1));
/// ```
pub trait Validator: Send + Sync {
    /// Rules in declaration order.
    fn rules(&self) -> &[Box<dyn Rule>];

    /// Rules in evaluation order: priority descending, ties in declaration
    /// order.
    fn evaluation_order(&self) -> Vec<&dyn Rule> {
        let mut ordered: Vec<&dyn Rule> = self.rules().iter().map(|rule| &**rule).collect();
        // sort_by_key is stable
        ordered.sort_by_key(|rule| Reverse(rule.priority()));
        ordered
    }

    /// Evaluate every rule and merge the outcomes.
    fn validate(&self, input: &str) -> ValidationResult {
        let results: Vec<ValidationResult> = self
            .evaluation_order()
            .into_iter()
            .map(|rule| {
                let result = rule.validate(input);
                trace!(
                    priority = rule.priority(),
                    rule = rule.validation_error().message(),
                    valid = result.is_valid(),
                    "rule evaluated"
                );
                result
            })
            .collect();

        let verdict = ValidationResult::merge_all(results);
        debug!(
            rules = self.rules().len(),
            valid = verdict.is_valid(),
            errors = verdict.errors().map_or(0, |errors| errors.len()),
            "validation finished"
        );
        verdict
    }

    fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_valid()
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn rules(&self) -> &[Box<dyn Rule>] {
        (**self).rules()
    }
}

/// Run several validators against the same input and merge their verdicts.
pub fn validate_all<'a, I>(validators: I, input: &str) -> ValidationResult
where
    I: IntoIterator<Item = &'a dyn Validator>,
{
    validators
        .into_iter()
        .map(|validator| validator.validate(input))
        .collect()
}

/// A validator over an arbitrary list of rules.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Append a rule. Declaration order is preserved.
    pub fn push<R: Rule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<Box<dyn Rule>> {
        self.rules
    }
}

impl Validator for RuleSet {
    fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

impl From<Vec<Box<dyn Rule>>> for RuleSet {
    fn from(rules: Vec<Box<dyn Rule>>) -> Self {
        Self::new(rules)
    }
}
