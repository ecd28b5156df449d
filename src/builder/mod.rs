//! Builder API for assembling rule lists.
//!
//! Rules are listed in declaration order. Conditional, optional and
//! iterated inclusion are ordinary builder calls, so a validator can be
//! shaped by runtime configuration without a special syntax.

pub mod macros;

use crate::core::{Rule, RuleSet};

/// Fluent builder for a [`RuleSet`].
///
/// # Example
///
/// ```
/// use validkit::builder::ValidatorBuilder;
/// use validkit::core::Validator;
/// use validkit::rules::{NonAsciiRule, NonEmptyRule, RangeLengthRule};
///
/// let required = true;
/// let validator = ValidatorBuilder::new()
///     .rule(NonAsciiRule::new(0))
///     .rule_if(required, NonEmptyRule::new(2))
///     .rule_opt(Some(RangeLengthRule::new(1, 10, 1)))
///     .build();
///
/// assert_eq!(validator.len(), 3);
/// assert_eq!(validator.validate("").errors().map(|e| e.len()), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    rules: Vec<Box<dyn Rule>>,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule.
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append an already boxed rule.
    pub fn boxed(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a rule only when `condition` holds.
    pub fn rule_if<R: Rule + 'static>(self, condition: bool, rule: R) -> Self {
        if condition {
            self.rule(rule)
        } else {
            self
        }
    }

    /// Append `first` when `condition` holds, otherwise `second`.
    pub fn rule_either<A, B>(self, condition: bool, first: A, second: B) -> Self
    where
        A: Rule + 'static,
        B: Rule + 'static,
    {
        if condition {
            self.rule(first)
        } else {
            self.rule(second)
        }
    }

    /// Append the rule if present.
    pub fn rule_opt<R: Rule + 'static>(self, rule: Option<R>) -> Self {
        match rule {
            Some(rule) => self.rule(rule),
            None => self,
        }
    }

    /// Append every rule from an iterator, in iteration order.
    pub fn rules<I, R>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Rule + 'static,
    {
        self.rules
            .extend(rules.into_iter().map(|rule| Box::new(rule) as Box<dyn Rule>));
        self
    }

    /// Append every rule of another list, keeping their order.
    pub fn extend(mut self, rules: Vec<Box<dyn Rule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn build(self) -> RuleSet {
        RuleSet::new(self.rules)
    }
}
