//! Macros for listing rules.

/// Build a `Vec<Box<dyn Rule>>` from rule values, keeping their order.
///
/// # Example
///
/// ```
/// use validkit::core::{RuleSet, Validator};
/// use validkit::rules;
/// use validkit::rules::{FullNameRule, NonAsciiRule};
///
/// let validator = RuleSet::new(rules![NonAsciiRule::new(0), FullNameRule::new(1)]);
///
/// assert_eq!(validator.rules().len(), 2);
/// assert!(validator.is_valid("Patrick Smith"));
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::core::Rule>>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($rule) as ::std::boxed::Box<dyn $crate::core::Rule>),+
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Rule, RuleSet, Validator};
    use crate::rules::{LengthRule, NonEmptyRule};

    #[test]
    fn rules_macro_preserves_order() {
        let rules = rules![NonEmptyRule::new(2), LengthRule::new(3, 1)];

        let priorities: Vec<_> = rules.iter().map(|r| r.priority()).collect();
        assert_eq!(priorities, vec![2, 1]);
    }

    #[test]
    fn rules_macro_accepts_trailing_comma() {
        let rules = rules![NonEmptyRule::new(0),];
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn empty_rules_macro_builds_valid_validator() {
        let validator = RuleSet::new(rules![]);
        assert!(validator.is_valid(""));
    }
}
