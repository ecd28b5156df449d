//! Property-based tests for result merging and validator evaluation.
//!
//! These tests use proptest to verify the merge laws and the
//! order independence of validators across many generated inputs.

use proptest::prelude::*;
use std::collections::BTreeSet;
use validkit::core::{Rule, RuleSet, ValidationError, ValidationErrors, ValidationResult, Validator};
use validkit::rules::{
    AlwaysValidRule, FullNameRule, LengthRule, MembershipRule, NonAsciiRule, NonEmptyRule,
    PatternRule, RangeLengthRule, StockPattern,
};
use validkit::validators::{
    CcvValidator, EmailValidator, FullNameValidator, PhoneStyle, PhoneValidator, StateValidator,
    ZipValidator,
};

prop_compose! {
    fn arbitrary_error()(
        message in "[a-d]",
        recovery in proptest::option::of("[xy]"),
    ) -> ValidationError {
        let error = ValidationError::new(message);
        match recovery {
            Some(hint) => error.with_recovery(hint),
            None => error,
        }
    }
}

fn arbitrary_result() -> impl Strategy<Value = ValidationResult> {
    prop_oneof![
        Just(ValidationResult::Valid),
        prop::collection::vec(arbitrary_error(), 1..5).prop_map(|errors| {
            ValidationResult::Invalid(ValidationErrors::from_errors(errors).unwrap())
        }),
    ]
}

fn make_rule(kind: usize) -> Box<dyn Rule> {
    match kind % 9 {
        0 => Box::new(NonAsciiRule::new(0)),
        1 => Box::new(NonEmptyRule::new(3)),
        2 => Box::new(LengthRule::new(4, 1)),
        3 => Box::new(RangeLengthRule::new(3, 4, 1)),
        4 => Box::new(FullNameRule::new(2)),
        5 => Box::new(PatternRule::stock(StockPattern::Zip, 1)),
        6 => Box::new(PatternRule::stock(StockPattern::Email, 5)),
        7 => Box::new(MembershipRule::us_states(1)),
        _ => Box::new(AlwaysValidRule::new(0)),
    }
}

fn arbitrary_input() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Patrick Smith".to_string()),
        Just("test@gmail.com".to_string()),
        Just("NY".to_string()),
        "[0-9]{0,9}",
        "[a-zA-Z ]{0,16}",
        "\\PC{0,12}",
    ]
}

fn error_set(result: &ValidationResult) -> BTreeSet<ValidationError> {
    result
        .errors()
        .map(|errors| errors.as_set().clone())
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn valid_is_merge_identity(r in arbitrary_result()) {
        prop_assert_eq!(ValidationResult::Valid.merge(r.clone()), r.clone());
        prop_assert_eq!(r.clone().merge(ValidationResult::Valid), r);
    }

    #[test]
    fn merge_is_commutative(a in arbitrary_result(), b in arbitrary_result()) {
        prop_assert_eq!(a.clone().merge(b.clone()), b.merge(a));
    }

    #[test]
    fn merge_is_associative(
        a in arbitrary_result(),
        b in arbitrary_result(),
        c in arbitrary_result(),
    ) {
        let left = a.clone().merge(b.clone()).merge(c.clone());
        let right = a.merge(b.merge(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn merge_is_idempotent(r in arbitrary_result()) {
        prop_assert_eq!(r.clone().merge(r.clone()), r);
    }

    #[test]
    fn merge_takes_union_not_sum(a in arbitrary_result(), b in arbitrary_result()) {
        let expected: BTreeSet<_> = error_set(&a).union(&error_set(&b)).cloned().collect();
        let merged = a.merge(b);

        prop_assert_eq!(merged.is_valid(), expected.is_empty());
        prop_assert_eq!(error_set(&merged), expected);
    }

    #[test]
    fn merge_all_is_order_independent(
        results in prop::collection::vec(arbitrary_result(), 0..6)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        let (original, shuffled) = results;
        prop_assert_eq!(
            ValidationResult::merge_all(original),
            ValidationResult::merge_all(shuffled)
        );
    }

    #[test]
    fn merge_all_never_builds_empty_invalid(
        results in prop::collection::vec(arbitrary_result(), 0..6),
    ) {
        if let ValidationResult::Invalid(errors) = ValidationResult::merge_all(results) {
            prop_assert!(!errors.as_set().is_empty());
        }
    }

    #[test]
    fn shuffling_rules_does_not_change_verdict(
        kinds in prop::collection::vec(0usize..9, 0..9)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        input in arbitrary_input(),
    ) {
        let (original, shuffled) = kinds;
        let a = RuleSet::new(original.into_iter().map(make_rule).collect());
        let b = RuleSet::new(shuffled.into_iter().map(make_rule).collect());

        prop_assert_eq!(a.validate(&input), b.validate(&input));
    }

    #[test]
    fn validator_reports_one_error_per_failing_rule(
        kinds in prop::collection::vec(0usize..9, 0..9),
        input in arbitrary_input(),
    ) {
        let rules: Vec<Box<dyn Rule>> = kinds.into_iter().map(make_rule).collect();
        let expected: BTreeSet<ValidationError> = rules
            .iter()
            .filter(|rule| !rule.validate(&input).is_valid())
            .map(|rule| rule.validation_error().clone())
            .collect();

        let result = RuleSet::new(rules).validate(&input);
        prop_assert_eq!(error_set(&result), expected);
    }

    #[test]
    fn rules_are_total_and_deterministic(kind in 0usize..9, input in any::<String>()) {
        let rule = make_rule(kind);
        let first = rule.validate(&input);
        let second = rule.validate(&input);

        if let Some(errors) = first.errors() {
            prop_assert_eq!(errors.len(), 1);
            prop_assert!(errors.contains(rule.validation_error()));
        }
        prop_assert_eq!(first, second);
    }

    #[test]
    fn stock_validators_are_idempotent(input in arbitrary_input()) {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(EmailValidator::new()),
            Box::new(FullNameValidator::new()),
            Box::new(PhoneValidator::new(PhoneStyle::Hyphens)),
            Box::new(ZipValidator::new()),
            Box::new(CcvValidator::new()),
            Box::new(StateValidator::new()),
        ];

        for validator in &validators {
            prop_assert_eq!(validator.validate(&input), validator.validate(&input));
        }
    }

    #[test]
    fn result_roundtrip_serialization(r in arbitrary_result()) {
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: ValidationResult = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(r, deserialized);
    }
}
