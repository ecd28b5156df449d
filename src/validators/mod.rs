//! Stock validators for common user-entered fields.
//!
//! Each validator pairs the ASCII-only check (priority 0) with one
//! field-specific rule (priority 1), so a bad input can report both an
//! unsupported character and a format problem at once.
//!
//! # Example
//!
//! ```rust
//! use validkit::core::Validator;
//! use validkit::validators::{EmailValidator, PhoneStyle, PhoneValidator};
//!
//! assert!(EmailValidator::new().is_valid("test@gmail.com"));
//! assert!(PhoneValidator::new(PhoneStyle::AreaCodeParentheses).is_valid("(444) 555-5745"));
//! ```

use crate::core::{Rule, Validator};
use crate::rules::{
    AlwaysValidRule, FullNameRule, LengthRule, MembershipRule, NonAsciiRule, PatternRule,
    RangeLengthRule, StockPattern,
};
use serde::{Deserialize, Serialize};

/// Define a unit-configured stock validator from a fixed rule list.
macro_rules! stock_validator {
    (
        $(#[$meta:meta])*
        $name:ident => [$($rule:expr),* $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            rules: Vec<Box<dyn Rule>>,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    rules: $crate::rules![$($rule),*],
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Validator for $name {
            fn rules(&self) -> &[Box<dyn Rule>] {
                &self.rules
            }
        }
    };
}

stock_validator! {
    /// Accepts anything. Useful as a placeholder for free-form fields.
    AlwaysValidValidator => [AlwaysValidRule::new(0)]
}

stock_validator! {
    /// ASCII-only content, nothing else.
    BaseValidator => [NonAsciiRule::new(0)]
}

stock_validator! {
    /// Something shaped like an email address somewhere in the input.
    EmailValidator => [
        NonAsciiRule::new(0),
        PatternRule::stock(StockPattern::Email, 1),
    ]
}

stock_validator! {
    /// At least two names, each longer than one character.
    FullNameValidator => [NonAsciiRule::new(0), FullNameRule::new(1)]
}

stock_validator! {
    /// US social security number, `123-45-6789`.
    SsnValidator => [
        NonAsciiRule::new(0),
        PatternRule::stock(StockPattern::Ssn, 1),
    ]
}

stock_validator! {
    /// Exactly four characters.
    LastFourSsnValidator => [NonAsciiRule::new(0), LengthRule::new(4, 1)]
}

stock_validator! {
    /// Five leading digits. Anything after them is not checked.
    ZipValidator => [
        NonAsciiRule::new(0),
        PatternRule::stock(StockPattern::Zip, 1),
    ]
}

stock_validator! {
    /// Card verification value: three or four characters.
    CcvValidator => [NonAsciiRule::new(0), RangeLengthRule::new(3, 4, 1)]
}

stock_validator! {
    /// Two-letter US state or territory abbreviation.
    StateValidator => [NonAsciiRule::new(0), MembershipRule::us_states(1)]
}

/// Accepted phone number layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneStyle {
    /// `555-555-5555`
    Hyphens,
    /// `(555) 555-5555`
    AreaCodeParentheses,
}

impl PhoneStyle {
    pub fn pattern(self) -> StockPattern {
        match self {
            PhoneStyle::Hyphens => StockPattern::Phone,
            PhoneStyle::AreaCodeParentheses => StockPattern::PhoneAreaCodeParentheses,
        }
    }
}

/// US phone number in one fixed layout.
#[derive(Debug)]
pub struct PhoneValidator {
    style: PhoneStyle,
    rules: Vec<Box<dyn Rule>>,
}

impl PhoneValidator {
    pub fn new(style: PhoneStyle) -> Self {
        Self {
            style,
            rules: crate::rules![
                NonAsciiRule::new(0),
                PatternRule::stock(style.pattern(), 1),
            ],
        }
    }

    pub fn style(&self) -> PhoneStyle {
        self.style
    }
}

impl Validator for PhoneValidator {
    fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_validators_check_ascii_first_in_declaration() {
        let validator = EmailValidator::new();
        let priorities: Vec<_> = validator.rules().iter().map(|r| r.priority()).collect();
        assert_eq!(priorities, vec![0, 1]);

        let order: Vec<_> = validator
            .evaluation_order()
            .iter()
            .map(|r| r.validation_error().message().to_string())
            .collect();
        assert_eq!(order, vec!["Invalid Email", "Unsupported character"]);
    }

    #[test]
    fn phone_validator_remembers_style() {
        assert_eq!(
            PhoneValidator::new(PhoneStyle::Hyphens).style(),
            PhoneStyle::Hyphens
        );
    }

    #[test]
    fn default_matches_new() {
        let a = ZipValidator::default();
        let b = ZipValidator::new();
        assert_eq!(a.validate("1234"), b.validate("1234"));
    }

    #[test]
    fn always_valid_accepts_non_ascii() {
        assert!(AlwaysValidValidator::new().is_valid("üèÜ"));
    }

    #[test]
    fn validators_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EmailValidator>();
        assert_send_sync::<PhoneValidator>();
        assert_send_sync::<StateValidator>();
    }
}
