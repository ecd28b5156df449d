//! Set-membership rules backed by a fixed lookup table.

use crate::core::{Rule, ValidationError, ValidationResult};
use std::collections::BTreeMap;

/// US states, districts and territories: name to postal abbreviation.
pub const US_STATES: &[(&str, &str)] = &[
    ("Alaska", "AK"),
    ("Alabama", "AL"),
    ("Arkansas", "AR"),
    ("American Samoa", "AS"),
    ("Arizona", "AZ"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("District of Columbia", "DC"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Guam", "GU"),
    ("Hawaii", "HI"),
    ("Iowa", "IA"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Massachusetts", "MA"),
    ("Maryland", "MD"),
    ("Maine", "ME"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Missouri", "MO"),
    ("Mississippi", "MS"),
    ("Montana", "MT"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Nebraska", "NE"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("Nevada", "NV"),
    ("New York", "NY"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Puerto Rico", "PR"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Virginia", "VA"),
    ("Virgin Islands", "VI"),
    ("Vermont", "VT"),
    ("Washington", "WA"),
    ("Wisconsin", "WI"),
    ("West Virginia", "WV"),
    ("Wyoming", "WY"),
];

/// Requires the input to equal one of the lookup table's values.
///
/// Only the value side of the table is consulted. For the US state table
/// that means "NY" passes and "New York" does not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipRule {
    lookup: BTreeMap<String, String>,
    priority: i32,
    error: ValidationError,
}

impl MembershipRule {
    pub const DEFAULT_MESSAGE: &'static str = "Invalid value";
    pub const STATE_MESSAGE: &'static str = "Invalid State";

    pub fn new<I, K, V>(lookup: I, priority: i32) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            lookup: lookup
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            priority,
            error: ValidationError::new(Self::DEFAULT_MESSAGE),
        }
    }

    /// Membership in [`US_STATES`] abbreviations.
    pub fn us_states(priority: i32) -> Self {
        Self::new(US_STATES.iter().copied(), priority)
            .with_error(ValidationError::new(Self::STATE_MESSAGE))
    }

    pub fn lookup(&self) -> &BTreeMap<String, String> {
        &self.lookup
    }
}

rule_settings!(MembershipRule);

impl Rule for MembershipRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, input: &str) -> ValidationResult {
        self.check(self.lookup.values().any(|value| value == input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_table_has_unique_abbreviations() {
        let rule = MembershipRule::us_states(1);
        let mut values: Vec<_> = rule.lookup().values().collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), US_STATES.len());
    }

    #[test]
    fn abbreviation_passes() {
        let rule = MembershipRule::us_states(1);
        assert!(rule.validate("NY").is_valid());
        assert!(rule.validate("PR").is_valid());
    }

    #[test]
    fn names_and_unknown_codes_fail() {
        let rule = MembershipRule::us_states(1);
        assert_eq!(
            rule.validate("XSAA"),
            ValidationResult::invalid(ValidationError::new("Invalid State"))
        );
        assert!(!rule.validate("New York").is_valid());
        assert!(!rule.validate("ny").is_valid());
        assert!(!rule.validate("").is_valid());
    }

    #[test]
    fn custom_table_uses_default_message() {
        let rule = MembershipRule::new([("red", "R"), ("green", "G")], 0);

        assert!(rule.validate("G").is_valid());
        assert_eq!(
            rule.validate("green"),
            ValidationResult::invalid(ValidationError::new("Invalid value"))
        );
    }
}
