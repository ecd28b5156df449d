//! Regular-expression rules.
//!
//! Matching is a substring search: a pattern only constrains the whole
//! input when it anchors itself with `^` and `$`.

use super::error::RuleError;
use crate::core::{Rule, ValidationError, ValidationResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PHONE: LazyLock<Regex> = LazyLock::new(|| StockPattern::Phone.compile());
static PHONE_AREA_CODE_PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| StockPattern::PhoneAreaCodeParentheses.compile());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| StockPattern::Email.compile());
static SSN: LazyLock<Regex> = LazyLock::new(|| StockPattern::Ssn.compile());
static ZIP: LazyLock<Regex> = LazyLock::new(|| StockPattern::Zip.compile());

/// Built-in patterns and the error each reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockPattern {
    /// `555-555-5555`
    Phone,
    /// `(555) 555-5555`
    PhoneAreaCodeParentheses,
    /// Contains something shaped like `user@host.tld`
    Email,
    /// `123-45-6789`
    Ssn,
    /// Starts with five digits. Longer inputs such as ZIP+4 without a
    /// hyphen still pass.
    Zip,
}

impl StockPattern {
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Phone => r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$",
            Self::PhoneAreaCodeParentheses => r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$",
            Self::Email => r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
            Self::Ssn => r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$",
            Self::Zip => r"^[0-9]{5}",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Self::Phone | Self::PhoneAreaCodeParentheses => "Invalid Phone",
            Self::Email => "Invalid Email",
            Self::Ssn => "Invalid SSN",
            Self::Zip => "Invalid Zip",
        }
    }

    /// The compiled expression, built once per process.
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Phone => &PHONE,
            Self::PhoneAreaCodeParentheses => &PHONE_AREA_CODE_PARENTHESES,
            Self::Email => &EMAIL,
            Self::Ssn => &SSN,
            Self::Zip => &ZIP,
        }
    }

    fn compile(self) -> Regex {
        Regex::new(self.pattern()).expect("stock pattern should always compile")
    }
}

/// Requires the input to contain a match for a regular expression.
///
/// # Example
///
/// ```rust
/// use validkit::core::{Rule, ValidationError};
/// use validkit::rules::{PatternRule, StockPattern};
///
/// let zip = PatternRule::stock(StockPattern::Zip, 1);
/// assert!(zip.validate("10012").is_valid());
///
/// let hex = PatternRule::new("^[0-9a-f]+$", ValidationError::new("Not hex"), 0).unwrap();
/// assert!(!hex.validate("xyz").is_valid());
/// ```
#[derive(Clone, Debug)]
pub struct PatternRule {
    regex: Regex,
    priority: i32,
    error: ValidationError,
}

impl PatternRule {
    /// Compile a caller-supplied expression.
    pub fn new(pattern: &str, error: ValidationError, priority: i32) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            regex,
            priority,
            error,
        })
    }

    /// Rule for a built-in pattern, reporting that pattern's error.
    pub fn stock(pattern: StockPattern, priority: i32) -> Self {
        Self {
            regex: pattern.regex().clone(),
            priority,
            error: ValidationError::new(pattern.error_message()),
        }
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

rule_settings!(PatternRule);

impl Rule for PatternRule {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn validation_error(&self) -> &ValidationError {
        &self.error
    }

    fn validate(&self, input: &str) -> ValidationResult {
        self.check(self.regex.is_match(input))
    }
}
