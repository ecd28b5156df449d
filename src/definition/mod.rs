//! Serializable validator definitions.
//!
//! A definition is plain data describing an ordered rule list. It can be
//! stored as JSON or in a compact binary form, loaded back, and compiled
//! into a [`RuleSet`]. This lets applications keep field validation in
//! configuration rather than code.
//!
//! # Example
//!
//! ```rust
//! use validkit::core::Validator;
//! use validkit::definition::{RuleDefinition, RuleKind, ValidatorDefinition};
//! use validkit::rules::StockPattern;
//!
//! let json = r#"{
//!     "version": 1,
//!     "name": "zip",
//!     "rules": [
//!         { "kind": "non_ascii" },
//!         { "kind": { "stock_pattern": { "pattern": "zip" } }, "priority": 1 }
//!     ]
//! }"#;
//!
//! let definition = ValidatorDefinition::from_json(json).unwrap();
//! assert_eq!(
//!     definition.rules[1],
//!     RuleDefinition::new(RuleKind::StockPattern { pattern: StockPattern::Zip }, 1)
//! );
//!
//! let validator = definition.compile().unwrap();
//! assert!(validator.is_valid("10012"));
//! ```

use crate::core::{Rule, RuleSet, ValidationError};
use crate::rules::{
    AlwaysValidRule, FullNameRule, LengthRule, MembershipRule, NonAsciiRule, NonEmptyRule,
    PatternRule, RangeLengthRule, RuleError, StockPattern,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub mod error;

pub use error::DefinitionError;

/// Version identifier for the definition format
pub const DEFINITION_VERSION: u32 = 1;

/// Error reported by a custom pattern rule that does not name its own.
pub const DEFAULT_PATTERN_MESSAGE: &str = "Invalid format";

/// Which rule to build, with its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    NonAscii,
    NonEmpty,
    Length { length: usize },
    RangeLength { min: usize, max: usize },
    FullName,
    Pattern { pattern: String },
    StockPattern { pattern: StockPattern },
    Membership { lookup: BTreeMap<String, String> },
    UsStates,
    AlwaysValid,
}

/// One rule in a definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub kind: RuleKind,

    /// Evaluation priority, higher first
    #[serde(default)]
    pub priority: i32,

    /// Replaces the rule's default error when present
    #[serde(default)]
    pub error: Option<ValidationError>,
}

impl RuleDefinition {
    pub fn new(kind: RuleKind, priority: i32) -> Self {
        Self {
            kind,
            priority,
            error: None,
        }
    }

    pub fn with_error(mut self, error: ValidationError) -> Self {
        self.error = Some(error);
        self
    }

    /// Build the rule this entry describes.
    pub fn compile(&self) -> Result<Box<dyn Rule>, RuleError> {
        let priority = self.priority;
        let error = self.error.clone();

        let rule: Box<dyn Rule> = match &self.kind {
            RuleKind::NonAscii => {
                boxed(NonAsciiRule::new(priority), error, NonAsciiRule::with_error)
            }
            RuleKind::NonEmpty => {
                boxed(NonEmptyRule::new(priority), error, NonEmptyRule::with_error)
            }
            RuleKind::Length { length } => {
                boxed(LengthRule::new(*length, priority), error, LengthRule::with_error)
            }
            RuleKind::RangeLength { min, max } => boxed(
                RangeLengthRule::new(*min, *max, priority),
                error,
                RangeLengthRule::with_error,
            ),
            RuleKind::FullName => {
                boxed(FullNameRule::new(priority), error, FullNameRule::with_error)
            }
            RuleKind::Pattern { pattern } => {
                let error =
                    error.unwrap_or_else(|| ValidationError::new(DEFAULT_PATTERN_MESSAGE));
                Box::new(PatternRule::new(pattern, error, priority)?)
            }
            RuleKind::StockPattern { pattern } => boxed(
                PatternRule::stock(*pattern, priority),
                error,
                PatternRule::with_error,
            ),
            RuleKind::Membership { lookup } => boxed(
                MembershipRule::new(lookup.clone(), priority),
                error,
                MembershipRule::with_error,
            ),
            RuleKind::UsStates => boxed(
                MembershipRule::us_states(priority),
                error,
                MembershipRule::with_error,
            ),
            RuleKind::AlwaysValid => boxed(
                AlwaysValidRule::new(priority),
                error,
                AlwaysValidRule::with_error,
            ),
        };

        Ok(rule)
    }
}

/// Box a rule, applying an error override if one was given.
fn boxed<R, F>(rule: R, error: Option<ValidationError>, with_error: F) -> Box<dyn Rule>
where
    R: Rule + 'static,
    F: FnOnce(R, ValidationError) -> R,
{
    match error {
        Some(error) => Box::new(with_error(rule, error)),
        None => Box::new(rule),
    }
}

/// Serializable description of a validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorDefinition {
    /// Definition format version
    pub version: u32,

    /// Name of the field or validator this definition describes
    pub name: String,

    /// Rules in declaration order
    pub rules: Vec<RuleDefinition>,
}

impl ValidatorDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: DEFINITION_VERSION,
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: RuleDefinition) -> Self {
        self.rules.push(rule);
        self
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()?;
        Ok(definition)
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, DefinitionError> {
        bincode::serialize(self).map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format, rejecting unsupported versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DefinitionError> {
        let definition: Self = bincode::deserialize(bytes)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()?;
        Ok(definition)
    }

    /// Build a validator from this definition.
    pub fn compile(&self) -> Result<RuleSet, DefinitionError> {
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                rule.compile()
                    .map_err(|source| DefinitionError::InvalidRule { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(name = %self.name, rules = rules.len(), "compiled validator definition");
        Ok(RuleSet::new(rules))
    }

    fn check_version(&self) -> Result<(), DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }
        Ok(())
    }
}
