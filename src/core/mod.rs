//! Core validation types and logic.
//!
//! This module contains the rule-composition and result-aggregation model:
//! - `ValidationError` values describing a single failure
//! - `ValidationResult` and its union-based merge
//! - The `Rule` and `Validator` capabilities
//!
//! Everything here is pure. Evaluation never mutates a rule or validator,
//! so both can be shared freely across threads.

mod error;
mod result;
mod rule;
mod validator;

pub use error::ValidationError;
pub use result::{EmptyErrorSet, ValidationErrors, ValidationResult};
pub use rule::Rule;
pub use validator::{validate_all, RuleSet, Validator};
