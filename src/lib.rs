//! Validkit: composable string validation
//!
//! Validkit checks one input string against a flat list of rules and
//! reports every distinct reason the input is rejected, not just the first.
//! Rules are pure predicates; validators are ordered rule lists; results
//! merge by set union, so verdicts compose in any order.
//!
//! # Core Concepts
//!
//! - **ValidationError**: A value describing one failure (message + optional recovery hint)
//! - **ValidationResult**: `Valid`, or `Invalid` with a non-empty, de-duplicated error set
//! - **Rule**: A single predicate with a priority and the error it reports
//! - **Validator**: An ordered rule list, evaluated highest priority first, never short-circuiting
//!
//! # Example
//!
//! ```rust
//! use validkit::core::Validator;
//! use validkit::validators::FullNameValidator;
//!
//! let validator = FullNameValidator::new();
//!
//! assert!(validator.is_valid("Patrick Smith"));
//!
//! let result = validator.validate("J Eh√∞≈µf");
//! let errors = result.errors().unwrap();
//! assert_eq!(errors.len(), 2);
//! assert!(errors.contains_message("Invalid Name"));
//! assert!(errors.contains_message("Unsupported character"));
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod rules;
pub mod validators;

// Re-export commonly used types
pub use builder::ValidatorBuilder;
pub use core::{Rule, RuleSet, ValidationError, ValidationErrors, ValidationResult, Validator};
pub use definition::{DefinitionError, ValidatorDefinition};
pub use rules::RuleError;
