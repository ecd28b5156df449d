//! Validation outcomes and the merge that combines them.
//!
//! A result is either `Valid` or `Invalid` with a non-empty set of errors.
//! Merging is set union with `Valid` as the identity, so it is associative
//! and commutative: any number of outcomes can be folded in any order and
//! the verdict is the same.

use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::Semigroup;
use thiserror::Error;

/// Returned when building a [`ValidationErrors`] from an empty set.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("an invalid result must carry at least one error")]
pub struct EmptyErrorSet;

/// Non-empty, de-duplicated set of validation errors.
///
/// Identical errors collapse to one entry. Iteration order is the natural
/// ordering of [`ValidationError`], which keeps output stable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeSet<ValidationError>",
    into = "BTreeSet<ValidationError>"
)]
pub struct ValidationErrors {
    errors: BTreeSet<ValidationError>,
}

impl ValidationErrors {
    /// Set holding exactly one error.
    pub fn single(error: ValidationError) -> Self {
        Self {
            errors: BTreeSet::from([error]),
        }
    }

    /// Collect errors into a set. Returns `None` if there are none.
    pub fn from_errors<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = ValidationError>,
    {
        let errors: BTreeSet<_> = errors.into_iter().collect();
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.errors.contains(error)
    }

    /// Check whether any error carries this message.
    pub fn contains_message(&self, message: &str) -> bool {
        self.errors.iter().any(|e| e.message() == message)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Messages of every error, in set order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::message).collect()
    }

    pub fn as_set(&self) -> &BTreeSet<ValidationError> {
        &self.errors
    }

    pub fn into_set(self) -> BTreeSet<ValidationError> {
        self.errors
    }
}

impl Semigroup for ValidationErrors {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl TryFrom<BTreeSet<ValidationError>> for ValidationErrors {
    type Error = EmptyErrorSet;

    fn try_from(errors: BTreeSet<ValidationError>) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            Err(EmptyErrorSet)
        } else {
            Ok(Self { errors })
        }
    }
}

impl From<ValidationErrors> for BTreeSet<ValidationError> {
    fn from(errors: ValidationErrors) -> Self {
        errors.errors
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = btree_set::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = btree_set::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Outcome of validating one input.
///
/// # Example
///
/// ```rust
/// use validkit::core::{ValidationError, ValidationResult};
///
/// let empty = ValidationResult::invalid(ValidationError::new("Must not be empty"));
/// let ascii = ValidationResult::invalid(ValidationError::new("Unsupported character"));
///
/// let merged = ValidationResult::merge_all([ValidationResult::Valid, empty.clone(), ascii, empty]);
///
/// assert!(!merged.is_valid());
/// assert_eq!(merged.errors().map(|e| e.len()), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(ValidationErrors),
}

impl ValidationResult {
    /// Invalid result carrying a single error.
    pub fn invalid(error: ValidationError) -> Self {
        ValidationResult::Invalid(ValidationErrors::single(error))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The error set, or `None` for a valid result.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    /// Combine two outcomes.
    ///
    /// `Valid` is the identity; two invalid results union their errors.
    pub fn merge(self, other: ValidationResult) -> ValidationResult {
        match (self, other) {
            (ValidationResult::Valid, other) => other,
            (invalid, ValidationResult::Valid) => invalid,
            (ValidationResult::Invalid(left), ValidationResult::Invalid(right)) => {
                ValidationResult::Invalid(left.combine(right))
            }
        }
    }

    /// Left fold of [`merge`](Self::merge) starting from `Valid`.
    ///
    /// An empty sequence is `Valid`.
    pub fn merge_all<I>(results: I) -> ValidationResult
    where
        I: IntoIterator<Item = ValidationResult>,
    {
        results
            .into_iter()
            .fold(ValidationResult::Valid, ValidationResult::merge)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(errors) => Err(errors),
        }
    }

    /// Convert into stillwater's accumulating `Validation`.
    pub fn into_validation(self) -> Validation<(), ValidationErrors> {
        Validation::from_result(self.into_result())
    }
}

impl Semigroup for ValidationResult {
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        ValidationResult::merge_all(iter)
    }
}

impl From<Result<(), ValidationErrors>> for ValidationResult {
    fn from(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => ValidationResult::Valid,
            Err(errors) => ValidationResult::Invalid(errors),
        }
    }
}

impl<T> From<Validation<T, ValidationErrors>> for ValidationResult {
    fn from(validation: Validation<T, ValidationErrors>) -> Self {
        match validation {
            Validation::Success(_) => ValidationResult::Valid,
            Validation::Failure(errors) => ValidationResult::Invalid(errors),
        }
    }
}
