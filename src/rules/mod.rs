//! Stock rule catalogue.
//!
//! Every rule here is a small deterministic predicate paired with the error
//! it reports. Rules carry their priority and error as plain fields that are
//! set at construction (`with_priority`, `with_error`) and can be changed
//! afterwards (`set_priority`, `set_validation_error`).

/// Generate the priority/error accessors shared by every stock rule.
///
/// The target struct must have `priority: i32` and `error: ValidationError`
/// fields.
macro_rules! rule_settings {
    ($rule:ty) => {
        impl $rule {
            /// Replace the priority.
            pub fn with_priority(mut self, priority: i32) -> Self {
                self.priority = priority;
                self
            }

            /// Replace the reported error.
            pub fn with_error(mut self, error: $crate::core::ValidationError) -> Self {
                self.error = error;
                self
            }

            pub fn set_priority(&mut self, priority: i32) {
                self.priority = priority;
            }

            pub fn set_validation_error(&mut self, error: $crate::core::ValidationError) {
                self.error = error;
            }
        }
    };
}

mod content;
pub mod error;
mod length;
mod lookup;
mod name;
mod pattern;
mod predicate;

pub use content::{AlwaysValidRule, NonAsciiRule, NonEmptyRule};
pub use error::RuleError;
pub use length::{LengthRule, RangeLengthRule};
pub use lookup::{MembershipRule, US_STATES};
pub use name::FullNameRule;
pub use pattern::{PatternRule, StockPattern};
pub use predicate::PredicateRule;
