//! Rule configuration errors.

use thiserror::Error;

/// Errors that can occur when configuring a rule.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The regular expression given to a pattern rule did not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
