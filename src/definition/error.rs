//! Definition error types.

use crate::rules::RuleError;
use thiserror::Error;

/// Errors that can occur when loading or compiling a validator definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The definition could not be written out as JSON or bincode
    #[error("Could not encode validator definition: {0}")]
    SerializationFailed(String),

    /// The stored bytes or text are not a well-formed definition
    #[error("Could not decode validator definition: {0}")]
    DeserializationFailed(String),

    /// The definition was written in a format version this crate cannot read
    #[error("Definition format version {found} cannot be loaded, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A rule in the definition could not be built
    #[error("Rule {index} is invalid: {source}")]
    InvalidRule {
        index: usize,
        #[source]
        source: RuleError,
    },
}
