//! Error types for the generator core.
//!
//! Only unrecoverable input problems surface here. Column, key, and
//! index level issues are recovered locally by the transformation with
//! a logged warning so one malformed table never aborts a run.

use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Fatal errors raised before or during a generation run
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A required top-level input was absent or empty
    #[error("missing required input: {0}")]
    MissingInput(String),

    /// A configured pattern failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
