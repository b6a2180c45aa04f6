//! Validator configuration errors
//!
//! A rejected value is never an error; it is a `false` from
//! [`Validator::validate`](crate::Validator::validate). These variants cover
//! validators that cannot be built or cannot run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Regex pattern failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A declarative validator names a predicate nobody registered
    #[error("No predicate registered under '{0}'")]
    UnknownPredicate(String),

    /// A fallible predicate returned an error instead of a verdict
    #[error("Predicate behind '{feedback}' failed: {source}")]
    Predicate {
        feedback: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
