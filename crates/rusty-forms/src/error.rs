// File: src/error.rs
// Purpose: Errors raised by form construction and queries
//
// A value rejected by a validator is not an error. It is feedback on the
// field and shows up in the ValidationReport.

use rusty_forms_validation::ValidatorError;
use thiserror::Error;

use crate::definition::FieldType;

#[derive(Debug, Error)]
pub enum FormError {
    /// Query or mutation by a name absent from the definitions
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// Radio or select field declared without any options
    #[error("Field '{field}' is a {field_type} field but declares no options")]
    MissingOptions { field: String, field_type: FieldType },

    #[error(transparent)]
    Validator(#[from] ValidatorError),

    /// Configuration lookup by a form name that was never declared
    #[error("Unknown form '{0}'")]
    UnknownForm(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
