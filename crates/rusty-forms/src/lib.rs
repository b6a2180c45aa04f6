//! # rusty-forms
//!
//! Describe a form's fields once, then populate them from a submission,
//! run each field's validator chain, and render the form with per-field
//! feedback.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use rusty_forms::{render, FieldDefinition, FormState, Submission, Validator};
//!
//! let mut definitions = HashMap::new();
//! definitions.insert(
//!     "email".to_string(),
//!     FieldDefinition::text("Email")
//!         .with_validator(Validator::email("Please enter a valid email")),
//! );
//! definitions.insert(
//!     "newsletter".to_string(),
//!     FieldDefinition::checkbox("Newsletter").with_default("Y"),
//! );
//!
//! let submission: Submission = [("email", "homer@example.com"), ("newsletter", "on")]
//!     .into_iter()
//!     .collect();
//! let order = vec!["email".to_string(), "newsletter".to_string()];
//!
//! let mut form = FormState::new(definitions, &submission, order).unwrap();
//! let report = form.validate().unwrap();
//!
//! assert!(report.is_valid());
//! assert_eq!(form.field_value("newsletter").unwrap(), "Y");
//!
//! let row = render::row(form.field("email").unwrap(), "");
//! assert!(row.into_string().starts_with("<tr><td>Email</td>"));
//! ```
//!
//! ## Modules
//!
//! - [`definition`] - caller-supplied field templates
//! - [`field`] / [`form_state`] - runtime state and validation
//! - [`render`] - HTML markup for fields, rows and the form wrapper
//! - [`config`] - form declarations loaded from `forms.toml`

pub mod config;
pub mod definition;
pub mod error;
pub mod field;
pub mod form_state;
pub mod render;
pub mod report;
pub mod submission;

pub use config::{FieldConfig, FormConfig, FormsConfig, RenderConfig, SubmitConfig};
pub use definition::{FieldDefinition, FieldOption, FieldType};
pub use error::{FormError, Result};
pub use field::{Field, FieldOutcome, FieldSnapshot, Validity};
pub use form_state::{is_submitted, FormSnapshot, FormState, DEFAULT_METHOD};
pub use render::{FormRenderer, Submit};
pub use report::ValidationReport;
pub use submission::Submission;

// Re-export the validator engine so most callers need one dependency
pub use rusty_forms_validation::{
    Predicate, PredicateRegistry, Rule, Validator, ValidatorConfig, ValidatorError,
};

// Re-export Maud's markup type for templates embedding rendered fields
pub use maud::{Markup, PreEscaped};
