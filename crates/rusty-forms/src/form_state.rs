// File: src/form_state.rs
// Purpose: Aggregate of fields, display order and form-level validity

use std::collections::HashMap;

use maud::Markup;
use serde::Serialize;

use crate::definition::{FieldDefinition, FieldType};
use crate::error::{FormError, Result};
use crate::field::{Field, FieldSnapshot};
use crate::render;
use crate::report::ValidationReport;
use crate::submission::Submission;

/// Method a form is expected to be submitted with unless told otherwise
pub const DEFAULT_METHOD: &str = "POST";

/// Whether the request method is the one the form submits with
pub fn is_submitted(actual_method: &str, expected_method: &str) -> bool {
    actual_method == expected_method
}

/// Request-scoped state of one form
///
/// Build one per render/submit cycle with [`FormState::new`], call
/// [`FormState::validate`], then query fields or hand the state to the
/// renderer. Not meant to outlive the request.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use rusty_forms::{FieldDefinition, FormState, Submission, Validator};
///
/// let mut definitions = HashMap::new();
/// definitions.insert(
///     "email".to_string(),
///     FieldDefinition::text("Email").with_validator(Validator::min_length(6, "too short")),
/// );
///
/// let submission: Submission = [("email", "ab")].into_iter().collect();
/// let mut form = FormState::new(definitions, &submission, vec!["email".into()]).unwrap();
///
/// let report = form.validate().unwrap();
/// assert!(!report.is_valid());
/// assert!(!form.is_valid());
/// assert_eq!(form.field_feedback("email").unwrap(), ["too short".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct FormState {
    fields: HashMap<String, Field>,
    order: Vec<String>,
    valid: bool,
    validated: bool,
}

impl FormState {
    /// Populate every defined field from the submission.
    ///
    /// `order` is kept verbatim and only drives rendering; nothing is derived
    /// from the definitions map. Radio and select definitions without
    /// options are rejected here rather than at render time.
    pub fn new(
        definitions: HashMap<String, FieldDefinition>,
        submission: &Submission,
        order: Vec<String>,
    ) -> Result<Self> {
        let mut fields = HashMap::with_capacity(definitions.len());

        for (name, definition) in definitions {
            definition.check(&name)?;
            let field = Field::populate(name.clone(), definition, submission);
            tracing::debug!(field = %name, value = %field.value(), "populated field");
            fields.insert(name, field);
        }

        for name in order.iter().filter(|name| !fields.contains_key(name.as_str())) {
            tracing::warn!(field = %name, "display order names an undefined field");
        }

        Ok(Self {
            fields,
            order,
            valid: true,
            validated: false,
        })
    }

    /// Run every field's validator chain and record the outcome.
    ///
    /// Feedback from earlier calls is replaced, never appended to, so
    /// repeated calls without value changes agree. If a predicate fails the
    /// error is returned and no field is touched.
    pub fn validate(&mut self) -> Result<ValidationReport> {
        let mut report = ValidationReport::new();

        for (name, field) in &self.fields {
            let outcome = field.evaluate()?;
            if !outcome.valid {
                tracing::debug!(
                    field = %name,
                    feedback = ?outcome.feedback,
                    "field failed validation"
                );
            }
            report.record(name, field.value(), outcome);
        }

        for (name, outcome) in report.outcomes() {
            if let Some(field) = self.fields.get_mut(name) {
                field.apply(outcome);
            }
        }

        self.valid = report.is_valid();
        self.validated = true;

        Ok(report)
    }

    pub fn field(&self, name: &str) -> Result<&Field> {
        self.fields
            .get(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    pub fn field_value(&self, name: &str) -> Result<&str> {
        Ok(self.field(name)?.value())
    }

    /// Label markup; checkbox labels are wrapped in a `<label for>`.
    pub fn field_label(&self, name: &str) -> Result<Markup> {
        Ok(render::label(self.field(name)?))
    }

    pub fn field_type(&self, name: &str) -> Result<FieldType> {
        Ok(self.field(name)?.field_type())
    }

    /// Feedback from the last validation, empty when the field passed
    pub fn field_feedback(&self, name: &str) -> Result<&[String]> {
        Ok(self.field(name)?.feedback())
    }

    pub fn fields_order(&self) -> &[String] {
        &self.order
    }

    /// Fields in display order, skipping names with no definition
    pub fn ordered_fields(&self) -> impl Iterator<Item = &Field> {
        self.order.iter().filter_map(|name| self.fields.get(name))
    }

    /// All fields, in no particular order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Overwrite a value outside the submission path, e.g. to normalise
    /// input before persisting it. Validity is left alone until the next
    /// `validate`.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.set_value(value.into());
        Ok(())
    }

    /// Form-level validity. True until `validate` has run at least once,
    /// so check [`FormState::has_been_validated`] when that matters.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn has_been_validated(&self) -> bool {
        self.validated
    }

    /// Any file input means the form needs a multipart encoding
    pub fn has_file_fields(&self) -> bool {
        self.fields.values().any(|f| f.field_type() == FieldType::File)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            is_valid: self.valid,
            validated: self.validated,
            ordered_field_names: self.order.clone(),
            fields: self.ordered_fields().map(Field::snapshot).collect(),
        }
    }
}

/// Owned copy of the form-level state, fields in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub is_valid: bool,
    pub validated: bool,
    pub ordered_field_names: Vec<String>,
    pub fields: Vec<FieldSnapshot>,
}
