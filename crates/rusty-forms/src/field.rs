// File: src/field.rs
// Purpose: Runtime state of one input: value, validity and feedback

use std::sync::Arc;

use rusty_forms_validation::Validator;
use serde::Serialize;

use crate::definition::{FieldDefinition, FieldOption, FieldType};
use crate::error::Result;
use crate::submission::Submission;

/// Validation state of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    /// Not validated yet
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Validity::Unknown => None,
            Validity::Valid => Some(true),
            Validity::Invalid => Some(false),
        }
    }
}

/// Result of running one field's validator chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub valid: bool,
    /// One message per failing validator, in declaration order
    pub feedback: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    definition: FieldDefinition,
    value: String,
    /// Checkbox submitted truthy, independent of what `value` ends up as
    ticked: bool,
    validity: Validity,
    feedback: Vec<String>,
}

impl Field {
    /// Merge a definition with whatever was submitted under `name`.
    ///
    /// Checkboxes take their default value when ticked and stay empty
    /// otherwise, whatever `default_checked` says. Other fields take the
    /// submitted value unless it is missing or empty.
    pub fn populate(
        name: impl Into<String>,
        definition: FieldDefinition,
        submission: &Submission,
    ) -> Self {
        let name = name.into();
        let ticked =
            definition.field_type() == FieldType::Checkbox && submission.is_truthy(&name);

        let value = if definition.field_type() == FieldType::Checkbox {
            if ticked {
                definition.default_value().to_string()
            } else {
                String::new()
            }
        } else {
            submission
                .non_empty(&name)
                .unwrap_or(definition.default_value())
                .to_string()
        };

        Self {
            name,
            definition,
            value,
            ticked,
            validity: Validity::Unknown,
            feedback: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    pub fn label(&self) -> &str {
        self.definition.label()
    }

    pub fn field_type(&self) -> FieldType {
        self.definition.field_type()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_value(&self) -> &str {
        self.definition.default_value()
    }

    pub fn default_checked(&self) -> bool {
        self.definition.default_checked()
    }

    pub fn options(&self) -> &[FieldOption] {
        self.definition.options()
    }

    pub fn validators(&self) -> &[Arc<Validator>] {
        self.definition.validators()
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// `None` until the field has been validated
    pub fn is_valid(&self) -> Option<bool> {
        self.validity.as_bool()
    }

    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    /// Whether a checkbox renders ticked: submitted truthy, holding a value,
    /// or checked by default
    pub fn is_checked(&self) -> bool {
        self.ticked || !self.value.is_empty() || self.definition.default_checked()
    }

    /// Run every validator against the current value, in order.
    ///
    /// Does not touch the field. A field without validators is valid
    /// whatever its value.
    pub fn evaluate(&self) -> Result<FieldOutcome> {
        let mut feedback = Vec::new();

        for validator in self.definition.validators() {
            if !validator.validate(&self.value)? {
                feedback.push(validator.feedback().to_string());
            }
        }

        Ok(FieldOutcome {
            valid: feedback.is_empty(),
            feedback,
        })
    }

    /// Replace validity and feedback with a fresh outcome
    pub(crate) fn apply(&mut self, outcome: &FieldOutcome) {
        self.validity = if outcome.valid {
            Validity::Valid
        } else {
            Validity::Invalid
        };
        self.feedback = outcome.feedback.clone();
    }

    pub(crate) fn set_value(&mut self, value: String) {
        if self.field_type() == FieldType::Checkbox {
            self.ticked = !value.is_empty();
        }
        self.value = value;
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            name: self.name.clone(),
            label: self.label().to_string(),
            field_type: self.field_type(),
            value: self.value.clone(),
            default_value: self.default_value().to_string(),
            default_checked: self.default_checked(),
            checked: self.is_checked(),
            options: self.options().to_vec(),
            feedback: self.feedback.clone(),
            validity: self.validity,
        }
    }
}

/// Owned copy of a field's state for templates and JSON responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub value: String,
    pub default_value: String,
    pub default_checked: bool,
    pub checked: bool,
    pub options: Vec<FieldOption>,
    pub feedback: Vec<String>,
    pub validity: Validity,
}
