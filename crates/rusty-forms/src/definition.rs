// File: src/definition.rs
// Purpose: Declarative field templates supplied by the caller

use std::fmt;
use std::sync::Arc;

use rusty_forms_validation::Validator;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Input type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Password,
    Hidden,
    File,
    Checkbox,
    Radio,
    Select,
    Textarea,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Password => "password",
            FieldType::Hidden => "hidden",
            FieldType::File => "file",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Textarea => "textarea",
        }
    }

    /// Radio groups and select boxes are built from an options group
    pub fn needs_options(&self) -> bool {
        matches!(self, FieldType::Radio | FieldType::Select)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One label/value pair of a radio group or select box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Read-only template for one input
///
/// For checkboxes `default_value` is the value the field takes when the box
/// is ticked, and `default_checked` only affects rendering.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    label: String,
    field_type: FieldType,
    default_value: String,
    default_checked: bool,
    options: Vec<FieldOption>,
    validators: Vec<Arc<Validator>>,
}

impl FieldDefinition {
    pub fn new(label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            label: label.into(),
            field_type,
            default_value: String::new(),
            default_checked: false,
            options: Vec::new(),
            validators: Vec::new(),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(label, FieldType::Text)
    }

    pub fn password(label: impl Into<String>) -> Self {
        Self::new(label, FieldType::Password)
    }

    pub fn hidden(label: impl Into<String>) -> Self {
        Self::new(label, FieldType::Hidden)
    }

    pub fn file(label: impl Into<String>) -> Self {
        Self::new(label, FieldType::File)
    }

    pub fn checkbox(label: impl Into<String>) -> Self {
        Self::new(label, FieldType::Checkbox)
    }

    pub fn radio(label: impl Into<String>) -> Self {
        Self::new(label, FieldType::Radio)
    }

    pub fn select(label: impl Into<String>) -> Self {
        Self::new(label, FieldType::Select)
    }

    pub fn textarea(label: impl Into<String>) -> Self {
        Self::new(label, FieldType::Textarea)
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn with_default_checked(mut self, checked: bool) -> Self {
        self.default_checked = checked;
        self
    }

    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(FieldOption::new(label, value));
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn with_validator(self, validator: Validator) -> Self {
        self.with_shared_validator(Arc::new(validator))
    }

    /// Attach a validator that other definitions also reference
    pub fn with_shared_validator(mut self, validator: Arc<Validator>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn default_checked(&self) -> bool {
        self.default_checked
    }

    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    pub fn validators(&self) -> &[Arc<Validator>] {
        &self.validators
    }

    /// Rejects definitions that could never render, such as a select box
    /// without options.
    pub fn check(&self, name: &str) -> Result<()> {
        if self.field_type.needs_options() && self.options.is_empty() {
            return Err(FormError::MissingOptions {
                field: name.to_string(),
                field_type: self.field_type,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let definition = FieldDefinition::select("Colour")
            .with_default("red")
            .with_option("Red", "red")
            .with_option("Blue", "blue")
            .with_validator(Validator::min_length(1, "pick one"));

        assert_eq!(definition.label(), "Colour");
        assert_eq!(definition.field_type(), FieldType::Select);
        assert_eq!(definition.default_value(), "red");
        assert_eq!(definition.options().len(), 2);
        assert_eq!(definition.validators().len(), 1);
        assert!(definition.check("colour").is_ok());
    }

    #[test]
    fn test_options_required_for_radio_and_select() {
        for definition in [FieldDefinition::radio("Size"), FieldDefinition::select("Size")] {
            let err = definition.check("size").unwrap_err();
            assert!(matches!(err, FormError::MissingOptions { ref field, .. } if field == "size"));
        }

        assert!(FieldDefinition::text("Name").check("name").is_ok());
        assert!(FieldDefinition::checkbox("Agree").check("agree").is_ok());
    }

    #[test]
    fn test_shared_validator_is_not_copied() {
        let shared = Arc::new(Validator::max_length(10, "too long"));
        let first = FieldDefinition::text("First").with_shared_validator(Arc::clone(&shared));
        let second = FieldDefinition::text("Second").with_shared_validator(Arc::clone(&shared));

        assert!(Arc::ptr_eq(&first.validators()[0], &second.validators()[0]));
        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Textarea.to_string(), "textarea");
        assert_eq!(FieldType::default(), FieldType::Text);
        let parsed: FieldType = serde_json::from_str("\"checkbox\"").unwrap();
        assert_eq!(parsed, FieldType::Checkbox);
    }
}
