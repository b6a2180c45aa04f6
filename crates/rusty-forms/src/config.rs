// File: src/config.rs
// Purpose: Form declarations loaded from forms.toml

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use rusty_forms_validation::{PredicateRegistry, ValidatorConfig};
use serde::Deserialize;

use crate::definition::{FieldDefinition, FieldOption, FieldType};
use crate::error::{FormError, Result};
use crate::form_state::{FormState, DEFAULT_METHOD};
use crate::render::{FormRenderer, Submit, FEEDBACK_COLOR};
use crate::submission::Submission;

/// Every form declared in one configuration file
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub forms: HashMap<String, FormConfig>,
}

/// Rendering defaults shared by all forms
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_feedback_color")]
    pub feedback_color: String,

    /// Label of the generated submit button when a form sets none
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub action: String,

    #[serde(default = "default_method")]
    pub method: String,

    /// Sets the form's `name` and `id` attributes
    #[serde(default)]
    pub name: Option<String>,

    /// Display order; fields left out are not rendered
    #[serde(default)]
    pub order: Vec<String>,

    #[serde(default)]
    pub fields: HashMap<String, FieldConfig>,

    #[serde(default)]
    pub submit: SubmitConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub label: String,

    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    #[serde(default)]
    pub default: String,

    #[serde(default)]
    pub default_checked: bool,

    #[serde(default)]
    pub options: Vec<FieldOption>,

    #[serde(default)]
    pub validators: Vec<ValidatorConfig>,
}

/// Submit control; `image` switches to an image button
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SubmitConfig {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub class: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub attrs: String,
}

// Default values
fn default_feedback_color() -> String {
    FEEDBACK_COLOR.to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            feedback_color: default_feedback_color(),
            submit_label: default_submit_label(),
        }
    }
}

impl FormsConfig {
    /// Load form declarations from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        // Missing file means no forms declared
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read forms config: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse forms config: {:?}", path))?;

        tracing::info!(path = ?path, forms = config.forms.len(), "loaded forms config");
        Ok(config)
    }

    /// Load from the default path (./forms.toml)
    pub fn load_default() -> anyhow::Result<Self> {
        Self::load("forms.toml")
    }

    pub fn form(&self, name: &str) -> Result<&FormConfig> {
        self.forms
            .get(name)
            .ok_or_else(|| FormError::UnknownForm(name.to_string()))
    }
}

impl FieldConfig {
    /// Build the definition, compiling patterns and resolving predicates
    pub fn definition(&self, registry: &PredicateRegistry) -> Result<FieldDefinition> {
        let mut definition = FieldDefinition::new(self.label.as_str(), self.field_type)
            .with_default(self.default.as_str())
            .with_default_checked(self.default_checked)
            .with_options(self.options.iter().cloned());

        for validator in &self.validators {
            definition = definition.with_validator(validator.build(registry)?);
        }

        Ok(definition)
    }
}

impl FormConfig {
    pub fn definitions(
        &self,
        registry: &PredicateRegistry,
    ) -> Result<HashMap<String, FieldDefinition>> {
        self.fields
            .iter()
            .map(|(name, field)| -> Result<(String, FieldDefinition)> {
                Ok((name.clone(), field.definition(registry)?))
            })
            .collect()
    }

    /// Populate a fresh form state from a submission
    pub fn build(
        &self,
        submission: &Submission,
        registry: &PredicateRegistry,
    ) -> Result<FormState> {
        FormState::new(self.definitions(registry)?, submission, self.order.clone())
    }

    pub fn renderer(&self, render: &RenderConfig) -> FormRenderer {
        let label = self
            .submit
            .label
            .clone()
            .unwrap_or_else(|| render.submit_label.clone());
        let submit = match &self.submit.image {
            Some(src) => Submit::image(src.as_str(), label),
            None => Submit::button(label),
        };
        let submit = match &self.submit.class {
            Some(class) => submit.with_class(class.as_str()),
            None => submit,
        };
        let submit = match &self.submit.id {
            Some(id) => submit.with_id(id.as_str()),
            None => submit,
        };

        let renderer = FormRenderer::new(self.action.as_str())
            .method(self.method.as_str())
            .feedback_color(render.feedback_color.as_str())
            .submit(submit.with_attrs(self.submit.attrs.as_str()));

        match &self.name {
            Some(name) => renderer.name(name.as_str()),
            None => renderer,
        }
    }
}
