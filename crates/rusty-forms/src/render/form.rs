// File: src/render/form.rs
// Purpose: The <form> wrapper and its generated submit control

use std::collections::HashMap;
use std::fmt::Write;

use maud::{Markup, PreEscaped};

use super::{attr_suffix, escape, row_with_color, FEEDBACK_COLOR};
use crate::form_state::{FormState, DEFAULT_METHOD};

/// Submit control appended after the last field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// `<input type='submit' value='LABEL' />`
    Button {
        label: String,
        class: Option<String>,
        id: Option<String>,
        attrs: String,
    },
    /// `<input type='image' src='SRC' alt='ALT' />`
    Image {
        src: String,
        alt: String,
        class: Option<String>,
        id: Option<String>,
        attrs: String,
    },
}

impl Submit {
    pub fn button(label: impl Into<String>) -> Self {
        Submit::Button {
            label: label.into(),
            class: None,
            id: None,
            attrs: String::new(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Submit::Image {
            src: src.into(),
            alt: alt.into(),
            class: None,
            id: None,
            attrs: String::new(),
        }
    }

    pub fn with_class(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Submit::Button { class, .. } | Submit::Image { class, .. } => {
                *class = Some(value.into())
            }
        }
        self
    }

    pub fn with_id(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Submit::Button { id, .. } | Submit::Image { id, .. } => *id = Some(value.into()),
        }
        self
    }

    pub fn with_attrs(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Submit::Button { attrs, .. } | Submit::Image { attrs, .. } => *attrs = value.into(),
        }
        self
    }

    pub fn render(&self) -> Markup {
        let (mut html, class, id, attrs) = match self {
            Submit::Button { label, class, id, attrs } => (
                format!("<input type='submit' value='{}'", escape(label)),
                class,
                id,
                attrs,
            ),
            Submit::Image { src, alt, class, id, attrs } => (
                format!("<input type='image' src='{}' alt='{}'", escape(src), escape(alt)),
                class,
                id,
                attrs,
            ),
        };

        if let Some(class) = class {
            let _ = write!(html, " class='{}'", escape(class));
        }
        if let Some(id) = id {
            let _ = write!(html, " id='{}'", escape(id));
        }
        html.push_str(&attr_suffix(attrs));
        html.push_str(" />");

        PreEscaped(html)
    }
}

impl Default for Submit {
    fn default() -> Self {
        Submit::button("Submit")
    }
}

/// Renders a whole form: wrapper, one table row per field in display
/// order, then the submit control.
///
/// ```
/// use std::collections::HashMap;
/// use rusty_forms::{FieldDefinition, FormRenderer, FormState, Submission, Submit};
///
/// let mut definitions = HashMap::new();
/// definitions.insert("q".to_string(), FieldDefinition::text("Search"));
/// let form = FormState::new(definitions, &Submission::new(), vec!["q".into()]).unwrap();
///
/// let html = FormRenderer::new("/search")
///     .method("GET")
///     .submit(Submit::button("Go"))
///     .render(&form)
///     .into_string();
/// assert!(html.starts_with("<form action='/search' method='GET'>"));
/// ```
#[derive(Debug, Clone)]
pub struct FormRenderer {
    action: String,
    method: String,
    name: Option<String>,
    multipart: Option<bool>,
    attrs: String,
    submit: Submit,
    feedback_color: String,
    field_attrs: HashMap<String, String>,
}

impl FormRenderer {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: DEFAULT_METHOD.to_string(),
            name: None,
            multipart: None,
            attrs: String::new(),
            submit: Submit::default(),
            feedback_color: FEEDBACK_COLOR.to_string(),
            field_attrs: HashMap::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets both the `name` and `id` attributes
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Force the multipart encoding on or off. Left unset, it is used
    /// whenever the form has a file field.
    pub fn multipart(mut self, multipart: bool) -> Self {
        self.multipart = Some(multipart);
        self
    }

    pub fn attrs(mut self, attrs: impl Into<String>) -> Self {
        self.attrs = attrs.into();
        self
    }

    pub fn submit(mut self, submit: Submit) -> Self {
        self.submit = submit;
        self
    }

    pub fn feedback_color(mut self, color: impl Into<String>) -> Self {
        self.feedback_color = color.into();
        self
    }

    /// Extra attributes for one field's control
    pub fn field_attrs(mut self, field: impl Into<String>, attrs: impl Into<String>) -> Self {
        self.field_attrs.insert(field.into(), attrs.into());
        self
    }

    /// The opening `<form>` tag on its own
    pub fn open(&self, form: &FormState) -> Markup {
        let mut html = format!(
            "<form action='{}' method='{}'",
            escape(&self.action),
            escape(&self.method)
        );

        if let Some(name) = &self.name {
            let name = escape(name);
            let _ = write!(html, " name='{name}' id='{name}'");
        }
        if self.multipart.unwrap_or_else(|| form.has_file_fields()) {
            html.push_str(" enctype='multipart/form-data'");
        }
        html.push_str(&attr_suffix(&self.attrs));
        html.push('>');

        PreEscaped(html)
    }

    pub fn close(&self) -> Markup {
        PreEscaped("</form>".to_string())
    }

    pub fn render(&self, form: &FormState) -> Markup {
        let mut html = self.open(form).into_string();
        html.push_str("<table>");

        for name in form.fields_order() {
            match form.field(name) {
                Ok(field) => {
                    let attrs = self.field_attrs.get(name).map(String::as_str).unwrap_or("");
                    let row = row_with_color(field, attrs, &self.feedback_color);
                    html.push_str(&row.into_string());
                }
                Err(_) => tracing::warn!(field = %name, "skipping undefined field while rendering"),
            }
        }

        let _ = write!(
            html,
            "<tr><td colspan='2'>{}</td></tr></table>",
            self.submit.render().into_string()
        );
        html.push_str(&self.close().into_string());

        PreEscaped(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_button() {
        assert_eq!(
            Submit::default().render().into_string(),
            "<input type='submit' value='Submit' />"
        );

        let button = Submit::button("Save")
            .with_class("btn")
            .with_id("save")
            .with_attrs("disabled='disabled'");
        assert_eq!(
            button.render().into_string(),
            "<input type='submit' value='Save' class='btn' id='save' disabled='disabled' />"
        );
    }

    #[test]
    fn test_submit_image() {
        let image = Submit::image("/img/go.png", "Go").with_class("img-btn");
        assert_eq!(
            image.render().into_string(),
            "<input type='image' src='/img/go.png' alt='Go' class='img-btn' />"
        );
    }
}
