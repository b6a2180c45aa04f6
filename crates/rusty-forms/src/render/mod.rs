// File: src/render/mod.rs
// Purpose: HTML markup for fields, table rows and feedback
//
// Attributes are single-quoted, so `'` is escaped along with the usual
// HTML specials. The free-form `attrs` string is passed through as-is.
// Everything returns maud::Markup so it drops straight into Maud templates.

use std::fmt::Write;

use maud::{Escaper, Markup, PreEscaped};

use crate::definition::FieldType;
use crate::field::Field;

pub mod form;

pub use form::{FormRenderer, Submit};

/// Colour of the inline feedback rows
pub const FEEDBACK_COLOR: &str = "#ff3300";

/// Escape text for an HTML body or a single-quoted attribute
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Escaper writes into a String and cannot fail
    let _ = Escaper::new(&mut escaped).write_str(text);
    escaped.replace('\'', "&#39;")
}

/// `" attrs"`, or nothing when there are no extra attributes
pub(crate) fn attr_suffix(attrs: &str) -> String {
    let attrs = attrs.trim();
    if attrs.is_empty() {
        String::new()
    } else {
        format!(" {attrs}")
    }
}

/// The input control for any field type
pub fn field(field: &Field, attrs: &str) -> Markup {
    match field.field_type() {
        FieldType::Text | FieldType::Password | FieldType::Hidden | FieldType::File => {
            input(field, attrs)
        }
        FieldType::Checkbox => checkbox(field, attrs),
        FieldType::Radio => radio_group(field, attrs),
        FieldType::Select => select(field, attrs),
        FieldType::Textarea => textarea(field, attrs),
    }
}

/// `<input type='TYPE' name='NAME' id='NAME' value='VALUE' ATTRS />`
pub fn input(field: &Field, attrs: &str) -> Markup {
    let name = escape(field.name());
    PreEscaped(format!(
        "<input type='{}' name='{name}' id='{name}' value='{}'{} />",
        field.field_type().as_str(),
        escape(field.value()),
        attr_suffix(attrs),
    ))
}

/// A checkbox submits its default value when ticked
pub fn checkbox(field: &Field, attrs: &str) -> Markup {
    let name = escape(field.name());
    let checked = if field.is_checked() { " checked='checked'" } else { "" };
    PreEscaped(format!(
        "<input type='checkbox' name='{name}' id='{name}' value='{}'{}{checked} />",
        escape(field.default_value()),
        attr_suffix(attrs),
    ))
}

/// One labelled radio button per option; the option matching the value is checked
pub fn radio_group(field: &Field, attrs: &str) -> Markup {
    let name = escape(field.name());
    let attrs = attr_suffix(attrs);
    let mut html = String::new();

    for option in field.options() {
        let checked = if option.value == field.value() {
            " checked='checked'"
        } else {
            ""
        };
        let _ = write!(
            html,
            "<label><input type='radio' name='{name}' value='{}'{attrs}{checked}/> {}</label>\
             <br />",
            escape(&option.value),
            escape(&option.label),
        );
    }

    PreEscaped(html)
}

pub fn select(field: &Field, attrs: &str) -> Markup {
    let mut html = format!("<select name='{}'{}>", escape(field.name()), attr_suffix(attrs));

    for option in field.options() {
        let selected = if option.value == field.value() { " selected='selected'" } else { "" };
        let _ = write!(
            html,
            "<option value='{}'{selected}>{}</option>",
            escape(&option.value),
            escape(&option.label),
        );
    }

    html.push_str("</select>");
    PreEscaped(html)
}

pub fn textarea(field: &Field, attrs: &str) -> Markup {
    let content = if field.value().is_empty() {
        field.default_value()
    } else {
        field.value()
    };
    PreEscaped(format!(
        "<textarea name='{}'{}>{}</textarea>",
        escape(field.name()),
        attr_suffix(attrs),
        escape(content),
    ))
}

/// Label text, wrapped in a `<label for>` for checkboxes so the text toggles the box
pub fn label(field: &Field) -> Markup {
    let text = escape(field.label());
    if field.field_type() == FieldType::Checkbox {
        PreEscaped(format!("<label for='{}'>{text}</label>", escape(field.name())))
    } else {
        PreEscaped(text)
    }
}

/// Feedback rows followed by the label/control row
pub fn row(field: &Field, attrs: &str) -> Markup {
    row_with_color(field, attrs, FEEDBACK_COLOR)
}

pub fn row_with_color(field: &Field, attrs: &str, feedback_color: &str) -> Markup {
    let mut html = String::new();

    for message in field.feedback() {
        let _ = write!(
            html,
            "<tr><td colspan='2'><span style='color:{}'>{}</span></td></tr>",
            escape(feedback_color),
            escape(message),
        );
    }

    let _ = write!(
        html,
        "<tr><td>{}</td><td>{}</td></tr>",
        label(field).into_string(),
        self::field(field, attrs).into_string(),
    );

    PreEscaped(html)
}

/// `<div class='feedback'>` per message; empty when the field passed
pub fn feedback_block(field: &Field) -> Markup {
    let mut html = String::new();
    for message in field.feedback() {
        let _ = write!(html, "<div class='feedback'>{}</div>", escape(message));
    }
    PreEscaped(html)
}
