// Markup produced for each field type, rows and the form wrapper

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rusty_forms::{render, FieldDefinition, FormRenderer, FormState, Submission, Submit, Validator};

fn form_with(name: &str, definition: FieldDefinition, pairs: &[(&str, &str)]) -> FormState {
    let mut definitions = HashMap::new();
    definitions.insert(name.to_string(), definition);
    let submission: Submission = pairs.iter().copied().collect();
    FormState::new(definitions, &submission, vec![name.to_string()]).unwrap()
}

fn colours() -> FieldDefinition {
    FieldDefinition::select("Colour")
        .with_option("Red", "red")
        .with_option("Blue", "blue")
}

#[test]
fn test_text_input() {
    let form = form_with("name", FieldDefinition::text("Name").with_default("Homer"), &[]);
    let field = form.field("name").unwrap();

    assert_eq!(
        render::field(field, "").into_string(),
        "<input type='text' name='name' id='name' value='Homer' />"
    );
    assert_eq!(
        render::field(field, "class='wide' maxlength='30'").into_string(),
        "<input type='text' name='name' id='name' value='Homer' class='wide' maxlength='30' />"
    );
}

#[test]
fn test_password_hidden_file_use_input_shape() {
    let form = form_with("secret", FieldDefinition::password("Secret"), &[("secret", "s3cret")]);
    assert_eq!(
        render::field(form.field("secret").unwrap(), "").into_string(),
        "<input type='password' name='secret' id='secret' value='s3cret' />"
    );

    let form = form_with("token", FieldDefinition::hidden("Token").with_default("abc"), &[]);
    assert_eq!(
        render::field(form.field("token").unwrap(), "").into_string(),
        "<input type='hidden' name='token' id='token' value='abc' />"
    );

    let form = form_with("avatar", FieldDefinition::file("Avatar"), &[]);
    assert_eq!(
        render::field(form.field("avatar").unwrap(), "").into_string(),
        "<input type='file' name='avatar' id='avatar' value='' />"
    );
}

#[test]
fn test_values_are_escaped() {
    let form = form_with("name", FieldDefinition::text("Name"), &[("name", "O'Brien <b>")]);
    assert_eq!(
        render::field(form.field("name").unwrap(), "").into_string(),
        "<input type='text' name='name' id='name' value='O&#39;Brien &lt;b&gt;' />"
    );
}

#[test]
fn test_checkbox() {
    let definition = FieldDefinition::checkbox("Newsletter").with_default("Y");

    let ticked = form_with("news", definition.clone(), &[("news", "on")]);
    assert_eq!(
        render::field(ticked.field("news").unwrap(), "").into_string(),
        "<input type='checkbox' name='news' id='news' value='Y' checked='checked' />"
    );

    let unticked = form_with("news", definition.clone(), &[]);
    assert_eq!(
        render::field(unticked.field("news").unwrap(), "class='c'").into_string(),
        "<input type='checkbox' name='news' id='news' value='Y' class='c' />"
    );

    let default_checked = form_with("news", definition.with_default_checked(true), &[]);
    assert_eq!(
        render::field(default_checked.field("news").unwrap(), "").into_string(),
        "<input type='checkbox' name='news' id='news' value='Y' checked='checked' />"
    );
}

#[test]
fn test_ticked_checkbox_without_default_renders_checked() {
    let ticked = form_with("agree", FieldDefinition::checkbox("Agree"), &[("agree", "on")]);
    assert_eq!(
        render::field(ticked.field("agree").unwrap(), "").into_string(),
        "<input type='checkbox' name='agree' id='agree' value='' checked='checked' />"
    );

    let unticked = form_with("agree", FieldDefinition::checkbox("Agree"), &[]);
    assert_eq!(
        render::field(unticked.field("agree").unwrap(), "").into_string(),
        "<input type='checkbox' name='agree' id='agree' value='' />"
    );
}

#[test]
fn test_radio_group() {
    let definition = FieldDefinition::radio("Size")
        .with_default("m")
        .with_option("Small", "s")
        .with_option("Medium", "m");
    let form = form_with("size", definition, &[]);

    assert_eq!(
        render::field(form.field("size").unwrap(), "").into_string(),
        "<label><input type='radio' name='size' value='s'/> Small</label><br />\
         <label><input type='radio' name='size' value='m' checked='checked'/> Medium</label><br />"
    );
}

#[test]
fn test_radio_group_with_attrs() {
    let definition = FieldDefinition::radio("Size").with_option("Small", "s");
    let form = form_with("size", definition, &[("size", "s")]);

    assert_eq!(
        render::field(form.field("size").unwrap(), "class='r'").into_string(),
        "<label><input type='radio' name='size' value='s' class='r' checked='checked'/>\
         \x20Small</label><br />"
    );
}

#[test]
fn test_select() {
    let form = form_with("colour", colours(), &[("colour", "blue")]);

    assert_eq!(
        render::field(form.field("colour").unwrap(), "class='pick'").into_string(),
        "<select name='colour' class='pick'>\
         <option value='red'>Red</option>\
         <option value='blue' selected='selected'>Blue</option>\
         </select>"
    );
}

#[test]
fn test_textarea_falls_back_to_default() {
    let form = form_with("bio", FieldDefinition::textarea("Bio").with_default("Tell us"), &[]);
    assert_eq!(
        render::field(form.field("bio").unwrap(), "rows='4'").into_string(),
        "<textarea name='bio' rows='4'>Tell us</textarea>"
    );

    let form = form_with("bio", FieldDefinition::textarea("Bio"), &[("bio", "Mmm, donuts")]);
    assert_eq!(
        render::field(form.field("bio").unwrap(), "").into_string(),
        "<textarea name='bio'>Mmm, donuts</textarea>"
    );
}

#[test]
fn test_row_with_feedback() {
    let definition =
        FieldDefinition::text("Email").with_validator(Validator::min_length(6, "too short"));
    let mut form = form_with("email", definition, &[("email", "ab")]);
    form.validate().unwrap();
    let field = form.field("email").unwrap();

    assert_eq!(
        render::row(field, "").into_string(),
        "<tr><td colspan='2'><span style='color:#ff3300'>too short</span></td></tr>\
         <tr><td>Email</td><td><input type='text' name='email' id='email' value='ab' /></td></tr>"
    );
    assert_eq!(
        render::feedback_block(field).into_string(),
        "<div class='feedback'>too short</div>"
    );
}

#[test]
fn test_row_without_feedback() {
    let form = form_with("agree", FieldDefinition::checkbox("Agree").with_default("1"), &[]);
    let field = form.field("agree").unwrap();

    assert_eq!(
        render::row(field, "").into_string(),
        "<tr><td><label for='agree'>Agree</label></td>\
         <td><input type='checkbox' name='agree' id='agree' value='1' /></td></tr>"
    );
    assert_eq!(render::feedback_block(field).into_string(), "");
}

#[test]
fn test_form_wrapper() {
    let form = form_with("q", FieldDefinition::text("Search"), &[]);

    let html = FormRenderer::new("/search")
        .method("GET")
        .name("search")
        .attrs("class='inline'")
        .field_attrs("q", "placeholder='Find'")
        .submit(Submit::button("Go").with_class("btn"))
        .render(&form)
        .into_string();

    assert_eq!(
        html,
        "<form action='/search' method='GET' name='search' id='search' class='inline'>\
         <table>\
         <tr><td>Search</td>\
         <td><input type='text' name='q' id='q' value='' placeholder='Find' /></td></tr>\
         <tr><td colspan='2'><input type='submit' value='Go' class='btn' /></td></tr>\
         </table></form>"
    );
}

#[test]
fn test_multipart_when_form_has_file_field() {
    let form = form_with("avatar", FieldDefinition::file("Avatar"), &[]);

    let open = FormRenderer::new("/upload").open(&form).into_string();
    assert_eq!(open, "<form action='/upload' method='POST' enctype='multipart/form-data'>");

    let forced_off = FormRenderer::new("/upload").multipart(false).open(&form).into_string();
    assert_eq!(forced_off, "<form action='/upload' method='POST'>");
}

#[test]
fn test_rendering_skips_undefined_order_entries() {
    let mut definitions = HashMap::new();
    definitions.insert("q".to_string(), FieldDefinition::text("Search"));
    let order = vec!["ghost".into(), "q".into()];
    let form = FormState::new(definitions, &Submission::new(), order).unwrap();

    let html = FormRenderer::new("/s")
        .submit(Submit::image("/go.png", "Go"))
        .render(&form)
        .into_string();

    assert!(!html.contains("ghost"));
    assert!(html.contains("<tr><td>Search</td>"));
    assert!(html.contains("<input type='image' src='/go.png' alt='Go' />"));
}
