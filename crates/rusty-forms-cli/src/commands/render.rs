use std::path::Path;

use anyhow::Result;
use rusty_forms::{FormsConfig, PredicateRegistry, Submission};

use super::{load_config, read_submission};

pub fn execute(
    config_path: &Path,
    form_name: &str,
    data: Option<&Path>,
    validate: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let submission = match data {
        Some(path) => read_submission(path)?,
        None => Submission::new(),
    };

    println!("{}", render_form(&config, form_name, &submission, validate)?);
    Ok(())
}

pub fn render_form(
    config: &FormsConfig,
    form_name: &str,
    submission: &Submission,
    validate: bool,
) -> Result<String> {
    let declared = config.form(form_name)?;
    let mut form = declared.build(submission, &PredicateRegistry::new())?;

    if validate {
        let report = form.validate()?;
        tracing::debug!(
            form = form_name,
            valid = report.is_valid(),
            "validated before rendering"
        );
    }

    Ok(declared.renderer(&config.render).render(&form).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{parse_submission, TEST_FORMS};

    #[test]
    fn test_render_with_feedback() {
        let config: FormsConfig = toml::from_str(TEST_FORMS).unwrap();
        let submission = parse_submission(r#"{"email": "nope"}"#).unwrap();

        let plain = render_form(&config, "contact", &submission, false).unwrap();
        assert!(!plain.contains("Please enter a valid email"));

        let validated = render_form(&config, "contact", &submission, true).unwrap();
        assert!(
            validated.contains("<span style='color:#ff3300'>Please enter a valid email</span>")
        );
        assert!(validated.contains("<input type='text' name='email' id='email' value='nope' />"));
        assert!(validated.contains("<textarea name='message'></textarea>"));
    }
}
