pub mod render;
pub mod validate;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rusty_forms::{FormsConfig, Submission};

/// Load the config, refusing a missing file since every command needs a form
pub fn load_config(path: &Path) -> Result<FormsConfig> {
    if !path.exists() {
        bail!("Forms config not found: {:?}", path);
    }
    FormsConfig::load(path)
}

/// Read a submission from a JSON file holding one object
pub fn read_submission(path: &Path) -> Result<Submission> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read submission: {:?}", path))?;
    parse_submission(&content).with_context(|| format!("Failed to parse submission: {:?}", path))
}

pub fn parse_submission(content: &str) -> Result<Submission> {
    let json: serde_json::Value = serde_json::from_str(content)?;
    if !json.is_object() {
        bail!("Submission must be a JSON object of field names to values");
    }
    Ok(Submission::from_json(&json))
}

#[cfg(test)]
pub(crate) const TEST_FORMS: &str = r#"
[forms.contact]
action = "/contact"
order = ["email", "message"]

[forms.contact.fields.email]
label = "Email"

[[forms.contact.fields.email.validators]]
kind = "email"
feedback = "Please enter a valid email"

[forms.contact.fields.message]
label = "Message"
type = "textarea"

[[forms.contact.fields.message.validators]]
kind = "max_length"
max = 10
feedback = "keep it short"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission() {
        let submission = parse_submission(r#"{"email": "a@b.com", "subscribe": true}"#).unwrap();
        assert_eq!(submission.get("email"), Some("a@b.com"));
        assert_eq!(submission.get("subscribe"), Some("1"));
    }

    #[test]
    fn test_parse_submission_rejects_non_objects() {
        assert!(parse_submission("[1, 2]").is_err());
        assert!(parse_submission("not json").is_err());
    }

    #[test]
    fn test_missing_config_is_an_error() {
        assert!(load_config(Path::new("no/such/forms.toml")).is_err());
    }
}
