// File: src/submission.rs
// Purpose: Already-decoded submitted values, keyed by field name

use std::collections::HashMap;

use serde_json::Value as JsonValue;

/// Submitted form values
///
/// Transport and body decoding happen elsewhere; this only holds the
/// resulting name to value mapping. Values are stored exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    values: HashMap<String, String>,
}

impl Submission {
    /// Nothing submitted
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from decoded form fields
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { values: fields }
    }

    /// Create from a decoded JSON object
    ///
    /// Strings are kept verbatim and other scalars stringified. `true` becomes
    /// `"1"` so a ticked checkbox reads as submitted; `false` and `null` are
    /// dropped so they read as not submitted. Anything but an object yields
    /// an empty submission.
    pub fn from_json(json: &JsonValue) -> Self {
        let mut values = HashMap::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                let text = match value {
                    JsonValue::String(s) => s.clone(),
                    JsonValue::Bool(true) => "1".to_string(),
                    JsonValue::Bool(false) | JsonValue::Null => continue,
                    other => other.to_string(),
                };
                values.insert(key.clone(), text);
            }
        }

        Self { values }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl AsRef<str>) -> Option<String> {
        self.values.insert(name.into(), value.as_ref().to_string())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Present with a non-empty value. An empty string counts the same as
    /// never having been submitted.
    pub fn is_truthy(&self, name: &str) -> bool {
        self.non_empty(name).is_some()
    }

    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for Submission {
    fn from(fields: HashMap<String, String>) -> Self {
        Self::from_fields(fields)
    }
}

impl<K, V> FromIterator<(K, V)> for Submission
where
    K: Into<String>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_fields_keeps_values_verbatim() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "  Homer  ".to_string());
        fields.insert("bio".to_string(), "".to_string());
        fields.insert("blank".to_string(), " ".to_string());

        let submission = Submission::from_fields(fields);

        assert_eq!(submission.get("name"), Some("  Homer  "));
        assert!(submission.is_truthy("blank"));
        assert_eq!(submission.get("bio"), Some(""));
        assert!(submission.has("bio"));
        assert!(!submission.is_truthy("bio"));
        assert!(submission.is_truthy("name"));
        assert!(!submission.is_truthy("missing"));
    }

    #[test]
    fn test_from_json() {
        let submission = Submission::from_json(&json!({
            "email": " a@b.com ",
            "age": 42,
            "newsletter": true,
            "terms": false,
            "nickname": null
        }));

        assert_eq!(submission.get("email"), Some(" a@b.com "));
        assert_eq!(submission.get("age"), Some("42"));
        assert_eq!(submission.get("newsletter"), Some("1"));
        assert!(!submission.has("terms"));
        assert!(!submission.has("nickname"));
        assert_eq!(submission.len(), 3);
    }

    #[test]
    fn test_from_json_non_object() {
        assert!(Submission::from_json(&json!(["a", "b"])).is_empty());
    }

    #[test]
    fn test_collect_from_pairs() {
        let submission: Submission = [("email", "ab"), ("name", " Bart ")].into_iter().collect();
        assert_eq!(submission.get("email"), Some("ab"));
        assert_eq!(submission.get("name"), Some(" Bart "));

        let mut submission = submission;
        submission.insert("name", "\tLisa\n");
        assert_eq!(submission.get("name"), Some("\tLisa\n"));
    }
}
