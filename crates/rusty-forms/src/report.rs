// File: src/report.rs
// Purpose: Explicit result of one validation pass

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::field::FieldOutcome;

/// What one `FormState::validate` call found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    is_valid: bool,
    outcomes: BTreeMap<String, FieldOutcome>,
    values: HashMap<String, String>,
}

impl ValidationReport {
    pub(crate) fn new() -> Self {
        Self {
            is_valid: true,
            outcomes: BTreeMap::new(),
            values: HashMap::new(),
        }
    }

    pub(crate) fn record(&mut self, name: &str, value: &str, outcome: FieldOutcome) {
        if outcome.valid {
            self.values.insert(name.to_string(), value.to_string());
        } else {
            self.is_valid = false;
        }
        self.outcomes.insert(name.to_string(), outcome);
    }

    /// False when any validator of any field rejected its value
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Values of the fields that passed every validator
    pub fn valid_values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn into_valid_values(self) -> HashMap<String, String> {
        self.values
    }

    pub fn outcome(&self, name: &str) -> Option<&FieldOutcome> {
        self.outcomes.get(name)
    }

    /// Per-field outcomes, sorted by name
    pub fn outcomes(&self) -> &BTreeMap<String, FieldOutcome> {
        &self.outcomes
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.valid)
            .map(|(name, _)| name.as_str())
    }
}
