//! Declarative validator configuration
//!
//! Validators declared in data (TOML, JSON) deserialize into
//! [`ValidatorConfig`] and are turned into [`Validator`]s with
//! [`ValidatorConfig::build`]. Predicates cannot be written in data, so a
//! `predicate` entry names one registered in a [`PredicateRegistry`].

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::error::{Result, ValidatorError};
use crate::validator::{Predicate, Rule, Validator, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

/// One validator as declared in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidatorConfig {
    Email {
        feedback: String,
        #[serde(default)]
        optional: bool,
    },
    MinLength {
        #[serde(default = "default_min")]
        min: usize,
        feedback: String,
        #[serde(default)]
        optional: bool,
    },
    MaxLength {
        #[serde(default = "default_max")]
        max: usize,
        feedback: String,
        #[serde(default)]
        optional: bool,
    },
    Regex {
        pattern: String,
        feedback: String,
        #[serde(default)]
        optional: bool,
    },
    Predicate {
        name: String,
        feedback: String,
        #[serde(default)]
        optional: bool,
    },
}

fn default_min() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_max() -> usize {
    DEFAULT_MAX_LENGTH
}

impl ValidatorConfig {
    /// Builds the validator, compiling patterns and resolving predicates.
    pub fn build(&self, registry: &PredicateRegistry) -> Result<Validator> {
        let (validator, optional) = match self {
            ValidatorConfig::Email { feedback, optional } => {
                (Validator::email(feedback.as_str()), *optional)
            }
            ValidatorConfig::MinLength { min, feedback, optional } => {
                (Validator::min_length(*min, feedback.as_str()), *optional)
            }
            ValidatorConfig::MaxLength { max, feedback, optional } => {
                (Validator::max_length(*max, feedback.as_str()), *optional)
            }
            ValidatorConfig::Regex { pattern, feedback, optional } => {
                (Validator::regex(pattern, feedback.as_str())?, *optional)
            }
            ValidatorConfig::Predicate { name, feedback, optional } => {
                let predicate = registry.get(name).ok_or_else(|| {
                    tracing::warn!(predicate = %name, "validator names an unregistered predicate");
                    ValidatorError::UnknownPredicate(name.clone())
                })?;
                let rule = Rule::UserDefinedPredicate(predicate.clone());
                (Validator::new(rule, feedback.as_str()), *optional)
            }
        };

        Ok(if optional { validator.optional() } else { validator })
    }
}

/// Named predicates available to declarative validators
#[derive(Clone, Default)]
pub struct PredicateRegistry {
    predicates: HashMap<String, Predicate>,
}

impl PredicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.predicates.insert(name.into(), Predicate::new(f));
        self
    }

    pub fn register_fallible<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&str) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        self.predicates.insert(name.into(), Predicate::fallible(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.predicates.keys().collect();
        names.sort();
        f.debug_struct("PredicateRegistry").field("predicates", &names).finish()
    }
}
