//! Validator rules and the `Validator` type

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::email::is_well_formed_email;
use crate::error::{Result, ValidatorError};
use crate::string::{matches_pattern, meets_min_length, within_max_length};

/// Minimum length used when a declaration leaves it out
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Maximum length used when a declaration leaves it out
pub const DEFAULT_MAX_LENGTH: usize = 30;

type PredicateFn = dyn Fn(&str) -> anyhow::Result<bool> + Send + Sync;

/// Caller-supplied rule, shared behind an `Arc`
///
/// Predicates may block (a uniqueness lookup, say). The engine calls them
/// synchronously and imposes no timeout.
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(move |input: &str| Ok(f(input))))
    }

    /// A predicate that can fail outright; failures surface as
    /// [`ValidatorError::Predicate`], never as user feedback.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, input: &str) -> anyhow::Result<bool> {
        (self.0)(input)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// The closed set of validator kinds, each carrying only its own parameter
#[derive(Debug, Clone)]
pub enum Rule {
    WellFormedEmail,
    MinStrLength(usize),
    MaxStrLength(usize),
    RegexMatch(Regex),
    UserDefinedPredicate(Predicate),
}

impl Rule {
    /// Short kind name, matching the `kind` key of declarative configs
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::WellFormedEmail => "email",
            Rule::MinStrLength(_) => "min_length",
            Rule::MaxStrLength(_) => "max_length",
            Rule::RegexMatch(_) => "regex",
            Rule::UserDefinedPredicate(_) => "predicate",
        }
    }

    fn check(&self, input: &str) -> anyhow::Result<bool> {
        let verdict = match self {
            Rule::WellFormedEmail => is_well_formed_email(input),
            Rule::MinStrLength(min) => meets_min_length(input, *min),
            Rule::MaxStrLength(max) => within_max_length(input, *max),
            Rule::RegexMatch(pattern) => matches_pattern(input, pattern),
            Rule::UserDefinedPredicate(predicate) => return predicate.call(input),
        };
        Ok(verdict)
    }
}

/// One reusable rule plus the message shown when it rejects a value
#[derive(Debug, Clone)]
pub struct Validator {
    rule: Rule,
    feedback: String,
    optional: bool,
}

impl Validator {
    pub fn new(rule: Rule, feedback: impl Into<String>) -> Self {
        Self {
            rule,
            feedback: feedback.into(),
            optional: false,
        }
    }

    pub fn email(feedback: impl Into<String>) -> Self {
        Self::new(Rule::WellFormedEmail, feedback)
    }

    pub fn min_length(min: usize, feedback: impl Into<String>) -> Self {
        Self::new(Rule::MinStrLength(min), feedback)
    }

    pub fn max_length(max: usize, feedback: impl Into<String>) -> Self {
        Self::new(Rule::MaxStrLength(max), feedback)
    }

    /// Compiles `pattern` now so a malformed pattern fails here and not
    /// halfway through a request.
    pub fn regex(pattern: &str, feedback: impl Into<String>) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| ValidatorError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::new(Rule::RegexMatch(compiled), feedback))
    }

    pub fn predicate<F>(f: F, feedback: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(Rule::UserDefinedPredicate(Predicate::new(f)), feedback)
    }

    pub fn try_predicate<F>(f: F, feedback: impl Into<String>) -> Self
    where
        F: Fn(&str) -> anyhow::Result<bool> + Send + Sync + 'static,
    {
        Self::new(Rule::UserDefinedPredicate(Predicate::fallible(f)), feedback)
    }

    /// Accept empty input without evaluating the rule
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns whether `input` is acceptable.
    ///
    /// `Err` only comes from a fallible predicate; every other rule is a
    /// pure function of `input`.
    pub fn validate(&self, input: &str) -> Result<bool> {
        if self.optional && input.is_empty() {
            return Ok(true);
        }

        self.rule
            .check(input)
            .map_err(|source| ValidatorError::Predicate {
                feedback: self.feedback.clone(),
                source,
            })
    }
}
