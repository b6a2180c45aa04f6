//! rusty-forms validation engine
//!
//! A [`Validator`] is one reusable rule that accepts or rejects a single
//! string value and carries the message shown to the user when it rejects.
//! Rules are a closed set ([`Rule`]): email shape, minimum and maximum
//! length, regex search, and a caller-supplied [`Predicate`].
//!
//! Validators are immutable once built and are `Send + Sync`, so one
//! instance can back any number of fields across concurrent requests.
//!
//! ```
//! use rusty_forms_validation::Validator;
//!
//! let min = Validator::min_length(6, "too short");
//! assert!(!min.validate("ab").unwrap());
//!
//! let zip = Validator::regex(r"^\d{5}$", "Five digits please").unwrap().optional();
//! assert!(zip.validate("").unwrap());
//! ```

pub mod config;
pub mod email;
pub mod error;
pub mod string;
pub mod validator;

pub use config::{PredicateRegistry, ValidatorConfig};
pub use email::is_well_formed_email;
pub use error::{Result, ValidatorError};
pub use string::{char_length, matches_pattern, meets_min_length, within_max_length};
pub use validator::{Predicate, Rule, Validator, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
