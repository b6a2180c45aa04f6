//! Email shape validation

use once_cell::sync::Lazy;
use regex::Regex;

// local-part@label(.label)+
// Word characters are ASCII only; no RFC 5322 tightening.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+\-]+@[A-Za-z0-9_\-]+(?:\.[A-Za-z0-9_\-]+)+$").unwrap()
});

/// Checks the `local-part@domain(.domain)+` shape.
///
/// The local part is one or more word characters, `-`, `.` or `+`. Each
/// domain label is one or more word characters or `-`, and at least one dot
/// must follow the `@`. Empty input is rejected.
pub fn is_well_formed_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}
