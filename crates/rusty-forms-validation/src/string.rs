//! String length and pattern helpers

use regex::Regex;

/// Length in characters, so `"héllo"` counts five.
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

pub fn meets_min_length(s: &str, min: usize) -> bool {
    char_length(s) >= min
}

pub fn within_max_length(s: &str, max: usize) -> bool {
    char_length(s) <= max
}

/// Unanchored search; callers anchor with `^`/`$` when they need a full match.
pub fn matches_pattern(s: &str, pattern: &Regex) -> bool {
    pattern.is_match(s)
}
