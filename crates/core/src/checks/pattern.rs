//! # Pattern Validation
//!
//! This module provides functionality for validating titles against a
//! configured regular expression.
//!
//! The match is a partial match: the title passes when it contains a match
//! for the pattern anywhere in the string. A pattern that wants full-string
//! semantics must anchor itself with `^` and `$`.

use regex::Regex;

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;

/// Validates that the title contains a match for the given pattern.
///
/// The pattern is compiled by the engine once per configuration, so a
/// malformed pattern is reported as a configuration error before any title
/// reaches this check.
///
/// # Arguments
///
/// * `title` - The title to validate
/// * `pattern` - The compiled pattern to match against
///
/// # Returns
///
/// `true` when the title contains a match for the pattern
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use title_sentinel_core::checks::pattern::check_title_pattern;
///
/// let pattern = Regex::new(r"^(feat|fix|chore):").unwrap();
///
/// assert!(check_title_pattern("feat: add login", &pattern));
/// assert!(!check_title_pattern("add login", &pattern));
/// ```
pub fn check_title_pattern(title: &str, pattern: &Regex) -> bool {
    pattern.is_match(title)
}
