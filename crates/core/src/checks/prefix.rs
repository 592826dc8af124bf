//! # Prefix Validation
//!
//! This module provides functionality for validating that a title starts
//! with one of a configured set of literal prefixes.
//!
//! The check is a logical OR across the list: matching any one prefix is
//! enough. An empty list disables the rule entirely.

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;

/// Validates that the title starts with at least one of the allowed prefixes.
///
/// When `case_sensitive` is `false`, both the title and each prefix are
/// lowercased before comparison.
///
/// # Arguments
///
/// * `title` - The title to validate
/// * `allowed_prefixes` - The prefixes the title may start with
/// * `case_sensitive` - Whether the comparison respects letter case
///
/// # Returns
///
/// `true` when the prefix list is empty or the title starts with one of the
/// prefixes
///
/// # Examples
///
/// ```
/// use title_sentinel_core::checks::prefix::check_title_prefix;
///
/// let prefixes = vec!["feat:".to_string(), "fix:".to_string()];
///
/// assert!(check_title_prefix("feat: add login", &prefixes, true));
/// assert!(check_title_prefix("Fix: typo", &prefixes, false));
/// assert!(!check_title_prefix("Fix: typo", &prefixes, true));
/// ```
pub fn check_title_prefix(title: &str, allowed_prefixes: &[String], case_sensitive: bool) -> bool {
    if allowed_prefixes.is_empty() {
        return true;
    }

    allowed_prefixes
        .iter()
        .any(|prefix| has_prefix(title, prefix, case_sensitive))
}

/// Checks a single prefix, normalizing both sides when the comparison is
/// case-insensitive.
fn has_prefix(title: &str, prefix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        title.starts_with(prefix)
    } else {
        title.to_lowercase().starts_with(&prefix.to_lowercase())
    }
}
