//! Coercion of raw string inputs into typed rule values.
//!
//! The hosting environment delivers every rule setting as a string. All
//! parsing lives here so the core engine only ever sees typed values and so
//! edge-case configurations can be built directly in tests.

use crate::errors::CliError;

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;

/// Parses the minimum length input.
///
/// An absent or empty input means the rule is disabled (`0`). A present but
/// unparsable or negative value is an argument error.
pub fn parse_min_length(raw: Option<&str>) -> Result<usize, CliError> {
    match raw {
        None => Ok(0),
        Some(value) if value.is_empty() => Ok(0),
        Some(value) => value.parse::<usize>().map_err(|_| {
            CliError::InvalidArguments(format!(
                "min_length must be a non-negative integer, got \"{}\"",
                value
            ))
        }),
    }
}

/// Parses the maximum length input.
///
/// An absent or empty input means unbounded (`0`); so does any non-positive
/// value. A present but unparsable value is an argument error.
pub fn parse_max_length(raw: Option<&str>) -> Result<usize, CliError> {
    match raw {
        None => Ok(0),
        Some(value) if value.is_empty() => Ok(0),
        Some(value) => {
            let parsed = value.parse::<i64>().map_err(|_| {
                CliError::InvalidArguments(format!(
                    "max_length must be an integer, got \"{}\"",
                    value
                ))
            })?;
            if parsed <= 0 {
                Ok(0)
            } else {
                Ok(parsed as usize)
            }
        }
    }
}

/// Splits the comma-delimited prefix list.
///
/// Segments are not trimmed; empty segments are dropped. An empty prefix
/// would match every title.
pub fn parse_allowed_prefixes(raw: Option<&str>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(value) => value
            .split(',')
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_string())
            .collect(),
    }
}

/// Parses the prefix case-sensitivity flag. Only the literal string `true`
/// enables case-sensitive comparison.
pub fn parse_prefix_case_sensitive(raw: Option<&str>) -> bool {
    raw == Some("true")
}
