//! # Validation Outcome Types
//!
//! This module provides the result types for a title validation run.
//!
//! A single invocation of the engine produces exactly one
//! [`ValidationOutcome`]: either every rule passed, or one specific rule
//! failed and carries enough detail to render a precise user-facing message.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;

/// A specific rule failure, carrying the offending value and the violated
/// threshold or pattern.
///
/// The `Display` implementation renders the message surfaced to the end
/// user, naming the rule that failed and the configured limit so the title
/// can be corrected without consulting logs.
///
/// # Examples
///
/// ```
/// use title_sentinel_core::outcome::RuleViolation;
///
/// let violation = RuleViolation::TooShort {
///     title: "ab".to_string(),
///     length: 2,
///     min_length: 5,
/// };
///
/// assert_eq!(
///     violation.to_string(),
///     "Pull request title \"ab\" is smaller than min length specified - 5"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleViolation {
    /// The event body carried neither an issue title nor a pull request title
    NoTitle,

    /// The title did not contain a match for the configured pattern
    PatternMismatch {
        /// The title that was validated
        title: String,
        /// The pattern the title failed to match
        pattern: String,
    },

    /// The title is shorter than the configured minimum length
    TooShort {
        /// The title that was validated
        title: String,
        /// The measured title length, in characters
        length: usize,
        /// The configured minimum length
        min_length: usize,
    },

    /// The title is longer than the configured maximum length
    TooLong {
        /// The title that was validated
        title: String,
        /// The measured title length, in characters
        length: usize,
        /// The configured maximum length
        max_length: usize,
    },

    /// The title does not start with any of the allowed prefixes
    PrefixMismatch {
        /// The title that was validated
        title: String,
        /// The prefixes the title was checked against
        allowed_prefixes: Vec<String>,
    },
}

impl RuleViolation {
    /// Short identifier of the gate that produced this violation. Used as a
    /// log field.
    pub fn rule(&self) -> &'static str {
        match self {
            RuleViolation::NoTitle => "title-extraction",
            RuleViolation::PatternMismatch { .. } => "pattern",
            RuleViolation::TooShort { .. } => "min-length",
            RuleViolation::TooLong { .. } => "max-length",
            RuleViolation::PrefixMismatch { .. } => "prefix",
        }
    }
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleViolation::NoTitle => {
                write!(
                    f,
                    "Event payload does not contain an issue or pull request title"
                )
            }
            RuleViolation::PatternMismatch { title, pattern } => {
                write!(
                    f,
                    "Pull request title \"{}\" failed to pass match regex - {}",
                    title, pattern
                )
            }
            RuleViolation::TooShort {
                title, min_length, ..
            } => {
                write!(
                    f,
                    "Pull request title \"{}\" is smaller than min length specified - {}",
                    title, min_length
                )
            }
            RuleViolation::TooLong {
                title, max_length, ..
            } => {
                write!(
                    f,
                    "Pull request title \"{}\" is greater than max length specified - {}",
                    title, max_length
                )
            }
            RuleViolation::PrefixMismatch {
                title,
                allowed_prefixes,
            } => {
                write!(
                    f,
                    "Pull request title \"{}\" did not match any of the prefixes - {}",
                    title,
                    allowed_prefixes.join(",")
                )
            }
        }
    }
}

/// The terminal result of one validation invocation.
///
/// # Examples
///
/// ## Passing outcome
/// ```
/// use title_sentinel_core::outcome::ValidationOutcome;
///
/// let outcome = ValidationOutcome::pass();
/// assert!(outcome.is_pass());
/// assert!(outcome.violation().is_none());
/// ```
///
/// ## Failing outcome
/// ```
/// use title_sentinel_core::outcome::{RuleViolation, ValidationOutcome};
///
/// let outcome = ValidationOutcome::fail(RuleViolation::NoTitle);
/// assert!(!outcome.is_pass());
/// assert!(outcome.failure_message().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// Every gate passed
    Pass,

    /// A gate failed; carries the specific violation
    Fail(RuleViolation),
}

impl ValidationOutcome {
    /// Creates a passing outcome.
    pub fn pass() -> Self {
        ValidationOutcome::Pass
    }

    /// Creates a failing outcome for the given violation.
    pub fn fail(violation: RuleViolation) -> Self {
        ValidationOutcome::Fail(violation)
    }

    /// Whether the validation passed.
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationOutcome::Pass)
    }

    /// The violation behind a failing outcome, if any.
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            ValidationOutcome::Pass => None,
            ValidationOutcome::Fail(violation) => Some(violation),
        }
    }

    /// The user-facing failure message, if the validation failed.
    pub fn failure_message(&self) -> Option<String> {
        self.violation().map(|violation| violation.to_string())
    }
}
