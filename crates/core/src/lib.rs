//! # Title Sentinel Core
//!
//! Core rule engine for validating pull request and issue titles against
//! configurable rules.
//!
//! Title Sentinel helps enforce consistent title practices by validating:
//! - The title contains a match for a configured regex
//! - The title length falls within configured bounds
//! - The title starts with one of a set of allowed prefixes
//!
//! The engine is a pure function of its inputs: it performs no I/O, holds no
//! state across invocations, and always produces the same outcome for the
//! same `(payload, configuration)` pair. Rules run in a fixed order and the
//! first failing rule ends the run.
//!
//! ## Example Usage
//!
//! ```rust
//! use title_sentinel_core::config::ValidationConfig;
//! use title_sentinel_core::models::{EventPayload, PullRequest};
//! use title_sentinel_core::TitleSentinel;
//!
//! let config = ValidationConfig {
//!     pattern: r"^(feat|fix|chore):".to_string(),
//!     min_length: 5,
//!     ..ValidationConfig::default()
//! };
//!
//! let sentinel = TitleSentinel::new(config).expect("pattern should compile");
//!
//! let payload = EventPayload {
//!     issue: None,
//!     pull_request: Some(PullRequest {
//!         number: Some(123),
//!         title: "feat: add login".to_string(),
//!     }),
//! };
//!
//! let outcome = sentinel.validate(&payload);
//! assert!(outcome.is_pass());
//! ```

use indoc::formatdoc;
use regex::Regex;
use tracing::{debug, info, instrument};

pub mod checks;
pub mod config;
use config::ValidationConfig;

pub mod errors;
use errors::TitleSentinelError;

pub mod models;
use models::EventPayload;

pub mod outcome;
pub use outcome::{RuleViolation, ValidationOutcome};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Main struct for validating pull request and issue titles.
///
/// `TitleSentinel` holds the typed rule configuration and the compiled
/// pattern, and evaluates event payloads against them. Construction fails
/// when the configured pattern does not compile, so a malformed pattern is
/// reported as a configuration error rather than a title failure.
///
/// # Examples
///
/// ```rust
/// use title_sentinel_core::config::ValidationConfig;
/// use title_sentinel_core::models::EventPayload;
/// use title_sentinel_core::TitleSentinel;
///
/// let sentinel = TitleSentinel::new(ValidationConfig::default()).unwrap();
///
/// // An empty payload has no title to validate.
/// let outcome = sentinel.validate(&EventPayload::default());
/// assert!(!outcome.is_pass());
/// ```
#[derive(Debug)]
pub struct TitleSentinel {
    config: ValidationConfig,
    pattern: Regex,
}

impl TitleSentinel {
    /// Creates a new engine from the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The typed rule configuration
    ///
    /// # Returns
    ///
    /// A `Result` with the engine, or `TitleSentinelError::InvalidPattern`
    /// when the configured pattern fails to compile.
    pub fn new(config: ValidationConfig) -> Result<Self, TitleSentinelError> {
        let pattern = Regex::new(&config.pattern)?;
        Ok(Self { config, pattern })
    }

    /// The configuration this engine enforces.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Checks if the title contains a match for the configured pattern.
    ///
    /// This is a wrapper around the `checks::pattern::check_title_pattern`
    /// function.
    #[instrument]
    fn check_pattern(&self, title: &str) -> bool {
        debug!(title, pattern = %self.pattern, "Checking title pattern");
        checks::pattern::check_title_pattern(title, &self.pattern)
    }

    /// Checks if the title meets the configured minimum length.
    #[instrument]
    fn check_min_length(&self, title: &str) -> bool {
        debug!(
            title,
            min_length = self.config.min_length,
            "Checking title minimum length"
        );
        checks::length::check_min_length(title, self.config.min_length)
    }

    /// Checks if the title stays within the configured maximum length.
    #[instrument]
    fn check_max_length(&self, title: &str) -> bool {
        debug!(
            title,
            max_length = self.config.max_length,
            "Checking title maximum length"
        );
        checks::length::check_max_length(title, self.config.max_length)
    }

    /// Checks if the title starts with one of the allowed prefixes.
    #[instrument]
    fn check_prefix(&self, title: &str) -> bool {
        debug!(
            title,
            prefixes = ?self.config.allowed_prefixes,
            case_sensitive = self.config.prefix_case_sensitive,
            "Checking title prefix"
        );
        checks::prefix::check_title_prefix(
            title,
            &self.config.allowed_prefixes,
            self.config.prefix_case_sensitive,
        )
    }

    /// Validates the title carried by the given event payload.
    ///
    /// The gates run in a fixed order and the first failure ends the run:
    /// title extraction, pattern, minimum length, maximum length, prefix.
    /// A payload without a usable title fails before any rule is evaluated.
    ///
    /// # Arguments
    ///
    /// * `payload` - The triggering event's body
    ///
    /// # Returns
    ///
    /// The single [`ValidationOutcome`] for this invocation.
    #[instrument]
    pub fn validate(&self, payload: &EventPayload) -> ValidationOutcome {
        let Some(title) = payload.title() else {
            return ValidationOutcome::fail(RuleViolation::NoTitle);
        };

        if !self.check_pattern(title) {
            return ValidationOutcome::fail(RuleViolation::PatternMismatch {
                title: title.to_string(),
                pattern: self.config.pattern.clone(),
            });
        }

        if !self.check_min_length(title) {
            return ValidationOutcome::fail(RuleViolation::TooShort {
                title: title.to_string(),
                length: checks::length::title_length(title),
                min_length: self.config.min_length,
            });
        }

        if !self.check_max_length(title) {
            return ValidationOutcome::fail(RuleViolation::TooLong {
                title: title.to_string(),
                length: checks::length::title_length(title),
                max_length: self.config.max_length,
            });
        }

        if !self.check_prefix(title) {
            return ValidationOutcome::fail(RuleViolation::PrefixMismatch {
                title: title.to_string(),
                allowed_prefixes: self.config.allowed_prefixes.clone(),
            });
        }

        info!(title, "Title passed all validation rules");
        ValidationOutcome::pass()
    }
}

/// Validates the title carried by `payload` against `config`.
///
/// Convenience form of the engine: compiles the configuration, runs the
/// pipeline once, and returns the outcome.
///
/// # Arguments
///
/// * `payload` - The triggering event's body
/// * `config` - The typed rule configuration
///
/// # Returns
///
/// The validation outcome, or `TitleSentinelError::InvalidPattern` when the
/// configured pattern fails to compile.
///
/// # Examples
///
/// ```rust
/// use title_sentinel_core::config::ValidationConfig;
/// use title_sentinel_core::models::EventPayload;
/// use title_sentinel_core::{validate, RuleViolation, ValidationOutcome};
///
/// let outcome = validate(&EventPayload::default(), &ValidationConfig::default()).unwrap();
/// assert_eq!(outcome, ValidationOutcome::Fail(RuleViolation::NoTitle));
/// ```
pub fn validate(
    payload: &EventPayload,
    config: &ValidationConfig,
) -> Result<ValidationOutcome, TitleSentinelError> {
    let sentinel = TitleSentinel::new(config.clone())?;
    Ok(sentinel.validate(payload))
}

/// Builds the multi-line remediation message shown to the user when a rule
/// fails.
///
/// Names the failed rule and the active configuration so the title can be
/// corrected without consulting logs.
pub fn failure_guidance(violation: &RuleViolation, config: &ValidationConfig) -> String {
    let requirement = match violation {
        RuleViolation::NoTitle => {
            "The triggering event must carry an issue or a pull request with a non-empty title."
                .to_string()
        }
        RuleViolation::PatternMismatch { pattern, .. } => {
            format!("The title must contain a match for the pattern `{pattern}`.")
        }
        RuleViolation::TooShort {
            length, min_length, ..
        } => {
            format!("The title must be at least {min_length} characters long; it has {length}.")
        }
        RuleViolation::TooLong {
            length, max_length, ..
        } => {
            format!("The title must be at most {max_length} characters long; it has {length}.")
        }
        RuleViolation::PrefixMismatch { .. } => {
            let sensitivity = if config.prefix_case_sensitive {
                "case-sensitive"
            } else {
                "case-insensitive"
            };
            format!(
                "The title must start with one of the allowed prefixes ({sensitivity}): {}",
                config.allowed_prefixes.join(", ")
            )
        }
    };

    formatdoc!(
        "The pull request title needs correction:

        {violation}
        - {requirement}

        Please update the title and run the check again.",
        violation = violation,
        requirement = requirement
    )
}
