//! The `check` command: validate the title carried by a triggering event.
//!
//! This is the entry point the hosting platform runs once per event. The
//! event body arrives as a JSON file, the rule settings arrive as raw string
//! inputs (flags or `INPUT_*` environment variables), and an optional TOML
//! file can provide the base configuration with inputs overriding per field.

use clap::Args;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use title_sentinel_core::config::{load_title_sentinel_config, ValidationConfig};
use title_sentinel_core::errors::ConfigLoadError;
use title_sentinel_core::models::EventPayload;
use title_sentinel_core::{failure_guidance, RuleViolation, TitleSentinel, ValidationOutcome};
use tracing::{debug, error, info, instrument};

use crate::config::get_config_path;
use crate::errors::CliError;
use crate::inputs;

#[cfg(test)]
#[path = "check_title_tests.rs"]
mod tests;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the JSON file holding the triggering event's body
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// Name of the triggering event, used for log context and failure
    /// messages
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "unknown")]
    pub event_name: String,

    /// Pattern the title must contain a match for
    #[arg(long, env = "INPUT_REGEX")]
    pub regex: Option<String>,

    /// Minimum title length in characters
    #[arg(long, env = "INPUT_MIN_LENGTH")]
    pub min_length: Option<String>,

    /// Maximum title length in characters; 0 or negative means unbounded
    #[arg(long, env = "INPUT_MAX_LENGTH")]
    pub max_length: Option<String>,

    /// Comma-separated list of prefixes the title may start with
    #[arg(long, env = "INPUT_ALLOWED_PREFIXES")]
    pub allowed_prefixes: Option<String>,

    /// Whether the prefix comparison is case-sensitive; only "true" enables
    #[arg(long, env = "INPUT_PREFIX_CASE_SENSITIVE")]
    pub prefix_case_sensitive: Option<String>,

    /// Alternate config file
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Execute the check command
#[instrument(skip(args))]
pub fn execute(args: CheckArgs) -> Result<(), CliError> {
    info!(event = %args.event_name, "Processing triggering event");

    let config = resolve_config(&args)?;
    let payload = read_event_payload(&args.event_path)?;

    if let Some(title) = payload.title() {
        info!(title, number = payload.number(), "Pull request title");
    }
    info!(pattern = %config.pattern, "Active pattern");
    info!(prefixes = ?config.allowed_prefixes, "Allowed prefixes");

    let sentinel =
        TitleSentinel::new(config).map_err(|e| CliError::ConfigError(e.to_string()))?;

    match sentinel.validate(&payload) {
        ValidationOutcome::Pass => {
            println!("Pull request title passed all checks");
            Ok(())
        }
        ValidationOutcome::Fail(violation) => {
            let message = match &violation {
                RuleViolation::NoTitle => format!("Invalid event: {}", args.event_name),
                other => other.to_string(),
            };
            error!(rule = violation.rule(), "{}", message);
            eprintln!("{}", failure_guidance(&violation, sentinel.config()));
            Err(CliError::ValidationFailed(message))
        }
    }
}

/// Builds the runtime configuration: the config file (when present) provides
/// the base, explicit inputs override per field.
fn resolve_config(args: &CheckArgs) -> Result<ValidationConfig, CliError> {
    let mut config = load_base_config(args.config.as_deref())?;

    if let Some(pattern) = &args.regex {
        config.pattern = pattern.clone();
    }
    if args.min_length.is_some() {
        config.min_length = inputs::parse_min_length(args.min_length.as_deref())?;
    }
    if args.max_length.is_some() {
        config.max_length = inputs::parse_max_length(args.max_length.as_deref())?;
    }
    if let Some(raw) = &args.allowed_prefixes {
        config.allowed_prefixes = inputs::parse_allowed_prefixes(Some(raw));
    }
    if let Some(raw) = &args.prefix_case_sensitive {
        config.prefix_case_sensitive = inputs::parse_prefix_case_sensitive(Some(raw));
    }

    Ok(config)
}

/// Loads the rule configuration file. A missing file is only an error when
/// the path was given explicitly.
fn load_base_config(path: Option<&str>) -> Result<ValidationConfig, CliError> {
    let config_path = get_config_path(path);

    match load_title_sentinel_config(&config_path) {
        Ok(file_config) => {
            debug!(path = %config_path.display(), "Loaded rule configuration file");
            Ok(file_config.to_validation_config())
        }
        Err(ConfigLoadError::NotFound(_)) if path.is_none() => {
            debug!("No rule configuration file present, using defaults");
            Ok(ValidationConfig::default())
        }
        Err(e) => Err(CliError::ConfigError(e.to_string())),
    }
}

/// Reads and parses the triggering event's body.
fn read_event_payload(path: &Path) -> Result<EventPayload, CliError> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::PayloadError(format!(
            "Failed to read event payload from {:?}: {}",
            path, e
        ))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::PayloadError(format!("Failed to parse event payload: {}", e)))
}
