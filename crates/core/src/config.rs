//! Configuration settings for the Title Sentinel core functionality.
//!
//! This module centralizes the typed rule configuration consumed by the
//! validation engine, and the schema-versioned TOML file format the CLI
//! reads it from.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigLoadError;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// The configuration schema version this crate understands.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// Configuration for title validation.
///
/// All fields are already coerced to their runtime types; parsing raw string
/// inputs is the caller's concern. The `Default` value is the all-permissive
/// configuration: every rule disabled, every title passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Regex source the title must contain a match for; empty matches
    /// everything
    pub pattern: String,

    /// Minimum title length in characters; `0` disables the rule
    pub min_length: usize,

    /// Maximum title length in characters; `0` means unbounded
    pub max_length: usize,

    /// Prefixes the title must start with (any one suffices); empty disables
    /// the rule
    pub allowed_prefixes: Vec<String>,

    /// Whether the prefix comparison is case-sensitive
    pub prefix_case_sensitive: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            min_length: 0,
            max_length: 0,
            allowed_prefixes: Vec::new(),
            prefix_case_sensitive: false,
        }
    }
}

/// Top-level configuration struct for title-sentinel
///
/// This is the on-disk TOML shape; [`TitleSentinelConfig::to_validation_config`]
/// converts it to the runtime [`ValidationConfig`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TitleSentinelConfig {
    /// Schema version of the configuration file
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,

    /// The title rules section
    #[serde(default)]
    pub rules: TitleRulesConfig,
}

impl TitleSentinelConfig {
    /// Convert a TitleSentinelConfig (TOML) to a ValidationConfig (runtime
    /// enforcement)
    pub fn to_validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            pattern: self.rules.pattern.clone(),
            min_length: self.rules.min_length,
            max_length: self.rules.max_length,
            allowed_prefixes: self.rules.allowed_prefixes.clone(),
            prefix_case_sensitive: self.rules.prefix_case_sensitive,
        }
    }
}

impl Default for TitleSentinelConfig {
    fn default() -> Self {
        Self {
            schema_version: SUPPORTED_SCHEMA_VERSION,
            rules: TitleRulesConfig::default(),
        }
    }
}

/// Configuration for the title rules section of the config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TitleRulesConfig {
    /// Regex source the title must contain a match for
    #[serde(default)]
    pub pattern: String,

    /// Minimum title length in characters
    #[serde(default, rename = "minLength")]
    pub min_length: usize,

    /// Maximum title length in characters; `0` means unbounded
    #[serde(default, rename = "maxLength")]
    pub max_length: usize,

    /// Prefixes the title must start with
    #[serde(default, rename = "allowedPrefixes")]
    pub allowed_prefixes: Vec<String>,

    /// Whether the prefix comparison is case-sensitive
    #[serde(default, rename = "prefixCaseSensitive")]
    pub prefix_case_sensitive: bool,
}

/// Loads the title-sentinel configuration from the given path.
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// * `Ok(TitleSentinelConfig)` if loaded and valid
/// * `Err(ConfigLoadError)` if there is a problem
pub fn load_title_sentinel_config<P: AsRef<Path>>(
    path: P,
) -> Result<TitleSentinelConfig, ConfigLoadError> {
    let path_ref = path.as_ref();
    let content = match fs::read_to_string(path_ref) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigLoadError::NotFound(path_ref.display().to_string()));
        }
        Err(e) => return Err(ConfigLoadError::Io(e)),
    };
    let config: TitleSentinelConfig = toml::from_str(&content)?;
    if config.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(ConfigLoadError::UnsupportedSchemaVersion(
            config.schema_version,
        ));
    }
    Ok(config)
}
