//! The `config` command family: manage the rule configuration file.

use clap::Subcommand;
use tracing::debug;

use crate::config::{get_config_path, save_config};
use crate::errors::CliError;
use title_sentinel_core::config::{load_title_sentinel_config, TitleSentinelConfig};

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create initial configuration file
    Init {
        /// Path to save the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Check configuration syntax
    Validate {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show current configuration
    Get {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,

        /// Configuration key to get (e.g., "rules.minLength")
        key: Option<String>,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Init { path } => init_config(path.as_deref()),
        ConfigCommands::Validate { path } => validate_config(path.as_deref()),
        ConfigCommands::Get { path, key } => get_config(path.as_deref(), key.as_deref()),
    }
}

/// Initialize a new configuration file
fn init_config(path: Option<&str>) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Initializing configuration at {:?}", config_path);

    if config_path.exists() {
        return Err(CliError::ConfigError(format!(
            "Configuration file already exists at {:?}",
            config_path
        )));
    }

    let config = TitleSentinelConfig::default();
    save_config(&config, &config_path).map_err(|e| CliError::ConfigError(e.to_string()))?;

    println!("Configuration initialized at {:?}", config_path);
    Ok(())
}

/// Validate a configuration file
fn validate_config(path: Option<&str>) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Validating configuration at {:?}", config_path);

    match load_title_sentinel_config(&config_path) {
        Ok(_) => {
            println!("Configuration is valid");
            Ok(())
        }
        Err(e) => Err(CliError::ConfigError(e.to_string())),
    }
}

/// Get a configuration value
fn get_config(path: Option<&str>, key: Option<&str>) -> Result<(), CliError> {
    let config_path = get_config_path(path);
    debug!("Getting configuration from {:?}", config_path);

    let config = load_title_sentinel_config(&config_path)
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

    if let Some(key) = key {
        let value = get_config_value(&config, key)?;
        println!("{}: {}", key, value);
    } else {
        let config_str = toml::to_string_pretty(&config).map_err(|e| {
            CliError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;
        println!("{}", config_str);
    }

    Ok(())
}

/// Look up one dotted configuration key
fn get_config_value(config: &TitleSentinelConfig, key: &str) -> Result<String, CliError> {
    match key {
        "schemaVersion" => Ok(config.schema_version.to_string()),
        "rules.pattern" => Ok(config.rules.pattern.clone()),
        "rules.minLength" => Ok(config.rules.min_length.to_string()),
        "rules.maxLength" => Ok(config.rules.max_length.to_string()),
        "rules.allowedPrefixes" => Ok(config.rules.allowed_prefixes.join(",")),
        "rules.prefixCaseSensitive" => Ok(config.rules.prefix_case_sensitive.to_string()),
        _ => Err(CliError::InvalidArguments(format!(
            "Unknown configuration key: {}",
            key
        ))),
    }
}
