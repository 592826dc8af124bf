use std::path::{Path, PathBuf};

use title_sentinel_core::config::TitleSentinelConfig;
use title_sentinel_core::errors::TitleSentinelError;
use tracing::{debug, info};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = ".title-sentinel.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Get the path to the configuration file
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        // Look for config in current directory
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}

/// Save a configuration to the specified file
pub fn save_config(config: &TitleSentinelConfig, path: &Path) -> Result<(), TitleSentinelError> {
    debug!("Saving configuration to {:?}", path);

    let content = toml::to_string_pretty(config).map_err(|e| {
        TitleSentinelError::ConfigError(format!("Failed to serialize configuration: {}", e))
    })?;

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            TitleSentinelError::ConfigError(format!("Failed to create directory: {}", e))
        })?;
    }

    std::fs::write(path, content).map_err(|e| {
        TitleSentinelError::ConfigError(format!("Failed to write configuration file: {}", e))
    })?;

    info!("Configuration saved to {:?}", path);
    Ok(())
}
