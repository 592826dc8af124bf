use thiserror::Error;

#[derive(Error, Debug)]
pub enum TitleSentinelError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid title pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors raised while loading a rule configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported configuration schema version: {0}")]
    UnsupportedSchemaVersion(u32),
}
