use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::greeting::MAX_ENTHUSIASM_LEVEL;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `~/.config/enthusiasm/config.toml` or the platform equivalent,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("enthusiasm").join("config.toml")
    }

    /// Default log file for interactive runs.
    pub fn default_log_path() -> PathBuf {
        let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
        cache_dir.join("enthusiasm").join("enthusiasm.log")
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`.
    ///
    /// A missing file yields `Config::default()`; read, parse and
    /// validation failures are errors.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - The language name is not blank
    /// - The initial level is at most `MAX_ENTHUSIASM_LEVEL` (non-positive
    ///   levels are allowed and fail at render time)
    /// - The transition history keeps at least one entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.greeting.language_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "greeting.language_name must not be empty".to_string(),
            });
        }

        if self.greeting.initial_level > MAX_ENTHUSIASM_LEVEL {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "greeting.initial_level must be at most {} (got {})",
                    MAX_ENTHUSIASM_LEVEL, self.greeting.initial_level
                ),
            });
        }

        if self.logging.history_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "logging.history_size must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(Self::default_log_path)
    }
}
