use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::availability::AgeBracket;
use crate::config::types::Config;

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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/slotwatch/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("slotwatch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Base URL is http(s)
    /// - Timeout and refresh interval are at least one second
    /// - Age threshold is positive
    /// - Vaccine filter, when set, is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.as_str();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url must start with http:// or https:// (got '{}')", base_url),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_seconds must be at least 1".to_string(),
            });
        }

        if self.refresh.interval_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "refresh.interval_seconds must be at least 1".to_string(),
            });
        }

        if matches!(self.eligibility.age, AgeBracket::Below(0) | AgeBracket::AtLeast(0)) {
            return Err(ConfigError::ValidationError {
                message: "eligibility.age threshold must be greater than 0".to_string(),
            });
        }

        if let Some(vaccine) = &self.eligibility.vaccine {
            if vaccine.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "eligibility.vaccine must not be empty when set".to_string(),
                });
            }
        }

        Ok(())
    }
}
