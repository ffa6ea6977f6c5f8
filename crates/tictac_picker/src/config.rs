//! Picker configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Options offered by the picker and how many of them to show.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Phrases the user can pick from.
    #[serde(default)]
    options: Vec<String>,

    /// Maximum number of rows shown at once.
    #[serde(default = "default_max_displayed_options")]
    max_displayed_options: usize,

    /// Whether the search distinguishes upper and lower case.
    #[serde(default)]
    case_sensitive: bool,
}

fn default_max_displayed_options() -> usize {
    10
}

impl PickerConfig {
    /// Creates a configuration with default display settings.
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            max_displayed_options: default_max_displayed_options(),
            case_sensitive: false,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(options = config.options.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.max_displayed_options == 0 {
            return Err(ConfigError::new(
                "max_displayed_options must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
