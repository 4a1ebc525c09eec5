use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

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
    /// Uses `~/.config/swipedeck/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("swipedeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Durations and card dimensions are positive
    /// - Spring stiffness, damping and mass are positive
    /// - Card ids are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck.swipe_out_ms == 0 {
            return Err(invalid("deck.swipe_out_ms must be greater than 0"));
        }
        if self.ui.tick_ms == 0 {
            return Err(invalid("ui.tick_ms must be greater than 0"));
        }
        if self.ui.card_width == 0 || self.ui.card_height == 0 {
            return Err(invalid("ui.card_width and ui.card_height must be greater than 0"));
        }
        if !(self.deck.cascade_step >= 0.0) {
            return Err(invalid("deck.cascade_step must not be negative"));
        }
        if !(self.deck.spring_stiffness > 0.0) || !(self.deck.spring_mass > 0.0) {
            return Err(invalid(
                "deck.spring_stiffness and deck.spring_mass must be greater than 0",
            ));
        }
        if !(self.deck.spring_damping > 0.0) {
            return Err(invalid("deck.spring_damping must be greater than 0"));
        }

        let mut seen = HashSet::new();
        for id in self.cards.iter().filter_map(|card| card.id.as_deref()) {
            if !seen.insert(id) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate card id '{}'", id),
                });
            }
        }

        Ok(())
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
