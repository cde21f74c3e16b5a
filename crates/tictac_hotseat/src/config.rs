//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_ledger::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerNames};
use tracing::{debug, info, instrument};

/// Settings for a hot-seat session, usually read from a TOML file.
///
/// ```toml
/// x_name = "Ada"
/// o_name = "Grace"
/// show_log = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HotseatConfig {
    /// Starting name for `X`.
    #[serde(default = "default_x_name")]
    x_name: String,

    /// Starting name for `O`.
    #[serde(default = "default_o_name")]
    o_name: String,

    /// Print the move log after every accepted move.
    #[serde(default)]
    show_log: bool,
}

fn default_x_name() -> String {
    DEFAULT_X_NAME.to_string()
}

fn default_o_name() -> String {
    DEFAULT_O_NAME.to_string()
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            x_name: default_x_name(),
            o_name: default_o_name(),
            show_log: false,
        }
    }
}

impl HotseatConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.x_name, o = %config.o_name, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        x_name: Option<String>,
        o_name: Option<String>,
        show_log: bool,
    ) -> Self {
        if let Some(name) = x_name {
            self.x_name = name;
        }
        if let Some(name) = o_name {
            self.o_name = name;
        }
        self.show_log |= show_log;
        self
    }

    /// Starting name mapping.
    pub fn player_names(&self) -> PlayerNames {
        PlayerNames::new(self.x_name.clone(), self.o_name.clone())
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
    /// Creates a new configuration error at the caller's location.
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
