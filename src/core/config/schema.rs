//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$FORKROUTE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/forkroute/config.toml`
//! 3. `~/.forkroute/config.toml` (canonical write location)
//!
//! # Project Config
//!
//! Located at `forkroute.toml` in the working directory.
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., terminal must be a valid station name).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::{StationName, TrainColor};

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// network = "/srv/rail/train_network.json"
/// default_color = "GREEN"
/// interactive = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Path to the network document
    pub network: Option<PathBuf>,

    /// Train color used when none is given on the command line
    pub default_color: Option<TrainColor>,

    /// Default interactive mode
    pub interactive: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_network_path(self.network.as_ref())
    }
}

/// Project configuration.
///
/// # Example
///
/// ```toml
/// network = "data/train_network.json"
/// terminal = "F"
/// default_color = "WITHOUT COLOR"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Path to the network document, relative to the project directory
    pub network: Option<PathBuf>,

    /// Terminal station override
    pub terminal: Option<String>,

    /// Train color used when none is given on the command line
    pub default_color: Option<TrainColor>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_network_path(self.network.as_ref())?;

        if let Some(terminal) = &self.terminal {
            StationName::new(terminal.as_str()).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid terminal station: {}", e))
            })?;
        }

        Ok(())
    }
}

fn validate_network_path(path: Option<&PathBuf>) -> Result<(), ConfigError> {
    match path {
        Some(p) if p.as_os_str().is_empty() => Err(ConfigError::InvalidValue(
            "network path cannot be empty".to_string(),
        )),
        _ => Ok(()),
    }
}
