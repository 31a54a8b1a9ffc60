//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - The day-start time used when repacking and when loading templates
//! - Export defaults for the calendar file
//!
//! Configuration is stored at `~/.config/routinely/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::clock::is_clock_time;
use crate::error::ConfigError;

/// Day-start time used when no configuration is present.
pub const DEFAULT_START_TIME: &str = "09:00";

/// Calendar export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_filename")]
    pub filename: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/routinely/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// "HH:MM" time the schedule starts from on reorder and template load.
    #[serde(default = "default_start_time")]
    pub default_start_time: String,
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_start_time() -> String {
    DEFAULT_START_TIME.to_string()
}

fn default_export_filename() -> String {
    "daily_routine.ics".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_export_filename(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_start_time: default_start_time(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("."),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, or return defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("."),
            message: e.to_string(),
        })?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Update the day-start time, validating the "HH:MM" shape.
    ///
    /// # Errors
    /// Returns an error if `value` is not a clock time.
    pub fn set_default_start_time(&mut self, value: &str) -> Result<(), ConfigError> {
        if !is_clock_time(value) {
            return Err(ConfigError::InvalidValue {
                key: "default_start_time".to_string(),
                message: format!("'{value}' is not an HH:MM time"),
            });
        }
        self.default_start_time = value.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_start_time, "09:00");
        assert_eq!(config.export.filename, "daily_routine.ics");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("default_start_time = \"07:30\"").unwrap();
        assert_eq!(config.default_start_time, "07:30");
        assert_eq!(config.export.filename, "daily_routine.ics");

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_start_time, "09:00");
    }

    #[test]
    fn test_set_default_start_time_validates() {
        let mut config = Config::default();
        assert!(config.set_default_start_time("06:15").is_ok());
        assert_eq!(config.default_start_time, "06:15");

        assert!(config.set_default_start_time("6:15").is_err());
        assert!(config.set_default_start_time("noon").is_err());
        assert_eq!(config.default_start_time, "06:15");
    }

    #[test]
    fn test_round_trips_through_toml() {
        let mut config = Config::default();
        config.default_start_time = "08:00".to_string();
        config.export.filename = "day.ics".to_string();

        let content = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&content).unwrap();
        assert_eq!(decoded.default_start_time, "08:00");
        assert_eq!(decoded.export.filename, "day.ics");
    }
}
