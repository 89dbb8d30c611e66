//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{MappingError, Result};
use crate::mapping::registry::Selection;

/// Log levels accepted in `[logging] level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default gamepad selection
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    #[serde(default = "default_device_type")]
    pub device_type: String,

    #[serde(default = "default_message_type")]
    pub message_type: String,

    #[serde(default = "default_mode")]
    pub mode: Option<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_device_type() -> String { "logitech_f710_wireless".to_string() }
fn default_message_type() -> String { "joy".to_string() }
fn default_mode() -> Option<String> { Some("xinput".to_string()) }

fn default_log_level() -> String { "info".to_string() }

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            device_type: default_device_type(),
            message_type: default_message_type(),
            mode: default_mode(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gamepad_mappings::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configured selection
    ///
    /// # Errors
    ///
    /// Returns the mapping error for the first invalid selection field.
    pub fn selection(&self) -> Result<Selection> {
        Selection::parse(
            &self.selection.device_type,
            &self.selection.message_type,
            self.selection.mode.as_deref(),
        )
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.selection.device_type.is_empty() {
            return Err(MappingError::Config(
                toml::de::Error::custom("device_type cannot be empty")
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(MappingError::Config(
                toml::de::Error::custom(format!(
                    "logging level must be one of: {}",
                    LOG_LEVELS.join(", ")
                ))
            ));
        }

        if let Err(e) = self.selection() {
            return Err(MappingError::Config(
                toml::de::Error::custom(format!("invalid selection: {}", e))
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::types::{InputMode, MessageType};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let selection = config.selection().unwrap();
        assert_eq!(selection.message_type, MessageType::Joy);
        assert_eq!(selection.mode, InputMode::XInput);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_device_type() {
        let mut config = Config::default();
        config.selection.device_type = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_selection_is_config_error() {
        let mut config = Config::default();
        config.selection.message_type = "xml".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, MappingError::Config(_)));
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_unknown_mode_fails_validation() {
        let toml_content = r#"
[selection]
device_type = "logitech_f710_wireless"
message_type = "gamepad"
mode = "dinput"
"#;
        assert!(Config::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let toml_content = r#"
[selection]
message_type = "GAMEPAD"
mode = "DirectInput"

[logging]
level = "debug"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = Config::load(temp_file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");

        let pair = config.selection().unwrap().mapping();
        assert_eq!(pair.axes.len(), 4);
        assert_eq!(pair.buttons.len(), 16);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/gamepad-mappings.toml").unwrap_err();
        assert!(matches!(err, MappingError::Io(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::from_toml_str("[selection\nmode = 1").unwrap_err();
        assert!(matches!(err, MappingError::Config(_)));
    }
}
