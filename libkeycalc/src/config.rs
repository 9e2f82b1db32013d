//! Configuration management for keycalc

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub keys: KeyBindings,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the running result after every keystroke
    pub preview: bool,
    pub colors: bool,
}

/// Letters pressed together with Ctrl for the two control gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub reset: char,
    pub quit: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
    /// Log file; defaults to `keycalc.log` in the data directory
    pub file: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview: true,
            colors: true,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            reset: 'r',
            quit: 'q',
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = resolve_config_path()?;
        Self::load_or_default(&config_path)
    }

    /// Load from `path` if it exists, otherwise return the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let KeyBindings { reset, quit } = self.keys;

        for (name, key) in [("keys.reset", reset), ("keys.quit", quit)] {
            if !key.is_ascii_alphabetic() {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a letter, got '{}'",
                    name, key
                )));
            }
        }

        if reset.eq_ignore_ascii_case(&quit) {
            return Err(ConfigError::Invalid(
                "keys.reset and keys.quit must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolved log file path
    pub fn log_file(&self) -> Result<PathBuf, ConfigError> {
        match self.logging.file {
            Some(ref file) => Ok(PathBuf::from(shellexpand::tilde(file).to_string())),
            None => Ok(resolve_data_path()?.join("keycalc.log")),
        }
    }
}

/// Resolve the configuration file path following the XDG Base Directory layout
pub fn resolve_config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var("KEYCALC_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("keycalc").join("config.toml"))
}

/// Resolve the data directory path following the XDG Base Directory layout
pub fn resolve_data_path() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("keycalc"))
}
