//! Logging setup shared by keycalc front-ends
//!
//! The interactive calculator owns the terminal, so logs normally go to a
//! file rather than stderr. Supports:
//! - Text, JSON, and pretty-printed output
//! - `RUST_LOG` overriding the configured level
//!
//! # Examples
//!
//! ```no_run
//! use libkeycalc::logging::{LoggingConfig, LogFormat};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), false)
//!     .with_file("/tmp/keycalc.log".into());
//! config.init().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text output
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed, multi-line
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    pub fn with_file(self, file: PathBuf) -> Self {
        Self {
            file: Some(file),
            ..self
        }
    }

    fn filter(&self) -> EnvFilter {
        let level = if self.verbose { "debug" } else { self.level.as_str() };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    fn writer(&self) -> io::Result<BoxMakeWriter> {
        match self.file {
            Some(ref path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Ok(BoxMakeWriter::new(Mutex::new(file)))
            }
            None => Ok(BoxMakeWriter::new(io::stderr)),
        }
    }

    /// Install the global subscriber
    ///
    /// Fails if the log file cannot be opened or a subscriber is already set.
    pub fn init(&self) -> io::Result<()> {
        let filter = self.filter();
        let writer = self.writer()?;
        let ansi = self.file.is_none();

        let installed = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_current_span(true)
                .flatten_event(true)
                .with_target(true)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };

        installed.map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "xml".parse::<LogFormat>();
        assert!(result.unwrap_err().contains("Invalid log format: 'xml'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_with_file() {
        let config = LoggingConfig::new(LogFormat::Text, "warn".to_string(), false)
            .with_file(PathBuf::from("/tmp/keycalc.log"));
        assert_eq!(config.level, "warn");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/keycalc.log")));
    }

    #[test]
    #[serial_test::serial]
    fn test_verbose_overrides_configured_level() {
        std::env::remove_var("RUST_LOG");

        let verbose = LoggingConfig::new(LogFormat::Text, "warn".to_string(), true);
        assert_eq!(verbose.filter().to_string(), "debug");

        let quiet = LoggingConfig::new(LogFormat::Text, "warn".to_string(), false);
        assert_eq!(quiet.filter().to_string(), "warn");
    }

    #[test]
    fn test_writer_creates_log_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("keycalc.log");
        let config = LoggingConfig::new(LogFormat::Text, "info".to_string(), false)
            .with_file(path.clone());

        config.writer().unwrap();
        assert!(path.exists());
    }
}
