//! Configuration data model and validation

use crate::logging::LogLevel;
use crate::models::DocumentShape;
use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
///
/// Values left as `None` are asked for interactively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of lines to generate
    #[serde(default)]
    pub lines: Option<u32>,

    /// Words per generated line
    #[serde(default)]
    pub words_per_line: Option<u32>,

    /// Characters per generated word
    #[serde(default)]
    pub word_length: Option<u32>,

    /// Directory that receives `random.txt`
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Run the generator with leveled log records
    #[serde(default)]
    pub diagnostics: bool,

    /// Pages to sample in the measure flow
    #[serde(default)]
    pub urls: Vec<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,

    /// Minimum level written to the log sink
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    /// Directory that receives log files
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lines: None,
            words_per_line: None,
            word_length: None,
            output_dir: None,
            diagnostics: false,
            urls: Vec::new(),
            timeout_seconds: default_timeout_secs(),
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Document shape when all three dimensions are already known
    pub fn document_shape(&self) -> Option<Result<DocumentShape>> {
        match (self.lines, self.words_per_line, self.word_length) {
            (Some(lines), Some(words), Some(len)) => Some(DocumentShape::new(lines, words, len)),
            _ => None,
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("Line count", self.lines),
            ("Words per line", self.words_per_line),
            ("Word length", self.word_length),
        ] {
            if value == Some(0) {
                return Err(AppError::config(format!("{} must be greater than 0", name)));
            }
        }

        if self.urls.len() > crate::defaults::PAGES_PER_SESSION {
            return Err(AppError::config(format!(
                "At most {} URLs can be sampled per session, got {}",
                crate::defaults::PAGES_PER_SESSION,
                self.urls.len()
            )));
        }

        for url in &self.urls {
            if url.is_empty() {
                return Err(AppError::config("URL cannot be empty"));
            }

            crate::page::validate_url(url)
                .map_err(|e| AppError::config(format!("Invalid URL '{}': {}", url, e)))?;
        }

        if self.timeout_seconds == 0 {
            return Err(AppError::config("Timeout must be greater than 0"));
        }

        if self.timeout_seconds > crate::defaults::MAX_TIMEOUT_SECS {
            return Err(AppError::config(format!(
                "Timeout cannot exceed {} seconds",
                crate::defaults::MAX_TIMEOUT_SECS
            )));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(output_dir) = std::env::var("OUTPUT_DIR") {
            if !output_dir.trim().is_empty() {
                self.output_dir = Some(PathBuf::from(output_dir.trim()));
            }
        }

        if let Ok(log_level) = std::env::var("LOG_LEVEL") {
            self.log_level = log_level.parse()
                .map_err(|e| AppError::config(format!("Invalid LOG_LEVEL value '{}': {}", log_level, e)))?;
        }

        if let Ok(log_dir) = std::env::var("LOG_DIR") {
            if !log_dir.trim().is_empty() {
                self.log_dir = PathBuf::from(log_dir.trim());
            }
        }

        if let Ok(timeout) = std::env::var("TIMEOUT_SECONDS") {
            self.timeout_seconds = timeout.parse()
                .map_err(|e| AppError::config(format!("Invalid TIMEOUT_SECONDS value '{}': {}", timeout, e)))?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_timeout_secs() -> u64 {
    crate::defaults::DEFAULT_TIMEOUT.as_secs()
}

fn default_log_level() -> LogLevel {
    LogLevel::Debug
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_LOG_DIR)
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
