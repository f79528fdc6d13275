//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use crate::logging::LogLevel;
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        Self::load_env_file_from(Path::new(".env"), debug)
    }

    /// Load a specific env file if it exists; variables already set win
    pub fn load_env_file_from(path: &Path, debug: bool) -> Result<()> {
        if path.exists() {
            dotenv::from_path(path)
                .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;

            if debug {
                println!("Loaded configuration from {}", path.display());
            }
        } else if debug {
            println!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# opsamples Configuration
#
# Values specified here are used as defaults and can be overridden by
# command-line arguments.

# Directory that receives random.txt (prompted for when unset)
# OUTPUT_DIR=/tmp

# Minimum log level: trace, debug, info, warning, error, critical
# LOG_LEVEL=debug

# Directory that receives randomtext_<level>.log / pagemetrics_<level>.log
# LOG_DIR=.

# Page fetch timeout in seconds (1-300)
# TIMEOUT_SECONDS=30

# Enable colored output (true/false)
# ENABLE_COLOR=true
"#
        .to_string()
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "OUTPUT_DIR" | "LOG_DIR" => {
                if value.trim().is_empty() {
                    return Err(AppError::config(format!("{} cannot be empty", key)));
                }
            }
            "LOG_LEVEL" => {
                value.parse::<LogLevel>()
                    .map_err(|e| AppError::config(format!("Invalid LOG_LEVEL value '{}': {}", value, e)))?;
            }
            "TIMEOUT_SECONDS" => {
                let timeout: u64 = value.parse()
                    .map_err(|e| AppError::config(format!("Invalid TIMEOUT_SECONDS value '{}': {}", value, e)))?;
                if timeout == 0 || timeout > crate::defaults::MAX_TIMEOUT_SECS {
                    return Err(AppError::config(format!(
                        "TIMEOUT_SECONDS must be between 1 and {}, got: {}",
                        crate::defaults::MAX_TIMEOUT_SECS,
                        timeout
                    )));
                }
            }
            "ENABLE_COLOR" => {
                value.parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", value, e)))?;
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("OUTPUT_DIR", "Directory that receives random.txt", "/tmp"),
            ("LOG_LEVEL", "Minimum log level", "debug"),
            ("LOG_DIR", "Directory that receives log files", "."),
            ("TIMEOUT_SECONDS", "Page fetch timeout in seconds (1-300)", "30"),
            ("ENABLE_COLOR", "Enable colored output", "true"),
        ]
    }

    /// Display environment variable help
    pub fn display_env_help() -> String {
        let mut help = String::new();
        help.push_str("Supported Environment Variables:\n\n");

        for (var, description, example) in Self::get_supported_env_vars() {
            help.push_str(&format!("  {:<18} {}\n", var, description));
            help.push_str(&format!("  {:<18} Example: {}\n\n", "", example));
        }

        help.push_str("Configuration Priority (highest to lowest):\n");
        help.push_str("  1. Command-line arguments\n");
        help.push_str("  2. Environment variables\n");
        help.push_str("  3. .env file values\n");
        help.push_str("  4. Default values\n");
        help.push_str("\nExample .env file:\n\n");
        help.push_str(&Self::create_example_env_content());

        help
    }
}
