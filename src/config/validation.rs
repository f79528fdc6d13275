//! Configuration validation utilities and rules

use crate::{
    error::Result,
    models::Config,
};

/// Configuration validator with advisory rules on top of `Config::validate`
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration and collect non-fatal warnings
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        // Hard errors first
        config.validate()?;

        warnings.extend(Self::validate_urls(&config.urls));
        warnings.extend(Self::validate_document_size(config));
        warnings.extend(Self::validate_timeout(config));
        warnings.extend(Self::validate_directories(config));

        Ok(warnings)
    }

    fn validate_urls(urls: &[String]) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for url in urls {
            let Ok(parsed) = crate::page::validate_url(url) else {
                continue;
            };

            if parsed.scheme() == "http" {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Warning,
                    format!("URL '{}' uses HTTP instead of HTTPS", url),
                ));
            }

            if let Some(url::Host::Ipv4(ip)) = parsed.host() {
                if ip.is_private() || ip.is_loopback() {
                    warnings.push(ValidationWarning::new(
                        ValidationLevel::Info,
                        format!("URL '{}' targets private/local network", url),
                    ));
                }
            }
        }

        if urls.len() == 2 && urls[0] == urls[1] {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                "Both pages point at the same URL".to_string(),
            ));
        }

        warnings
    }

    fn validate_document_size(config: &Config) -> Vec<ValidationWarning> {
        let Some(Ok(shape)) = config.document_shape() else {
            return Vec::new();
        };

        let chars = shape.document_chars();
        if chars > crate::defaults::LARGE_DOCUMENT_CHARS {
            vec![ValidationWarning::new(
                ValidationLevel::Warning,
                format!(
                    "Document of {} lines x {} words x {} letters will be about {} characters",
                    shape.lines, shape.words_per_line, shape.word_length, chars
                ),
            )]
        } else {
            Vec::new()
        }
    }

    fn validate_timeout(config: &Config) -> Vec<ValidationWarning> {
        if config.timeout_seconds < 3 {
            vec![ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Timeout of {}s may be too short for slow pages", config.timeout_seconds),
            )]
        } else if config.timeout_seconds > 60 {
            vec![ValidationWarning::new(
                ValidationLevel::Info,
                format!("Long timeout of {}s will slow down failure detection", config.timeout_seconds),
            )]
        } else {
            Vec::new()
        }
    }

    fn validate_directories(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if let Some(dir) = &config.output_dir {
            if !dir.is_dir() {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Error,
                    format!("Output directory '{}' does not exist", dir.display()),
                ));
            }
        }

        if !config.log_dir.is_dir() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Error,
                format!("Log directory '{}' does not exist", config.log_dir.display()),
            ));
        }

        warnings
    }
}

/// Validation warning levels
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
    Error,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let label = format!("[{}]", self.level.as_str());
        if use_color {
            use colored::Colorize;
            let label = match self.level {
                ValidationLevel::Info => label.blue(),
                ValidationLevel::Warning => label.yellow(),
                ValidationLevel::Error => label.red(),
            };
            format!("{} {}", label, self.message)
        } else {
            format!("{} {}", label, self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
