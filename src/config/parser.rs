//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::{Cli, Command},
    config::env::EnvManager,
    error::Result,
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        self.load_env_file()?;
        self.parse_without_env_file()
    }

    /// Build the configuration from defaults, the process environment and
    /// the command line, skipping the .env file
    pub fn parse_without_env_file(&self) -> Result<Config> {
        let mut config = Config::default();

        Self::check_env_vars()?;
        config.merge_from_env()?;
        self.apply_cli_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Reject malformed values of the supported variables up front
    fn check_env_vars() -> Result<()> {
        for (name, _, _) in EnvManager::get_supported_env_vars() {
            if let Ok(value) = std::env::var(name) {
                EnvManager::validate_env_var(name, &value)?;
            }
        }
        Ok(())
    }

    fn load_env_file(&self) -> Result<()> {
        EnvManager::load_env_file(self.cli.debug)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(enable_color) = self.cli.color_override() {
            config.enable_color = enable_color;
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        let log = self.cli.log_args();
        if let Some(level) = log.log_level {
            config.log_level = level;
        }
        if let Some(ref dir) = log.log_dir {
            config.log_dir = dir.clone();
        }

        match &self.cli.command {
            Command::Generate(args) => {
                config.lines = args.lines.or(config.lines);
                config.words_per_line = args.words.or(config.words_per_line);
                config.word_length = args.word_length.or(config.word_length);
                if let Some(ref dir) = args.dir {
                    config.output_dir = Some(dir.clone());
                }
                config.diagnostics = args.diagnostics;
            }
            Command::Measure(args) => {
                if !args.urls.is_empty() {
                    config.urls = args.urls.clone();
                }
                if let Some(timeout) = args.timeout {
                    config.timeout_seconds = timeout;
                }
            }
        }
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    fn show<T: std::fmt::Display>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "(prompt)".to_string())
    }

    let mut summary = Vec::new();

    summary.push(format!("Lines: {}", show(config.lines)));
    summary.push(format!("Words per line: {}", show(config.words_per_line)));
    summary.push(format!("Word length: {}", show(config.word_length)));
    summary.push(format!(
        "Output directory: {}",
        show(config.output_dir.as_ref().map(|d| d.display()))
    ));
    summary.push(format!("Diagnostics: {}", config.diagnostics));
    summary.push(format!(
        "URLs: {}",
        if config.urls.is_empty() { "(prompt)".to_string() } else { config.urls.join(", ") }
    ));
    summary.push(format!("Timeout: {}s", config.timeout_seconds));
    summary.push(format!("Log level: {}", config.log_level));
    summary.push(format!("Log directory: {}", config.log_dir.display()));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
