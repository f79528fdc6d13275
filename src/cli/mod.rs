//! Command-line interface

use crate::logging::LogLevel;
use clap::{error::ErrorKind, ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// opsamples - random text generation and timed page metrics
#[derive(Parser, Debug, Clone)]
#[command(name = "opsamples")]
#[command(version, about, long_about = None)]
#[command(after_long_help = crate::config::EnvManager::display_env_help())]
pub struct Cli {
    /// Force colored output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a file of random text
    Generate(GenerateArgs),
    /// Fetch two pages and time link, header and paragraph extraction
    Measure(MeasureArgs),
}

/// Options of the `generate` subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Number of lines to generate
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub lines: Option<u32>,

    /// Words per line
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub words: Option<u32>,

    /// Letters per word
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub word_length: Option<u32>,

    /// Directory that receives random.txt
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Write leveled log records and re-prompt on invalid input
    #[arg(long)]
    pub diagnostics: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Options of the `measure` subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct MeasureArgs {
    /// Page to sample (at most twice; missing pages are prompted for)
    #[arg(long = "url", action = ArgAction::Append)]
    pub urls: Vec<String>,

    /// Request timeout in seconds
    #[arg(short, long, value_parser = parse_duration)]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Log file options shared by both subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Minimum level written to the log file
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Directory that receives the log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if let Command::Measure(args) = &self.command {
            if args.urls.len() > crate::defaults::PAGES_PER_SESSION {
                return Err(format!(
                    "At most {} --url values can be given, got {}",
                    crate::defaults::PAGES_PER_SESSION,
                    args.urls.len()
                ));
            }
        }

        Ok(())
    }

    /// Explicit color choice from the command line, if any
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        }
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        self.color_override().unwrap_or_else(supports_color)
    }

    /// Log options of whichever subcommand was given
    pub fn log_args(&self) -> &LogArgs {
        match &self.command {
            Command::Generate(args) => &args.log,
            Command::Measure(args) => &args.log,
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Command Line Summary:\n");
        match &self.command {
            Command::Generate(args) => {
                summary.push_str("  Command: generate\n");
                summary.push_str(&format!("  Lines: {}\n", show(args.lines)));
                summary.push_str(&format!("  Words per line: {}\n", show(args.words)));
                summary.push_str(&format!("  Word length: {}\n", show(args.word_length)));
                if let Some(dir) = &args.dir {
                    summary.push_str(&format!("  Output directory: {}\n", dir.display()));
                }
                summary.push_str(&format!("  Diagnostics: {}\n", args.diagnostics));
            }
            Command::Measure(args) => {
                summary.push_str("  Command: measure\n");
                if !args.urls.is_empty() {
                    summary.push_str(&format!("  URLs: {}\n", args.urls.join(", ")));
                }
                summary.push_str(&format!("  Timeout: {}\n", show(args.timeout.map(|t| format!("{}s", t)))));
            }
        }
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        summary
    }
}

fn show<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "(prompt)".to_string())
}

/// Parse duration from seconds string
fn parse_duration(s: &str) -> Result<u64, String> {
    // Reject strings with leading + sign or other invalid formats
    if s.starts_with('+') || s.starts_with("0x") || s.starts_with("0X") {
        return Err(format!("Invalid duration: {}", s));
    }

    s.parse::<u64>()
        .map_err(|_| format!("Invalid duration: {}", s))
        .and_then(|secs| {
            if secs == 0 {
                Err("Duration must be greater than 0".to_string())
            } else if secs > crate::defaults::MAX_TIMEOUT_SECS {
                Err(format!("Duration cannot exceed {} seconds", crate::defaults::MAX_TIMEOUT_SECS))
            } else {
                Ok(secs)
            }
        })
}

/// Exit code for a command line clap refused: 0 for help and version, 1 otherwise
pub fn parse_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // On Windows, check for ANSICON or ConEmu
    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
