//! opsamples
//!
//! Small command-line flows that show logging practice and an
//! instrumented-call pattern: a random text generator (with an optional
//! diagnostics variant that writes leveled log records) and a page metrics
//! sampler that times link, header and paragraph extraction.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod instrument;
pub mod logging;
pub mod models;
pub mod output;
pub mod page;
pub mod prompt;
pub mod textgen;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use instrument::{ConsoleReporter, RecordingReporter, Stopwatch, TimingReporter};
pub use logging::{LogLevel, Logger, LoggerFactory};
pub use models::{Config, Document, DocumentShape, Line, PageSummary, TimingSample};
pub use output::{ColoredFormatter, OutputFormatterFactory, PlainFormatter, ReportFormatter};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Build information set by build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const TARGET_TRIPLE: &str = env!("TARGET_TRIPLE");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// One-line build description for debug output
pub fn build_info() -> String {
    match GIT_COMMIT {
        Some(commit) => format!("{} v{} ({}, {}, built {})", PKG_NAME, VERSION, commit, TARGET_TRIPLE, BUILD_TIME),
        None => format!("{} v{} ({}, built {})", PKG_NAME, VERSION, TARGET_TRIPLE, BUILD_TIME),
    }
}

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const MAX_TIMEOUT_SECS: u64 = 300;
    pub const DEFAULT_LOG_DIR: &str = ".";
    pub const OUTPUT_FILE_NAME: &str = "random.txt";
    pub const PAGES_PER_SESSION: usize = 2;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
    /// Documents above this many characters get a config warning
    pub const LARGE_DOCUMENT_CHARS: u64 = 10_000_000;
}
