//! Structured logging for the sample flows
//!
//! This module provides:
//! - Leveled log records (trace through critical)
//! - Explicitly constructed `Logger` handles owned by the entry point
//! - File and in-memory sinks writing one record per line
//! - Macros that capture the module, function and line of the call site

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::types::Flow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level - most detailed
    Trace = 0,
    /// Debug level - detailed information for debugging
    Debug = 1,
    /// Info level - general application information
    Info = 2,
    /// Warning level - unexpected input or state, flow continues
    Warn = 3,
    /// Error level - a failed operation
    Error = 4,
    /// Critical level - the run cannot continue
    Critical = 5,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Lowercase name used in log file names
    pub fn file_label(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Log entry structure for structured logging
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp when log entry was created
    pub timestamp: DateTime<Utc>,
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Logger name/component
    pub logger: String,
    /// Additional structured fields
    pub fields: BTreeMap<String, serde_json::Value>,
    /// File and line information
    pub location: Option<LogLocation>,
}

/// Source code location information
#[derive(Debug, Clone)]
pub struct LogLocation {
    /// Source file name
    pub file: String,
    /// Line number
    pub line: u32,
    /// Module path
    pub module: Option<String>,
    /// Enclosing function name
    pub function: Option<String>,
}

/// Where formatted log lines go
pub enum LogSink {
    /// A log file created (truncated) when the logger is built
    File { path: PathBuf, file: Mutex<File> },
    /// Captured lines, for tests and previews
    Memory(Mutex<Vec<String>>),
}

/// Logger handle
///
/// Built once by the entry point and passed down by reference. There is no
/// process-wide logger. Every line has the layout
/// `<time> (<module> --> <function>[<line>]) [<LEVEL>]: <message>`.
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Logger name
    name: String,
    /// Output destination
    sink: LogSink,
}

impl Logger {
    /// Create a logger writing record lines to a new file
    pub fn to_file(name: String, path: &Path, min_level: LogLevel) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| AppError::io(format!("Failed to create log file '{}': {}", path.display(), e)))?;

        Ok(Self::with_sink(
            name,
            min_level,
            LogSink::File {
                path: path.to_path_buf(),
                file: Mutex::new(file),
            },
        ))
    }

    /// Create a logger that keeps formatted lines in memory
    pub fn in_memory(name: String, min_level: LogLevel) -> Self {
        Self::with_sink(name, min_level, LogSink::Memory(Mutex::new(Vec::new())))
    }

    fn with_sink(name: String, min_level: LogLevel, sink: LogSink) -> Self {
        Self { min_level, name, sink }
    }

    /// Logger name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum level that will be written
    pub fn level(&self) -> LogLevel {
        self.min_level
    }

    /// Path of the log file, for file sinks
    pub fn file_path(&self) -> Option<&Path> {
        match &self.sink {
            LogSink::File { path, .. } => Some(path),
            LogSink::Memory(_) => None,
        }
    }

    /// Lines captured by an in-memory sink
    pub fn captured(&self) -> Vec<String> {
        match &self.sink {
            LogSink::Memory(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
            LogSink::File { .. } => Vec::new(),
        }
    }

    /// Create a log entry builder
    pub fn log(&self, level: LogLevel, message: &str) -> LogEntryBuilder<'_> {
        LogEntryBuilder::new(self, level, message.to_string())
    }

    /// Convenience methods for different log levels
    pub fn trace(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Trace, message)
    }

    pub fn debug(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Error, message)
    }

    pub fn critical(&self, message: &str) -> LogEntryBuilder<'_> {
        self.log(LogLevel::Critical, message)
    }

    /// Check if a log level would be output
    pub fn would_log(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Flush a file sink
    pub fn flush(&self) -> Result<()> {
        if let LogSink::File { file, .. } = &self.sink {
            if let Ok(mut file) = file.lock() {
                file.flush()?;
            }
        }
        Ok(())
    }

    /// Write log entry to the sink
    fn write_entry(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let output = self.format_record(&entry);

        match &self.sink {
            LogSink::File { file, .. } => {
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", output);
                }
            }
            LogSink::Memory(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(output);
                }
            }
        }
    }

    /// Format log entry as `<time> (<module> --> <function>[<line>]) [<LEVEL>]: <message>`
    fn format_record(&self, entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S,%3f");

        let (module, function, line) = match &entry.location {
            Some(location) => (
                location.module.as_deref()
                    .and_then(|m| m.rsplit("::").next())
                    .unwrap_or(&entry.logger)
                    .to_string(),
                location.function.clone().unwrap_or_else(|| "-".to_string()),
                location.line,
            ),
            None => (entry.logger.clone(), "-".to_string(), 0),
        };

        let mut output = format!("{} ({} --> {}[{}]) [{}]: {}",
            timestamp,
            module,
            function,
            line,
            entry.level.as_str(),
            entry.message
        );
        output.push_str(&format_fields(&entry.fields));

        output
    }
}

fn format_fields(fields: &BTreeMap<String, serde_json::Value>) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let fields_str: Vec<String> = fields.iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();
    format!(" {{{}}}", fields_str.join(", "))
}

/// Builder pattern for creating log entries
pub struct LogEntryBuilder<'a> {
    logger: &'a Logger,
    entry: LogEntry,
}

impl<'a> LogEntryBuilder<'a> {
    fn new(logger: &'a Logger, level: LogLevel, message: String) -> Self {
        Self {
            logger,
            entry: LogEntry {
                timestamp: Utc::now(),
                level,
                message,
                logger: logger.name.clone(),
                fields: BTreeMap::new(),
                location: None,
            },
        }
    }

    /// Add a structured field
    pub fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.entry.fields.insert(key.to_string(), json_value);
        }
        self
    }

    /// Add location information
    pub fn location(mut self, file: &str, line: u32, module: Option<&str>) -> Self {
        let function = self.entry.location.take().and_then(|l| l.function);
        self.entry.location = Some(LogLocation {
            file: file.to_string(),
            line,
            module: module.map(String::from),
            function,
        });
        self
    }

    /// Add the enclosing function name
    pub fn function(mut self, name: &str) -> Self {
        match self.entry.location.as_mut() {
            Some(location) => location.function = Some(name.to_string()),
            None => {
                self.entry.location = Some(LogLocation {
                    file: String::new(),
                    line: 0,
                    module: None,
                    function: Some(name.to_string()),
                });
            }
        }
        self
    }

    /// Add error information
    pub fn error_info(self, error: &AppError) -> Self {
        self.field("error_category", error.category())
            .field("error_recoverable", error.is_recoverable())
            .field("error_exit_code", error.exit_code())
    }

    /// Finalize and write the log entry
    pub fn log(self) {
        self.logger.write_entry(self.entry);
    }
}

/// Builds the logger each flow runs with
pub struct LoggerFactory {
    config: Config,
}

impl LoggerFactory {
    /// Create a new logger factory
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Log file path for a flow, if the flow writes one
    pub fn log_file_path(&self, flow: Flow) -> Option<PathBuf> {
        flow.log_file_stem().map(|stem| {
            self.config.log_dir.join(format!("{}_{}.log", stem, self.config.log_level.file_label()))
        })
    }

    /// Create the file logger for a flow, or `None` when the flow keeps
    /// no log
    pub fn create_for_flow(&self, flow: Flow) -> Result<Option<Logger>> {
        self.log_file_path(flow)
            .map(|path| Logger::to_file(flow.name().to_string(), &path, self.config.log_level))
            .transpose()
    }
}

/// Name of the function the macro is expanded in
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// Log at a level with file, line, module and function captured
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        let logger: &$crate::logging::Logger = $logger;
        if logger.would_log($level) {
            logger.log($level, &format!($($arg)*))
                .location(file!(), line!(), Some(module_path!()))
                .function($crate::function_name!())
                .log();
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Critical, $($arg)*)
    };
}
