//! Output formatting for prompts, timing reports and page summaries
//!
//! Colored and plain renderings share one trait, so the flows never check
//! the color setting themselves.

mod formatter;
mod colored;

pub use formatter::{
    ReportFormatter,
    PlainFormatter,
    FormattingOptions,
};
pub use colored::{
    ColoredFormatter,
    ColorScheme,
};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool, verbose: bool) -> Box<dyn ReportFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn ReportFormatter> {
        Self::create_formatter(false, false)
    }
}
