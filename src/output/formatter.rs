//! Core formatting trait and the plain text implementation

use crate::models::{PageSummary, TimingSample};
use std::path::Path;

/// Renders every console message the flows print
pub trait ReportFormatter: Send + Sync {
    /// Format an interactive prompt question
    fn prompt(&self, question: &str) -> String;

    /// Format the notice shown after rejected input
    fn input_error(&self, message: &str) -> String;

    /// Format one instrumented-call report
    fn timing(&self, sample: &TimingSample) -> String;

    /// Format a page section header
    fn page_header(&self, index: usize, url: &str) -> String;

    /// Format `There are <n> <what> on this page`
    fn page_count(&self, count: usize, what: &str) -> String;

    /// Format the one-line page summary
    fn page_summary(&self, summary: &PageSummary) -> String;

    /// Format the success message after writing the document
    fn document_written(&self, lines: u32, path: &Path) -> String;

    /// Format warning messages
    fn warning(&self, message: &str) -> String;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Enable verbose mode with detailed information
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// Plain text formatter for scripts, pipes and logs
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new(FormattingOptions {
            enable_color: false,
            verbose_mode: false,
        })
    }
}

impl ReportFormatter for PlainFormatter {
    fn prompt(&self, question: &str) -> String {
        format!("{} ", question.trim_end())
    }

    fn input_error(&self, message: &str) -> String {
        message.to_string()
    }

    fn timing(&self, sample: &TimingSample) -> String {
        if self.options.verbose_mode {
            format!("{} ({:.3} ms)", sample.report_line(), sample.elapsed_ms())
        } else {
            sample.report_line()
        }
    }

    fn page_header(&self, index: usize, url: &str) -> String {
        format!("Page {}: {}", index, url)
    }

    fn page_count(&self, count: usize, what: &str) -> String {
        format!("There are {} {} on this page", count, what)
    }

    fn page_summary(&self, summary: &PageSummary) -> String {
        format!("Summary: {}", summary)
    }

    fn document_written(&self, lines: u32, path: &Path) -> String {
        format!("You can find {} lines of text in file '{}'", lines, path.display())
    }

    fn warning(&self, message: &str) -> String {
        format!("[WARNING] {}", message)
    }
}
