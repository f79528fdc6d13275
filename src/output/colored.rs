//! Colored formatter implementation with terminal color support

use super::formatter::{FormattingOptions, ReportFormatter};
use crate::models::{PageSummary, TimingSample};
use colored::*;
use std::path::Path;

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub prompt: Color,
    pub value: Color,
    pub timing: Color,
    pub warning: Color,
    pub header: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            prompt: Color::Green,
            value: Color::Yellow,
            timing: Color::Red,
            warning: Color::Yellow,
            header: Color::Cyan,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Create a colored formatter with custom color scheme
    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        Self { options, color_scheme }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }
}

impl ReportFormatter for ColoredFormatter {
    fn prompt(&self, question: &str) -> String {
        format!("{} ", self.colorize(question.trim_end(), self.color_scheme.prompt))
    }

    fn input_error(&self, message: &str) -> String {
        if self.options.enable_color {
            message.white().on_red().to_string()
        } else {
            message.to_string()
        }
    }

    fn timing(&self, sample: &TimingSample) -> String {
        let line = if self.options.verbose_mode {
            format!("{} ({:.3} ms)", sample.report_line(), sample.elapsed_ms())
        } else {
            sample.report_line()
        };
        self.colorize(&line, self.color_scheme.timing).to_string()
    }

    fn page_header(&self, index: usize, url: &str) -> String {
        format!(
            "{} {}",
            self.colorize(&format!("Page {}:", index), self.color_scheme.header).bold(),
            self.colorize(url, self.color_scheme.value)
        )
    }

    fn page_count(&self, count: usize, what: &str) -> String {
        format!(
            "{}{}{}",
            self.colorize("There are ", self.color_scheme.prompt),
            self.colorize(&count.to_string(), self.color_scheme.value),
            self.colorize(&format!(" {} on this page", what), self.color_scheme.prompt)
        )
    }

    fn page_summary(&self, summary: &PageSummary) -> String {
        format!(
            "{} {}",
            self.colorize("Summary:", self.color_scheme.prompt),
            self.colorize(&summary.to_string(), self.color_scheme.value)
        )
    }

    fn document_written(&self, lines: u32, path: &Path) -> String {
        format!(
            "{}{}",
            self.colorize(&format!("You can find {} lines of text in file '", lines), self.color_scheme.prompt),
            self.colorize(&format!("{}'", path.display()), self.color_scheme.value)
        )
    }

    fn warning(&self, message: &str) -> String {
        format!("{} {}", self.colorize("[WARNING]", self.color_scheme.warning).bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn formatter(enable_color: bool) -> ColoredFormatter {
        ColoredFormatter::new(FormattingOptions { enable_color, verbose_mode: false })
    }

    #[test]
    fn test_colored_text_keeps_content() {
        ::colored::control::set_override(true);
        let f = formatter(true);

        let sample = TimingSample::new("process_page", Duration::from_millis(12));
        let line = f.timing(&sample);
        assert!(line.contains("process_page executed in 0.012 seconds"));
        assert!(line.contains("\x1b["));

        let count = f.page_count(5, "paragraphs");
        assert!(count.contains("There are "));
        assert!(count.contains('5'));
        assert!(count.contains(" paragraphs on this page"));
        ::colored::control::unset_override();
    }

    #[test]
    fn test_disabled_color_is_plain() {
        let f = formatter(false);
        let summary = PageSummary { links: 3, headers: 1, paragraphs: 5 };
        assert_eq!(f.page_summary(&summary), "Summary: links=3 headers=1 paragraphs=5");
        assert_eq!(
            f.input_error("Oops! This doesn't appear to be a number..."),
            "Oops! This doesn't appear to be a number..."
        );
    }

    #[test]
    fn test_custom_scheme() {
        let scheme = ColorScheme { timing: Color::Blue, ..Default::default() };
        let f = ColoredFormatter::with_color_scheme(FormattingOptions::default(), scheme);
        assert_eq!(f.color_scheme.timing, Color::Blue);
    }
}
