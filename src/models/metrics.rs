//! Timing samples and page summaries produced by the measure flow

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One instrumented call: what ran and how long it took
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    pub operation: String,
    pub elapsed: Duration,
}

impl TimingSample {
    pub fn new<S: Into<String>>(operation: S, elapsed: Duration) -> Self {
        Self {
            operation: operation.into(),
            elapsed,
        }
    }

    /// Elapsed seconds rounded to millisecond precision
    pub fn seconds(&self) -> f64 {
        (self.elapsed.as_secs_f64() * 1000.0).round() / 1000.0
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// `<name> executed in <seconds> seconds`
    pub fn report_line(&self) -> String {
        format!("{} executed in {:.3} seconds", self.operation, self.seconds())
    }
}

/// Element counts for one fetched page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    /// Number of `<a>` elements
    pub links: usize,
    /// Number of `<h1>` elements
    pub headers: usize,
    /// Number of `<p>` elements
    pub paragraphs: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "links={} headers={} paragraphs={}",
            self.links, self.headers, self.paragraphs
        )
    }
}
