//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// The three independent flows the binary can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    /// Plain random text generator
    Generate,
    /// Random text generator with leveled log records
    GenerateDiagnostics,
    /// Page metrics sampler
    Measure,
}

impl Flow {
    /// Stem of the log file this flow writes, if any
    pub fn log_file_stem(&self) -> Option<&'static str> {
        match self {
            Flow::Generate => None,
            Flow::GenerateDiagnostics => Some("randomtext"),
            Flow::Measure => Some("pagemetrics"),
        }
    }

    /// How prompts in this flow react to invalid input
    pub fn retry_policy(&self) -> RetryPolicy {
        match self {
            Flow::Generate => RetryPolicy::FailFast,
            Flow::GenerateDiagnostics | Flow::Measure => RetryPolicy::Reprompt,
        }
    }

    /// Name used for the logger and session messages
    pub fn name(&self) -> &'static str {
        match self {
            Flow::Generate => "generate",
            Flow::GenerateDiagnostics => "generate-diagnostics",
            Flow::Measure => "measure",
        }
    }
}

/// Behaviour of an interactive prompt on invalid input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Return the validation error to the caller
    FailFast,
    /// Print a notice and ask again until valid input or end-of-input
    Reprompt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_log_files() {
        assert_eq!(Flow::Generate.log_file_stem(), None);
        assert_eq!(Flow::GenerateDiagnostics.log_file_stem(), Some("randomtext"));
        assert_eq!(Flow::Measure.log_file_stem(), Some("pagemetrics"));
    }

    #[test]
    fn test_flow_retry_policy() {
        assert_eq!(Flow::Generate.retry_policy(), RetryPolicy::FailFast);
        assert_eq!(Flow::GenerateDiagnostics.retry_policy(), RetryPolicy::Reprompt);
        assert_eq!(Flow::Measure.retry_policy(), RetryPolicy::Reprompt);
    }
}
