//! Data models and structures for the sample flows

pub mod config;
pub mod document;
pub mod metrics;

// Re-export main model types
pub use config::Config;
pub use document::{Document, DocumentShape, Line};
pub use metrics::{PageSummary, TimingSample};
