//! Presentation-level configuration
//!
//! Resolved settings for building a reporter.

use kubereport_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output protocol
    pub format: OutputFormat,
    /// Suppress valid/skipped notices
    pub failures_only: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Stdout,
            failures_only: false,
            color: true,
        }
    }
}
