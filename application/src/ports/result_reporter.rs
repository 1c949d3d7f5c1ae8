//! Result reporter port
//!
//! A reporter accepts validation results one at a time, in processing order,
//! and is flushed exactly once after the last result.

use kubereport_domain::ValidationResult;
use thiserror::Error;

/// Errors surfaced by reporters
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives validation results and renders them in some output protocol.
///
/// Calls are strictly sequential; implementations do no locking of their own.
pub trait ResultReporter {
    /// Accept one validation result.
    fn put(&mut self, result: &ValidationResult) -> Result<(), ReportError>;

    /// Emit anything accumulated so far.
    ///
    /// Buffering implementations keep their buffer, so a repeated flush
    /// re-emits the same output.
    fn flush(&mut self) -> Result<(), ReportError>;
}
