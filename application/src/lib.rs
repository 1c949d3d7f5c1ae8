//! Application layer for kubereport
//!
//! This crate contains the reporting use case and the port definitions
//! that reporters and output adapters implement.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    output_sink::{CaptureSink, OutputSink},
    result_reporter::{ReportError, ResultReporter},
};
pub use use_cases::report_results::{ReportResultsUseCase, ReportSummary};
