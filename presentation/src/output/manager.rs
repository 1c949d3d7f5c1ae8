//! Reporter selection
//!
//! Maps an [`OutputFormat`] (or a raw format name) to one of the three reporters.

use crate::config::OutputConfig;
use crate::output::console::ConsoleReporter;
use crate::output::json::JsonReporter;
use crate::output::tap::TapReporter;
use kubereport_application::{OutputSink, ReportError, ResultReporter};
use kubereport_domain::{OutputFormat, ValidationResult};

/// The closed set of reporters, one per [`OutputFormat`].
pub enum OutputManager {
    Console(ConsoleReporter),
    Json(JsonReporter),
    Tap(TapReporter),
}

impl OutputManager {
    pub fn new(format: OutputFormat, failures_only: bool, sink: Box<dyn OutputSink>) -> Self {
        match format {
            OutputFormat::Stdout => Self::Console(ConsoleReporter::new(sink, failures_only)),
            OutputFormat::Json => Self::Json(JsonReporter::new(sink, failures_only)),
            OutputFormat::Tap => Self::Tap(TapReporter::new(sink, failures_only)),
        }
    }

    /// Build the reporter described by an [`OutputConfig`]
    pub fn from_config(config: &OutputConfig, sink: Box<dyn OutputSink>) -> Self {
        Self::new(config.format, config.failures_only, sink).with_color(config.color)
    }

    /// Toggle colored output; only the console reporter uses color.
    pub fn with_color(self, color: bool) -> Self {
        match self {
            Self::Console(reporter) => Self::Console(reporter.with_color(color)),
            other => other,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Self::Console(_) => OutputFormat::Stdout,
            Self::Json(_) => OutputFormat::Json,
            Self::Tap(_) => OutputFormat::Tap,
        }
    }
}

/// Select a reporter by format name.
///
/// Unrecognized names get the console reporter; this is not an error.
pub fn get_output_manager(
    format: &str,
    failures_only: bool,
    sink: Box<dyn OutputSink>,
) -> OutputManager {
    OutputManager::new(OutputFormat::from_name_or_default(format), failures_only, sink)
}

impl ResultReporter for OutputManager {
    fn put(&mut self, result: &ValidationResult) -> Result<(), ReportError> {
        match self {
            Self::Console(reporter) => reporter.put(result),
            Self::Json(reporter) => reporter.put(result),
            Self::Tap(reporter) => reporter.put(result),
        }
    }

    fn flush(&mut self) -> Result<(), ReportError> {
        match self {
            Self::Console(reporter) => reporter.flush(),
            Self::Json(reporter) => reporter.flush(),
            Self::Tap(reporter) => reporter.flush(),
        }
    }
}
