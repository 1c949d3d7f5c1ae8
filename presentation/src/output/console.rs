//! Console reporter for validation results

use colored::Colorize;
use kubereport_application::{OutputSink, ReportError, ResultReporter};
use kubereport_domain::ValidationResult;

/// Streams one human-readable line per outcome, as results arrive.
///
/// Nothing is buffered, so [`ResultReporter::flush`] has nothing to do.
pub struct ConsoleReporter {
    sink: Box<dyn OutputSink>,
    failures_only: bool,
    color: bool,
}

impl ConsoleReporter {
    pub fn new(sink: Box<dyn OutputSink>, failures_only: bool) -> Self {
        Self {
            sink,
            failures_only,
            color: true,
        }
    }

    /// Enable or disable colored category tags
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn success(&mut self, message: &str) -> Result<(), ReportError> {
        let tag = if self.color {
            "PASS".green().to_string()
        } else {
            "PASS".to_string()
        };
        self.sink.write_line(&format!("{} - {}", tag, message))?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<(), ReportError> {
        let tag = if self.color {
            "WARN".yellow().to_string()
        } else {
            "WARN".to_string()
        };
        self.sink.write_line(&format!("{} - {}", tag, message))?;
        Ok(())
    }
}

impl ResultReporter for ConsoleReporter {
    fn put(&mut self, result: &ValidationResult) -> Result<(), ReportError> {
        if !result.errors.is_empty() {
            let name = result.qualified_name();
            for error in &result.errors {
                self.warn(&format!(
                    "{} contains an invalid {} ({}) - {}",
                    result.file_name, result.kind, name, error
                ))?;
            }
        } else if result.kind.is_empty() && !self.failures_only {
            self.success(&format!("{} contains an empty YAML document", result.file_name))?;
        } else if !result.validated_against_schema {
            self.warn(&format!(
                "{} containing a {} ({}) was not validated against a schema",
                result.file_name,
                result.kind,
                result.qualified_name()
            ))?;
        } else if !self.failures_only {
            self.success(&format!(
                "{} contains a valid {} ({})",
                result.file_name,
                result.kind,
                result.qualified_name()
            ))?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}
