//! Report results use case
//!
//! Drives a reporter over a stream of validation results: one `put` per
//! result in arrival order, then a single `flush`.

use crate::ports::result_reporter::{ReportError, ResultReporter};
use kubereport_domain::{Status, ValidationResult};
use tracing::{debug, info};

/// Per-status tally of a reporting run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub valid: usize,
    pub invalid: usize,
    pub skipped: usize,
}

impl ReportSummary {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Valid => self.valid += 1,
            Status::Invalid => self.invalid += 1,
            Status::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid + self.skipped
    }

    /// True when at least one document failed validation
    pub fn has_failures(&self) -> bool {
        self.invalid > 0
    }
}

/// Use case for reporting a batch of validation results
pub struct ReportResultsUseCase<R: ResultReporter> {
    reporter: R,
}

impl<R: ResultReporter> ReportResultsUseCase<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Report every result, then flush once.
    ///
    /// The first reporter error aborts the run; nothing is retried.
    pub fn execute<'a, I>(&mut self, results: I) -> Result<ReportSummary, ReportError>
    where
        I: IntoIterator<Item = &'a ValidationResult>,
    {
        let mut summary = ReportSummary::default();

        for result in results {
            let status = result.status();
            debug!(file = %result.file_name, %status, "Reporting result");
            self.reporter.put(result)?;
            summary.record(status);
        }

        self.reporter.flush()?;

        info!(
            valid = summary.valid,
            invalid = summary.invalid,
            skipped = summary.skipped,
            "Reported {} results",
            summary.total()
        );

        Ok(summary)
    }

    /// Give back the reporter
    pub fn into_inner(self) -> R {
        self.reporter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubereport_domain::ValidationError;

    /// Records the call sequence
    #[derive(Default)]
    struct RecordingReporter {
        calls: Vec<String>,
        fail_on_put: bool,
    }

    impl ResultReporter for RecordingReporter {
        fn put(&mut self, result: &ValidationResult) -> Result<(), ReportError> {
            if self.fail_on_put {
                return Err(ReportError::Io(std::io::Error::other("boom")));
            }
            self.calls.push(format!("put {}", result.file_name));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ReportError> {
            self.calls.push("flush".to_string());
            Ok(())
        }
    }

    fn sample() -> Vec<ValidationResult> {
        vec![
            ValidationResult::new("a.yaml", "Pod").validated(),
            ValidationResult::new("b.yaml", ""),
            ValidationResult::new("c.yaml", "Deployment")
                .validated()
                .with_errors(vec![ValidationError::new("spec", "err1")]),
            ValidationResult::new("d.yaml", "Widget"),
        ]
    }

    #[test]
    fn test_puts_in_order_then_flushes_once() {
        let results = sample();
        let mut use_case = ReportResultsUseCase::new(RecordingReporter::default());
        use_case.execute(&results).unwrap();

        let reporter = use_case.into_inner();
        assert_eq!(
            reporter.calls,
            vec!["put a.yaml", "put b.yaml", "put c.yaml", "put d.yaml", "flush"]
        );
    }

    #[test]
    fn test_summary_counts_statuses() {
        let results = sample();
        let mut use_case = ReportResultsUseCase::new(RecordingReporter::default());
        let summary = use_case.execute(&results).unwrap();

        assert_eq!(
            summary,
            ReportSummary {
                valid: 1,
                invalid: 1,
                skipped: 2
            }
        );
        assert_eq!(summary.total(), 4);
        assert!(summary.has_failures());
    }

    #[test]
    fn test_empty_input_still_flushes() {
        let results: Vec<ValidationResult> = Vec::new();
        let mut use_case = ReportResultsUseCase::new(RecordingReporter::default());
        let summary = use_case.execute(&results).unwrap();

        assert!(!summary.has_failures());
        assert_eq!(use_case.into_inner().calls, vec!["flush"]);
    }

    #[test]
    fn test_put_error_aborts_before_flush() {
        let results = sample();
        let reporter = RecordingReporter {
            fail_on_put: true,
            ..Default::default()
        };
        let mut use_case = ReportResultsUseCase::new(reporter);

        assert!(use_case.execute(&results).is_err());
        assert!(use_case.into_inner().calls.is_empty());
    }
}
