//! TAP (Test Anything Protocol) reporter for validation results
//!
//! Every error of an invalid record becomes its own `not ok` line; every
//! other record is a single `ok` line. The plan line counts lines that way.

use super::buffer::RecordBuffer;
use kubereport_application::{OutputSink, ReportError, ResultReporter};
use kubereport_domain::{NormalizedRecord, Status, ValidationResult};

/// Buffers records and writes a TAP stream on flush.
///
/// The buffer is kept after a flush, so flushing again re-emits the same stream.
pub struct TapReporter {
    sink: Box<dyn OutputSink>,
    buffer: RecordBuffer,
}

impl TapReporter {
    pub fn new(sink: Box<dyn OutputSink>, failures_only: bool) -> Self {
        Self {
            sink,
            buffer: RecordBuffer::new(failures_only),
        }
    }
}

/// Render records as TAP lines, plan first.
///
/// An empty slice renders nothing at all, not even a plan.
pub fn render_tap(records: &[NormalizedRecord]) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }

    let total: usize = records.iter().map(NormalizedRecord::tap_lines).sum();
    let mut lines = Vec::with_capacity(total + 1);
    lines.push(format!("1..{}", total));

    let mut count = 0;
    for record in records {
        count += 1;
        let kind_marker = if record.kind.is_empty() {
            String::new()
        } else {
            format!(" ({})", record.kind)
        };

        match record.status {
            Status::Valid => {
                lines.push(format!("ok {} - {}{}", count, record.filename, kind_marker));
            }
            Status::Skipped => {
                lines.push(format!(
                    "ok {} - {}{} # SKIP",
                    count, record.filename, kind_marker
                ));
            }
            Status::Invalid => {
                for (i, error) in record.errors.iter().enumerate() {
                    lines.push(format!(
                        "not ok {} - {}{} - {}",
                        count, record.filename, kind_marker, error
                    ));
                    // The next record's own increment covers the last error
                    if i + 1 != record.errors.len() {
                        count += 1;
                    }
                }
            }
        }
    }

    lines
}

impl ResultReporter for TapReporter {
    fn put(&mut self, result: &ValidationResult) -> Result<(), ReportError> {
        self.buffer.accept(result);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ReportError> {
        let lines = render_tap(self.buffer.records());
        if lines.is_empty() {
            return Ok(());
        }

        // One write for the whole stream so the plan never goes out alone
        self.sink.write_line(&lines.join("\n"))?;
        Ok(())
    }
}
