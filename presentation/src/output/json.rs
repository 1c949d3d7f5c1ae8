//! JSON reporter for validation results

use super::buffer::RecordBuffer;
use kubereport_application::{OutputSink, ReportError, ResultReporter};
use kubereport_domain::{NormalizedRecord, ValidationResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Buffers records and writes them as one tab-indented JSON array on flush.
///
/// The buffer is kept after a flush, so flushing again re-emits the same array.
pub struct JsonReporter {
    sink: Box<dyn OutputSink>,
    buffer: RecordBuffer,
}

impl JsonReporter {
    pub fn new(sink: Box<dyn OutputSink>, failures_only: bool) -> Self {
        Self {
            sink,
            buffer: RecordBuffer::new(failures_only),
        }
    }
}

/// Render records as a JSON array indented with tabs
pub fn render_json(records: &[NormalizedRecord]) -> Result<String, ReportError> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    records.serialize(&mut serializer)?;

    // serde_json only ever emits UTF-8
    String::from_utf8(out)
        .map_err(|e| ReportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

impl ResultReporter for JsonReporter {
    fn put(&mut self, result: &ValidationResult) -> Result<(), ReportError> {
        self.buffer.accept(result);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ReportError> {
        let output = render_json(self.buffer.records())?;
        self.sink.write_line(&output)?;
        Ok(())
    }
}
