//! Record buffer shared by the JSON and TAP reporters

use kubereport_domain::{NormalizedRecord, Status, ValidationResult};

/// Ordered buffer of normalized records awaiting flush.
///
/// Only `valid` results are kept, and only when not in failures-only mode.
/// Invalid and skipped results never reach the buffer.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    records: Vec<NormalizedRecord>,
    failures_only: bool,
}

impl RecordBuffer {
    pub fn new(failures_only: bool) -> Self {
        Self {
            records: Vec::new(),
            failures_only,
        }
    }

    /// Buffer `result` if the policy admits it. Returns whether it was kept.
    pub fn accept(&mut self, result: &ValidationResult) -> bool {
        let record = NormalizedRecord::from(result);
        if record.status == Status::Valid && !self.failures_only {
            self.records.push(record);
            true
        } else {
            false
        }
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
