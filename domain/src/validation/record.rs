//! Serialization-ready projection of a validation result

use super::result::ValidationResult;
use super::status::Status;
use serde::{Deserialize, Serialize};

/// Flattened result kept by buffering reporters until flush.
///
/// `errors` is always present, even when empty, so JSON consumers
/// see `"errors": []` rather than a missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub filename: String,
    pub kind: String,
    pub status: Status,
    pub errors: Vec<String>,
}

impl NormalizedRecord {
    /// Number of TAP test lines this record occupies
    pub fn tap_lines(&self) -> usize {
        self.errors.len().max(1)
    }
}

impl From<&ValidationResult> for NormalizedRecord {
    fn from(result: &ValidationResult) -> Self {
        Self {
            filename: result.file_name.clone(),
            kind: result.kind.clone(),
            status: result.status(),
            errors: result.error_strings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_from_valid_result() {
        let r = ValidationResult::new("a.yaml", "Pod").validated();
        let record = NormalizedRecord::from(&r);
        assert_eq!(record.filename, "a.yaml");
        assert_eq!(record.kind, "Pod");
        assert_eq!(record.status, Status::Valid);
        assert!(record.errors.is_empty());
        assert_eq!(record.tap_lines(), 1);
    }

    #[test]
    fn test_serialize_keeps_empty_errors() {
        let r = ValidationResult::new("a.yaml", "Pod").validated();
        let json = serde_json::to_string(&NormalizedRecord::from(&r)).unwrap();
        assert_eq!(
            json,
            r#"{"filename":"a.yaml","kind":"Pod","status":"valid","errors":[]}"#
        );
    }

    #[test]
    fn test_tap_lines_counts_errors() {
        let r = ValidationResult::new("c.yaml", "Deployment")
            .validated()
            .with_errors(vec![
                ValidationError::new("a", "err1"),
                ValidationError::new("b", "err2"),
            ]);
        assert_eq!(NormalizedRecord::from(&r).tap_lines(), 2);
    }
}
