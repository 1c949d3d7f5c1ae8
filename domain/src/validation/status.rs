//! Status classification of validation results

use super::result::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting status derived from a [`ValidationResult`]
///
/// Never stored on the result itself; always recomputed with [`Status::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
    Skipped,
}

impl Status {
    /// Classify a result.
    ///
    /// Rule order matters: an empty document or one that was never checked
    /// against a schema is `Skipped` even if it carries errors.
    pub fn of(result: &ValidationResult) -> Self {
        if result.kind.is_empty() {
            return Status::Skipped;
        }

        if !result.validated_against_schema {
            return Status::Skipped;
        }

        if !result.errors.is_empty() {
            return Status::Invalid;
        }

        Status::Valid
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Valid => "valid",
            Status::Invalid => "invalid",
            Status::Skipped => "skipped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
