//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid output format '{given}' (valid: {valid})")]
    InvalidOutputFormat { given: String, valid: String },
}
