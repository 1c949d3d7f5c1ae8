//! Validation results and their reporting status

pub mod record;
pub mod result;
pub mod status;

pub use record::NormalizedRecord;
pub use result::{ValidationError, ValidationResult};
pub use status::Status;
