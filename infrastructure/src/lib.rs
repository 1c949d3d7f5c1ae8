//! Infrastructure layer for kubereport
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus result loading and configuration
//! file handling.

pub mod config;
pub mod results;
pub mod sink;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig};
pub use results::{ReadError, ResultReader};
pub use sink::{StdoutSink, WriterSink};
