//! Domain layer for kubereport
//!
//! This crate contains the validation result model and its classification.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **ValidationResult**: outcome of checking one document, produced by an
//!   external schema-validation engine
//! - **Status**: `valid`, `invalid` or `skipped`, always derived from a result
//! - **NormalizedRecord**: the flattened form buffered by structured reporters

pub mod config;
pub mod core;
pub mod validation;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use validation::{NormalizedRecord, Status, ValidationError, ValidationResult};
