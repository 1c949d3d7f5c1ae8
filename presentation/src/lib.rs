//! Presentation layer for kubereport
//!
//! This crate contains CLI definitions and the reporters that render
//! validation results as console text, JSON or TAP.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::{
    console::ConsoleReporter,
    json::JsonReporter,
    manager::{OutputManager, get_output_manager},
    tap::TapReporter,
};
