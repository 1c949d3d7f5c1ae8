//! Configuration file loading for kubereport
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `KUBEREPORT_OUTPUT__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./kubereport.toml` or `./.kubereport.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/kubereport/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;
