//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use kubereport_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration files
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A source failed to parse, or a value (such as an unknown format) was rejected
    #[error(transparent)]
    Invalid(#[from] Box<figment::Error>),
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Only report failures
    pub failures_only: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            failures_only: false,
            color: true,
        }
    }
}

/// Complete configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub output: FileOutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.output.format.is_none());
        assert!(!config.output.failures_only);
        assert!(config.output.color);
    }

    #[test]
    fn test_deserialize_toml() {
        let toml_str = r#"
[output]
format = "tap"
failures_only = true
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Tap));
        assert!(config.output.failures_only);
        assert!(!config.output.color);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let toml_str = r#"
[output]
format = "junit"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
