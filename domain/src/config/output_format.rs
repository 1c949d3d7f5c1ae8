//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output protocol used to report validation results
///
/// The set is closed: anything outside it is either rejected
/// ([`FromStr`](std::str::FromStr)) or mapped to the console protocol
/// ([`OutputFormat::from_name_or_default`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console lines (default)
    #[default]
    Stdout,
    /// A single tab-indented JSON array
    Json,
    /// Test Anything Protocol stream
    Tap,
}

impl OutputFormat {
    /// Wire name of this format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Stdout => "stdout",
            OutputFormat::Json => "json",
            OutputFormat::Tap => "tap",
        }
    }

    /// Get list of all valid format names
    pub fn valid_names() -> &'static [&'static str] {
        &["stdout", "json", "tap"]
    }

    /// Resolve a format name, falling back to [`OutputFormat::Stdout`]
    /// for anything unrecognized.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(OutputFormat::Stdout),
            "json" => Ok(OutputFormat::Json),
            "tap" => Ok(OutputFormat::Tap),
            _ => Err(DomainError::InvalidOutputFormat {
                given: s.to_string(),
                valid: Self::valid_names().join(", "),
            }),
        }
    }
}
