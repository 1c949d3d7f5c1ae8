//! Reads [`ValidationResult`] streams from JSON or JSON Lines input.
//!
//! Accepted shapes:
//! - a JSON array of result objects
//! - a single result object (possibly pretty-printed)
//! - JSON Lines: one result object per non-blank line

use kubereport_domain::ValidationResult;
use serde_json::error::Category;
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading results
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Could not read {origin}: {error}")]
    Io {
        origin: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Invalid JSON in {origin}: {error}")]
    Json {
        origin: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("Invalid JSON in {origin} at line {line}: {error}")]
    JsonLine {
        origin: String,
        line: usize,
        #[source]
        error: serde_json::Error,
    },
}

/// Loader for validation results handed over by the validation engine
pub struct ResultReader;

impl ResultReader {
    /// Read results from a file
    pub fn read_path(path: &Path) -> Result<Vec<ValidationResult>, ReadError> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|error| ReadError::Io {
            origin: origin.clone(),
            error,
        })?;
        Self::parse(&content, &origin)
    }

    /// Read results from any reader, e.g. stdin
    pub fn read_from<R: Read>(mut reader: R, origin: &str) -> Result<Vec<ValidationResult>, ReadError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|error| ReadError::Io {
                origin: origin.to_string(),
                error,
            })?;
        Self::parse(&content, origin)
    }

    /// Parse results from already-loaded text
    pub fn parse(content: &str, origin: &str) -> Result<Vec<ValidationResult>, ReadError> {
        let trimmed = content.trim_start();

        if trimmed.starts_with('[') {
            let results: Vec<ValidationResult> =
                serde_json::from_str(content).map_err(|error| ReadError::Json {
                    origin: origin.to_string(),
                    error,
                })?;
            debug!("Read {} results from {} (array)", results.len(), origin);
            return Ok(results);
        }

        // A lone object may span several lines
        if trimmed.starts_with('{') {
            match serde_json::from_str::<ValidationResult>(content) {
                Ok(result) => {
                    debug!("Read 1 result from {} (object)", origin);
                    return Ok(vec![result]);
                }
                // Well-formed JSON of the wrong shape; JSONL would only blur the error
                Err(error) if error.classify() == Category::Data => {
                    return Err(ReadError::Json {
                        origin: origin.to_string(),
                        error,
                    });
                }
                // Trailing values mean JSON Lines
                Err(_) => {}
            }
        }

        let mut results = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let result = serde_json::from_str(line).map_err(|error| ReadError::JsonLine {
                origin: origin.to_string(),
                line: index + 1,
                error,
            })?;
            results.push(result);
        }

        debug!("Read {} results from {} (jsonl)", results.len(), origin);
        Ok(results)
    }
}
