//! Validation outcome for a single document

use super::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single schema violation reported by the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationError {
    /// Dotted path of the offending field; empty for the document root
    pub field: String,
    /// What is wrong with the field
    pub description: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = if self.field.is_empty() {
            "(root)"
        } else {
            &self.field
        };
        write!(f, "{}: {}", field, self.description)
    }
}

/// Outcome of validating one document against its schema (Value Object)
///
/// Produced by the validation engine and handed to a reporter as-is.
/// Nothing here is looked up again after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Source document identifier
    pub file_name: String,
    /// Resource kind; empty when the document has no recognizable type
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub resource_name: String,
    #[serde(default)]
    pub resource_namespace: String,
    /// True only if a schema was found and validation was attempted
    #[serde(default)]
    pub validated_against_schema: bool,
    /// Violations in the order the engine found them
    #[serde(default)]
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new(file_name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            kind: kind.into(),
            api_version: String::new(),
            resource_name: String::new(),
            resource_namespace: String::new(),
            validated_against_schema: false,
            errors: Vec::new(),
        }
    }

    pub fn with_resource(mut self, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        self.resource_namespace = namespace.into();
        self.resource_name = name.into();
        self
    }

    pub fn validated(mut self) -> Self {
        self.validated_against_schema = true;
        self
    }

    pub fn with_errors(mut self, errors: Vec<ValidationError>) -> Self {
        self.errors = errors;
        self
    }

    /// `[namespace.]name` of the resource, or `unknown` when it has no name
    pub fn qualified_name(&self) -> String {
        if self.resource_name.is_empty() {
            "unknown".to_string()
        } else if self.resource_namespace.is_empty() {
            self.resource_name.clone()
        } else {
            format!("{}.{}", self.resource_namespace, self.resource_name)
        }
    }

    /// Classify this result, see [`Status::of`]
    pub fn status(&self) -> Status {
        Status::of(self)
    }

    /// Errors rendered to their display strings, in order
    pub fn error_strings(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}
