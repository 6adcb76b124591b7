//! Custom error types for tutor-invoice
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The term calendar and invoice composer never
//! fail; everything here belongs to the storage, service and dispatch layers.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for tutor-invoice operations
#[derive(Error, Debug)]
pub enum TutorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Invoice dispatch errors (stdout or draft files)
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// The requested date falls in a holiday
    #[error("{0} is outside term time")]
    OutsideTerm(NaiveDate),

    /// No template is currently selected
    #[error("No template selected. Run 'tutor-invoice template select <TEMPLATE>' first")]
    NoSelection,

    /// The template store is empty
    #[error("No templates found. Run 'tutor-invoice template add' to create one")]
    NoTemplates,
}

impl TutorError {
    /// Create a "not found" error for billing templates
    pub fn template_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Template",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TutorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tutor-invoice operations
pub type TutorResult<T> = Result<T, TutorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TutorError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TutorError::template_not_found("John Doe");
        assert_eq!(err.to_string(), "Template not found: John Doe");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_outside_term_error() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let err = TutorError::OutsideTerm(date);
        assert_eq!(err.to_string(), "2025-12-31 is outside term time");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TutorError = io_err.into();
        assert!(matches!(err, TutorError::Io(_)));
    }
}
