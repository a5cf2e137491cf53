//! Validation error type.

use thiserror::Error;

use crate::error::AppError;

/// A single failed check.
///
/// # Examples
///
/// ```
/// use railway::validation::ValidationError;
///
/// let error = ValidationError::new("name", "Value cannot be empty", "EMPTY_VALUE");
/// assert_eq!(error.to_string(), "name: Value cannot be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the field that failed
    pub field: String,
    /// Human-readable description
    pub message: String,
    /// Stable machine-readable code such as `MIN_LENGTH`
    pub code: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::Validation {
            field: error.field,
            message: error.message,
        }
    }
}
