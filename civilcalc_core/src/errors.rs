//! # Error Types
//!
//! Structured error types for civilcalc_core.
//!
//! The element calculation functions themselves are infallible (pure
//! arithmetic over already-validated inputs); errors here cover the gating
//! workflow (`ValidationFailed`), reference-data lookups for callers that
//! opt into strict behavior, and the file-backed settings/calculation
//! stores.
//!
//! ## Example
//!
//! ```rust
//! use civilcalc_core::errors::{CalcError, CalcResult};
//! use civilcalc_core::inputs::ValidationErrors;
//!
//! fn gate(errors: ValidationErrors) -> CalcResult<()> {
//!     if !errors.is_empty() {
//!         return Err(CalcError::validation_failed(errors));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inputs::ValidationErrors;

/// Result type alias for civilcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine and store operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// One or more input constraints failed; the calculation was not run
    #[error("Input validation failed ({} field(s))", errors.len())]
    ValidationFailed { errors: ValidationErrors },

    /// Bar designation not present in the reference table
    #[error("Unknown bar size: {designation}")]
    UnknownBarSize { designation: String },

    /// Anchor designation not present in the reference table
    #[error("Unknown anchor size: {designation}")]
    UnknownAnchorSize { designation: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create a ValidationFailed error
    pub fn validation_failed(errors: ValidationErrors) -> Self {
        CalcError::ValidationFailed { errors }
    }

    /// Create an UnknownBarSize error
    pub fn unknown_bar_size(designation: impl Into<String>) -> Self {
        CalcError::UnknownBarSize {
            designation: designation.into(),
        }
    }

    /// Create an UnknownAnchorSize error
    pub fn unknown_anchor_size(designation: impl Into<String>) -> Self {
        CalcError::UnknownAnchorSize {
            designation: designation.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CalcError::UnknownBarSize { .. } => "UNKNOWN_BAR_SIZE",
            CalcError::UnknownAnchorSize { .. } => "UNKNOWN_ANCHOR_SIZE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let mut errors = ValidationErrors::new();
        errors.add("width", "Must be a positive number");
        let error = CalcError::validation_failed(errors);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::unknown_bar_size("14mm").error_code(),
            "UNKNOWN_BAR_SIZE"
        );
        assert_eq!(
            CalcError::file_error("read", "a.json", "gone").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_validation_failed_display() {
        let mut errors = ValidationErrors::new();
        errors.add("width", "Must be a positive number");
        errors.add("depth", "Must be a positive number");
        let error = CalcError::validation_failed(errors);
        assert!(error.to_string().contains("2 field(s)"));
    }
}
