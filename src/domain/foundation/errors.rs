//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// A survey answer failed validation.
///
/// Always names the offending field so callers can point the user at it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a whole number, got {actual}")]
    NotWholeNumber { field: &'static str, actual: f64 },

    #[error("Field '{field}' has unrecognized value '{value}', expected one of: {expected}")]
    UnrecognizedValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing(field: &'static str) -> Self {
        ValidationError::MissingField { field }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: &'static str, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field,
            min,
            max,
            actual,
        }
    }

    /// Creates an unrecognized value error listing the accepted values.
    pub fn unrecognized(field: &'static str, value: impl Into<String>, expected: &[&str]) -> Self {
        ValidationError::UnrecognizedValue {
            field,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// The survey field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotWholeNumber { field, .. }
            | ValidationError::UnrecognizedValue { field, .. } => field,
        }
    }

    /// Why the field was rejected, without the field name.
    pub fn reason(&self) -> String {
        match self {
            ValidationError::MissingField { .. } => "value is required".to_string(),
            ValidationError::OutOfRange {
                min, max, actual, ..
            } => format!("must be between {} and {}, got {}", min, max, actual),
            ValidationError::NotWholeNumber { actual, .. } => {
                format!("must be a whole number, got {}", actual)
            }
            ValidationError::UnrecognizedValue {
                value, expected, ..
            } => format!("unrecognized value '{}', expected one of: {}", value, expected),
        }
    }
}

/// A vector did not have the length the scaling parameters were fitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Feature vector has {actual} elements, scaler expects {expected}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// The classifier produced an index the label map cannot decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Label index {index} is outside the label map bounds [0, {len})")]
pub struct UnknownLabelIndex {
    pub index: usize,
    pub len: usize,
}

/// Stable error codes surfaced to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    ValidationFailed,
    MalformedRequest,

    // Artifact errors
    DimensionMismatch,
    InferenceFailed,
    UnknownLabelIndex,

    // Infrastructure errors
    InternalError,
}

impl ErrorCode {
    /// True for codes caused by the caller's input rather than the loaded artifacts.
    pub fn is_input_fault(&self) -> bool {
        matches!(self, ErrorCode::ValidationFailed | ErrorCode::MalformedRequest)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MalformedRequest => "MALFORMED_REQUEST",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::InferenceFailed => "INFERENCE_FAILED",
            ErrorCode::UnknownLabelIndex => "UNKNOWN_LABEL_INDEX",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}
