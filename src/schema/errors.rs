//! Validation error types
//!
//! `ValidationError` describes why an input object was rejected. Its display
//! form is the human-readable message returned to callers.

use std::fmt;

use thiserror::Error;

/// Result type for object validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    MissingRequiredField,
    TypeMismatch,
    PatternMismatch,
    /// String too short or too long
    LengthOutOfRange,
    /// Number too small or too large
    ValueOutOfRange,
    CustomValidationFailed,
}

impl ValidationErrorKind {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::PatternMismatch => "PATTERN_MISMATCH",
            Self::LengthOutOfRange => "LENGTH_OUT_OF_RANGE",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::CustomValidationFailed => "CUSTOM_VALIDATION_FAILED",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// First violated constraint of an input object
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("'{field}' is required.")]
    MissingRequired { field: String },

    #[error("'{field}' must be of type '{expected}'.")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("'{field}' does not match the pattern.")]
    PatternMismatch { field: String },

    #[error("'{field}' must be at least {min} characters.")]
    TooShort { field: String, min: usize },

    #[error("'{field}' must be at most {max} characters.")]
    TooLong { field: String, max: usize },

    #[error("'{field}' must be at least {min}.")]
    BelowMinimum { field: String, min: f64 },

    #[error("'{field}' must be at most {max}.")]
    AboveMaximum { field: String, max: f64 },

    #[error("Custom validation for '{field}' did not pass.")]
    CustomValidationFailed { field: String },
}

impl ValidationError {
    /// Returns the failure category
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingRequired { .. } => ValidationErrorKind::MissingRequiredField,
            Self::TypeMismatch { .. } => ValidationErrorKind::TypeMismatch,
            Self::PatternMismatch { .. } => ValidationErrorKind::PatternMismatch,
            Self::TooShort { .. } | Self::TooLong { .. } => ValidationErrorKind::LengthOutOfRange,
            Self::BelowMinimum { .. } | Self::AboveMaximum { .. } => {
                ValidationErrorKind::ValueOutOfRange
            }
            Self::CustomValidationFailed { .. } => ValidationErrorKind::CustomValidationFailed,
        }
    }

    /// Returns the name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequired { field }
            | Self::TypeMismatch { field, .. }
            | Self::PatternMismatch { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::CustomValidationFailed { field } => field,
        }
    }
}
