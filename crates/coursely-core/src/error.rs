//! # Error Types
//!
//! Domain-specific error types for coursely-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coursely-core errors (this file)                                      │
//! │  └── ValidationError  - Form input failures (before any request)       │
//! │                                                                         │
//! │  coursely-client errors (separate crate)                               │
//! │  └── ApiError         - Classified backend / transport failures        │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError::Validation → screen message         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for coursely-core operations.
pub type CoreResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements. They are
/// raised before a request is sent, so the backend never sees the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Two fields that must agree do not (password confirmation).
    #[error("{field} does not match {other}")]
    Mismatch { field: String, other: String },

    /// Invalid format (e.g., an email without `@`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: &str) -> Self {
        ValidationError::Required {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("email");
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        };
        assert_eq!(err.to_string(), "password must be at least 6 characters");

        let err = ValidationError::Mismatch {
            field: "confirm_password".to_string(),
            other: "password".to_string(),
        };
        assert_eq!(err.to_string(), "confirm_password does not match password");
    }
}
