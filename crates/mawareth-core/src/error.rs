//! # Error Types
//!
//! Domain-specific error types for mawareth-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mawareth-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  mawareth-report errors (separate crate)                               │
//! │  └── ReportError      - Export/serialization failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → host application → Frontend       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. The engine itself never fails: `calculate_inheritance` returns no
//!    `Result`. Errors exist only at the construction/validation boundary,
//!    before the engine is invoked.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations surfaced to the host
/// application. They should be caught and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Heir list has exceeded the maximum supported size.
    #[error("Heir list cannot have more than {max} entries")]
    TooManyHeirs { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements.
/// Used for early validation before the engine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    ///
    /// ## When This Occurs
    /// - Estate value of 0 or less submitted from the calculator form
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    ///
    /// ## When This Occurs
    /// - Estate value parsed from free text reached the boundary unparsed
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set.
    ///
    /// ## When This Occurs
    /// - An unrecognized relationship or gender string arrives from the
    ///   wire. Construction fails here instead of silently dropping the
    ///   heir from the distribution.
    #[error("{field} '{value}' is not recognized")]
    NotAllowed { field: String, value: String },

    /// Duplicate value (e.g., duplicate heir id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::TooManyHeirs { max: 50 };
        assert_eq!(err.to_string(), "Heir list cannot have more than 50 entries");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NotAllowed {
            field: "relationship".to_string(),
            value: "cousin".to_string(),
        };
        assert_eq!(err.to_string(), "relationship 'cousin' is not recognized");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "estate value".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
