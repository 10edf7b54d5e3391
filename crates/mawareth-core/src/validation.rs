//! # Validation Module
//!
//! Input validation for the calculator boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty fields, number parsing)                │
//! │  └── Immediate toast feedback ("enter a valid estate value")           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Type validation happens at deserialization (closed enums)         │
//! │  └── Business rule validation before the engine runs                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The engine itself validates NOTHING                          │
//! │  └── calculate_inheritance is total: it accepts whatever arrives       │
//! │                                                                         │
//! │  Defense in depth: by the time the engine runs, input is clean         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine's contract deliberately excludes validation (it never fails);
//! every check a caller may want lives here instead.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Heir;
use crate::{MAX_HEIRS, MAX_HEIR_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Estate Value
// =============================================================================

/// Validates the total estate value before calculation.
///
/// ## Rules
/// - Must be a finite number (no NaN/infinity from upstream parsing)
/// - Must be strictly positive
///
/// ## Example
/// ```rust
/// use mawareth_core::validation::validate_estate_value;
///
/// assert!(validate_estate_value(2_000_000.0).is_ok());
/// assert!(validate_estate_value(0.0).is_err());
/// assert!(validate_estate_value(f64::NAN).is_err());
/// ```
pub fn validate_estate_value(value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "estate value".to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "estate value".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Heir
// =============================================================================

/// Validates a single heir record from the calculator form.
///
/// ## Rules
/// - `id` must not be empty
/// - `name` must not be empty after trimming
/// - `name` must be at most [`MAX_HEIR_NAME_LEN`] characters
///
/// Relationship and gender need no checks here: the closed enums make
/// invalid values unrepresentable (they fail earlier, at parse time).
pub fn validate_heir(heir: &Heir) -> ValidationResult<()> {
    if heir.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    let name = heir.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_HEIR_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_HEIR_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Heir List
// =============================================================================

/// Validates a complete heir list before calculation.
///
/// ## Rules
/// - At least one heir (the form always submits one or more rows)
/// - Every heir passes [`validate_heir`]
/// - Heir ids are unique; duplicate ids would make result rows
///   indistinguishable. The engine never checks this itself; callers that
///   skip this function keep the uniqueness obligation.
pub fn validate_heirs(heirs: &[Heir]) -> ValidationResult<()> {
    if heirs.is_empty() {
        return Err(ValidationError::Required {
            field: "heirs".to_string(),
        });
    }

    let mut seen = HashSet::with_capacity(heirs.len());
    for heir in heirs {
        validate_heir(heir)?;

        if !seen.insert(heir.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "heir id".to_string(),
                value: heir.id.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Calculation Request
// =============================================================================

/// One-stop validation of a calculation request, run by the host
/// application on form submit, immediately before invoking the engine.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Calculator Form: "Calculate Inheritance Shares"                        │
/// │                                                                         │
/// │  (estate_value, heirs[]) submitted                                     │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_calculation_request ← THIS FUNCTION                          │
/// │       │                                                                 │
/// │       ├── bad estate value? → "Please enter a valid estate value"      │
/// │       ├── too many heirs?   → CoreError::TooManyHeirs                  │
/// │       ├── incomplete heir?  → "Please complete all heir information"   │
/// │       │                                                                 │
/// │       └── OK → calculate_inheritance(estate_value, &heirs)             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_calculation_request(estate_value: f64, heirs: &[Heir]) -> CoreResult<()> {
    validate_estate_value(estate_value)?;

    if heirs.len() > MAX_HEIRS {
        return Err(CoreError::TooManyHeirs { max: MAX_HEIRS });
    }

    validate_heirs(heirs)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
