//! # mawareth-core: Pure Business Logic for Mawareth
//!
//! This crate is the **heart** of Mawareth. It contains the Sharia
//! inheritance (Faraid) allocation engine and its supporting types as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Mawareth Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (TypeScript)                        │   │
//! │  │   Calculator Form ──► Results Table ──► PDF / Share actions    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ mawareth-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  faraid   │  │  format   │  │ validation│  │   │
//! │  │   │   Heir    │  │  engine   │  │  currency │  │   rules   │  │   │
//! │  │   │  Results  │  │  passes   │  │  fraction │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              mawareth-report (Export Boundary)                  │   │
//! │  │         JSON envelope, share summary, text report               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Heir, CalculationResult, EstateCalculation)
//! - [`faraid`] - The inheritance allocation engine
//! - [`format`] - Currency/percentage/fraction display helpers
//! - [`error`] - Domain error types
//! - [`validation`] - Pre-engine input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: the engine is deterministic - same input, same
//!    distribution - and never mutates its arguments
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Total Engine**: `calculate_inheritance` has no error path; all
//!    rejection happens at the validation boundary before it runs
//! 4. **Closed Enums**: relationship and gender are enums, so a malformed
//!    wire value fails at construction instead of silently dropping an heir
//!
//! ## Example Usage
//!
//! ```rust
//! use mawareth_core::faraid::calculate_inheritance;
//! use mawareth_core::{Gender, Heir, Relationship};
//!
//! let heirs = vec![
//!     Heir::new("1", "Aisha", Relationship::Spouse, Gender::Female),
//!     Heir::new("2", "Omar", Relationship::Son, Gender::Male),
//! ];
//!
//! let calc = calculate_inheritance(800_000.0, &heirs);
//!
//! // Wife with children takes 1/8; the son takes the rest
//! assert_eq!(calc.results[0].amount, 100_000.0);
//! assert_eq!(calc.results[1].amount, 700_000.0);
//! assert_eq!(calc.remaining_estate, 0.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod faraid;
pub mod format;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mawareth_core::Heir` instead of
// `use mawareth_core::types::Heir`

pub use error::{CoreError, CoreResult, ValidationError};
pub use faraid::{calculate_inheritance, calculate_inheritance_at};
pub use types::{CalculationResult, EstateCalculation, Gender, Heir, Relationship};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of heirs accepted in one calculation.
///
/// ## Business Reason
/// The calculator form adds heirs one row at a time; a list past this size
/// is a runaway submission, not a real estate. Also bounds result rendering
/// and report size.
pub const MAX_HEIRS: usize = 50;

/// Maximum length of an heir's display name, in characters.
///
/// ## Business Reason
/// Names land verbatim in the distribution table and the exported report;
/// this cap keeps both printable.
pub const MAX_HEIR_NAME_LEN: usize = 200;

/// Tolerance for comparing `f64` fractional shares.
///
/// Shares are plain floating-point fractions, so exact equality against
/// rationals like `1/3` is wrong by construction. Compare within this
/// epsilon instead (the test suites throughout this workspace do).
pub const SHARE_EPSILON: f64 = 1e-9;
