//! # Report Error Types
//!
//! Error types for the export/rendering boundary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  serde_json::Error                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReportError (this module) ← Adds context                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Host application shows "Failed to generate export"                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Export/rendering failures.
///
/// Text rendering is infallible; only the serialized JSON surface carries
/// an error path, propagated from `serde_json`.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The calculation envelope could not be serialized.
    #[error("Failed to serialize calculation: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
