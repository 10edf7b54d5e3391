//! # mawareth-report: Export/Share Rendering Boundary
//!
//! Renders a finished [`EstateCalculation`](mawareth_core::EstateCalculation)
//! into the serialized surfaces collaborators consume:
//!
//! - the pretty-printed JSON envelope (PDF/export pipeline)
//! - the clipboard/share summary text
//! - the printable plain-text distribution report
//!
//! No PDFs are typeset here and nothing is displayed; this crate stops at
//! strings and hands them to the host application.
//!
//! ## Example
//!
//! ```rust
//! use mawareth_core::faraid::calculate_inheritance;
//! use mawareth_core::{Gender, Heir, Relationship};
//! use mawareth_report::share_summary;
//!
//! let heirs = vec![Heir::new("1", "Omar", Relationship::Son, Gender::Male)];
//! let calculation = calculate_inheritance(500_000.0, &heirs);
//!
//! assert_eq!(
//!     share_summary(&calculation),
//!     "Estate Calculation Results\nTotal Estate: 500,000 EGP\n1 heirs"
//! );
//! ```

pub mod error;
pub mod render;

pub use error::{ReportError, ReportResult};
pub use render::{render_report, share_summary, to_json};
