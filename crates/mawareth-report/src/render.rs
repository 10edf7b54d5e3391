//! # Calculation Rendering
//!
//! The three serialized surfaces handed to collaborators:
//!
//! - [`to_json`] - the full envelope for the PDF/export pipeline
//! - [`share_summary`] - the short clipboard/share text
//! - [`render_report`] - the plain-text distribution document
//!
//! ## Rendering Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EstateCalculation (from mawareth-core)                                 │
//! │       │                                                                 │
//! │       ├──► to_json ──────────► PDF/export collaborator                 │
//! │       │                                                                 │
//! │       ├──► share_summary ────► clipboard / native share sheet          │
//! │       │                                                                 │
//! │       └──► render_report ────► printable distribution document         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use mawareth_core::format::{format_currency, format_fraction, format_percentage};
use mawareth_core::EstateCalculation;

use crate::error::ReportResult;

// =============================================================================
// JSON Export
// =============================================================================

/// Serializes the full calculation envelope as pretty-printed JSON.
///
/// This is the wire format the PDF/export collaborator consumes; camelCase
/// field names (`totalEstate`, `heirId`, …) are part of the contract with
/// the TypeScript side.
pub fn to_json(calculation: &EstateCalculation) -> ReportResult<String> {
    debug!(
        heirs = calculation.heirs.len(),
        results = calculation.results.len(),
        "Serializing calculation envelope"
    );
    Ok(serde_json::to_string_pretty(calculation)?)
}

// =============================================================================
// Share Summary
// =============================================================================

/// The short text placed on the clipboard or handed to a native share
/// sheet: total estate plus the number of distribution rows.
pub fn share_summary(calculation: &EstateCalculation) -> String {
    format!(
        "Estate Calculation Results\nTotal Estate: {}\n{} heirs",
        format_currency(calculation.total_estate),
        calculation.results.len()
    )
}

// =============================================================================
// Text Report
// =============================================================================

/// Renders the distribution as a printable plain-text document.
///
/// ## Layout
/// Header with the total estate and timestamp, one block per result row
/// (amount, fraction • percentage, legal basis), a remaining-estate section
/// only when something was left undistributed, and the closing disclaimer.
/// Zero-share rows (stepmother, grandparents) are kept: the document should
/// show every heir that was evaluated, including the denied ones.
pub fn render_report(calculation: &EstateCalculation) -> String {
    debug!(
        results = calculation.results.len(),
        "Rendering distribution report"
    );

    let mut lines = vec![
        "ESTATE CALCULATION RESULTS".to_string(),
        "According to Sharia Inheritance Law".to_string(),
        String::new(),
        format!(
            "Total Estate Value: {}",
            format_currency(calculation.total_estate)
        ),
        format!(
            "Calculated: {}",
            calculation.calculation_date.format("%Y-%m-%d %H:%M UTC")
        ),
        String::new(),
        "INHERITANCE DISTRIBUTION".to_string(),
        "------------------------".to_string(),
    ];

    for result in &calculation.results {
        lines.push(String::new());
        lines.push(format!("{} ({})", result.name, result.relationship));
        lines.push(format!("  Amount: {}", format_currency(result.amount)));
        lines.push(format!(
            "  Share: {} \u{2022} {}",
            format_fraction(result.share),
            format_percentage(result.percentage)
        ));
        lines.push(format!("  Legal Basis: {}", result.basis));
    }

    if calculation.remaining_estate > 0.0 {
        lines.push(String::new());
        lines.push("REMAINING ESTATE".to_string());
        lines.push("To be distributed as per state laws or will".to_string());
        lines.push(format_currency(calculation.remaining_estate));
    }

    lines.push(String::new());
    lines.push(
        "Legal Disclaimer: This calculation is based on Sharia inheritance \
         principles and Egyptian law. For official legal proceedings, please \
         consult with a qualified Islamic scholar and legal professional. \
         This tool is for informational purposes only."
            .to_string(),
    );

    lines.join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================
