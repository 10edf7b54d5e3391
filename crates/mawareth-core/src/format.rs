//! # Display Formatting
//!
//! Presentation helpers consumed by the rendering layer: currency,
//! percentage, and fraction-to-text formatting.
//!
//! ## Note
//! These are display conveniences, not part of the engine contract. The
//! engine reports raw `f64` shares and amounts; only the edges of the
//! system turn them into strings.

// =============================================================================
// Currency
// =============================================================================

/// Formats an amount as whole Egyptian pounds with digit grouping.
///
/// ## Rules
/// - Rounded to the nearest whole pound (estate documents carry no piasters)
/// - Thousands separated by commas
/// - `" EGP"` suffix
///
/// ## Example
/// ```rust
/// use mawareth_core::format::format_currency;
///
/// assert_eq!(format_currency(2_000_000.0), "2,000,000 EGP");
/// assert_eq!(format_currency(1234.56), "1,235 EGP");
/// ```
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped.push_str(" EGP");
    grouped
}

// =============================================================================
// Percentage
// =============================================================================

/// Formats a percentage value to two decimal places with a `%` suffix.
///
/// Takes the already-scaled percentage (e.g. `33.33`), not the fraction.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

// =============================================================================
// Fraction
// =============================================================================

/// The canonical fractions that appear in Faraid shares, in lookup order.
///
/// Stored as rational numerator/denominator pairs and compared with an
/// epsilon tolerance, so a computed `1/3` (0.3333…) matches its label
/// without any string-keyed float comparison.
const FRACTION_LABELS: [(u32, u32, &str); 9] = [
    (1, 2, "1/2"),
    (1, 3, "1/3"),
    (2, 3, "2/3"),
    (1, 4, "1/4"),
    (3, 4, "3/4"),
    (1, 6, "1/6"),
    (5, 6, "5/6"),
    (1, 8, "1/8"),
    (7, 8, "7/8"),
];

/// Tolerance for matching a decimal share against the canonical fractions.
/// Half of one thousandth: the same resolution as matching a value rounded
/// to three decimal places.
const FRACTION_EPSILON: f64 = 5e-4;

/// Renders a fractional share as its canonical fraction text.
///
/// Values within [`FRACTION_EPSILON`] of a known Faraid fraction map to its
/// label ("1/2", "2/3", …); anything else falls back to a one-decimal
/// percentage string.
///
/// ## Example
/// ```rust
/// use mawareth_core::format::format_fraction;
///
/// assert_eq!(format_fraction(1.0 / 3.0), "1/3");
/// assert_eq!(format_fraction(0.125), "1/8");
/// assert_eq!(format_fraction(0.2), "20.0%");
/// ```
pub fn format_fraction(decimal: f64) -> String {
    for (numerator, denominator, label) in FRACTION_LABELS {
        if (decimal - numerator as f64 / denominator as f64).abs() < FRACTION_EPSILON {
            return label.to_string();
        }
    }
    format!("{:.1}%", decimal * 100.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
