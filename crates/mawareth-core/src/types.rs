//! # Domain Types
//!
//! Core domain types used throughout Mawareth.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌──────────────────┐  │
//! │  │      Heir       │   │  CalculationResult  │   │EstateCalculation │  │
//! │  │  ─────────────  │   │  ─────────────────  │   │ ───────────────  │  │
//! │  │  id (opaque)    │   │  heir_id            │   │  total_estate    │  │
//! │  │  name           │   │  share / percentage │   │  heirs (echoed)  │  │
//! │  │  relationship   │   │  amount             │   │  results         │  │
//! │  │  gender         │   │  basis (citation)   │   │  remaining_estate│  │
//! │  └─────────────────┘   └─────────────────────┘   └──────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  Relationship   │   │     Gender      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Spouse, Son,   │   │  Male           │                             │
//! │  │  Daughter, ...  │   │  Female         │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Contract
//! The front-end is TypeScript. Relationship and gender values travel as
//! `snake_case` strings; the two result types serialize with `camelCase`
//! field names. Every public type exports a TS binding via `ts-rs`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Relationship
// =============================================================================

/// The relationship of an heir to the deceased.
///
/// ## Why a Closed Enum?
/// Relationships arrive from the form as strings. Matching on free strings
/// would let an unrecognized value slip through every rule pass and vanish
/// from the distribution without diagnostic; a closed enum makes unknown
/// values fail at construction time (`FromStr`) instead.
///
/// ## Note
/// `Grandfather` and `Grandmother` are accepted input (the heir form offers
/// them) but receive no distribution rule; the engine records an explicit
/// zero-share row for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Husband or wife of the deceased (disambiguated by gender).
    Spouse,
    Son,
    Daughter,
    Father,
    Mother,
    /// Full brother.
    Brother,
    /// Full sister.
    Sister,
    /// Father's wife, not the heir's own mother. Never inherits.
    Stepmother,
    /// Half-brother sharing the father.
    StepbrotherPaternal,
    /// Half-sister sharing the father.
    StepsisterPaternal,
    /// Half-brother sharing only the mother (uterine).
    StepbrotherMaternal,
    /// Half-sister sharing only the mother (uterine).
    StepsisterMaternal,
    Grandfather,
    Grandmother,
}

impl Relationship {
    /// The wire string for this relationship (matches the serde encoding).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Relationship::Spouse => "spouse",
            Relationship::Son => "son",
            Relationship::Daughter => "daughter",
            Relationship::Father => "father",
            Relationship::Mother => "mother",
            Relationship::Brother => "brother",
            Relationship::Sister => "sister",
            Relationship::Stepmother => "stepmother",
            Relationship::StepbrotherPaternal => "stepbrother_paternal",
            Relationship::StepsisterPaternal => "stepsister_paternal",
            Relationship::StepbrotherMaternal => "stepbrother_maternal",
            Relationship::StepsisterMaternal => "stepsister_maternal",
            Relationship::Grandfather => "grandfather",
            Relationship::Grandmother => "grandmother",
        }
    }

    /// Uterine sibling: shares only the mother with the deceased.
    /// Receives a fixed share independent of descendants or the father.
    #[inline]
    pub const fn is_maternal_sibling(&self) -> bool {
        matches!(
            self,
            Relationship::StepbrotherMaternal | Relationship::StepsisterMaternal
        )
    }

    /// Counts as a brother in the residuary sibling class
    /// (full brothers and paternal half-brothers).
    #[inline]
    pub const fn is_residuary_brother(&self) -> bool {
        matches!(
            self,
            Relationship::Brother | Relationship::StepbrotherPaternal
        )
    }

    /// Counts as a sister in the residuary sibling class
    /// (full sisters and paternal half-sisters).
    #[inline]
    pub const fn is_residuary_sister(&self) -> bool {
        matches!(self, Relationship::Sister | Relationship::StepsisterPaternal)
    }

    /// Grandparent relationships: accepted input, no distribution rule.
    #[inline]
    pub const fn is_grandparent(&self) -> bool {
        matches!(
            self,
            Relationship::Grandfather | Relationship::Grandmother
        )
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = ValidationError;

    /// Parses a wire string into a relationship.
    ///
    /// Unknown values are a construction-time error, never a silent no-op.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spouse" => Ok(Relationship::Spouse),
            "son" => Ok(Relationship::Son),
            "daughter" => Ok(Relationship::Daughter),
            "father" => Ok(Relationship::Father),
            "mother" => Ok(Relationship::Mother),
            "brother" => Ok(Relationship::Brother),
            "sister" => Ok(Relationship::Sister),
            "stepmother" => Ok(Relationship::Stepmother),
            "stepbrother_paternal" => Ok(Relationship::StepbrotherPaternal),
            "stepsister_paternal" => Ok(Relationship::StepsisterPaternal),
            "stepbrother_maternal" => Ok(Relationship::StepbrotherMaternal),
            "stepsister_maternal" => Ok(Relationship::StepsisterMaternal),
            "grandfather" => Ok(Relationship::Grandfather),
            "grandmother" => Ok(Relationship::Grandmother),
            other => Err(ValidationError::NotAllowed {
                field: "relationship".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Gender
// =============================================================================

/// Heir gender.
///
/// Required for `Spouse` (husband vs. wife rule) and for the 2:1
/// male/female residual split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(ValidationError::NotAllowed {
                field: "gender".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Heir
// =============================================================================

/// An heir/claimant to the estate, as collected by the calculator form.
///
/// ## Identity
/// `id` is an opaque caller-supplied string, stable for the lifetime of one
/// calculation. Uniqueness within a heir list is a caller obligation; the
/// engine does not enforce it (duplicate ids produce indistinguishable
/// result rows). `validation::validate_heirs` offers the check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Heir {
    /// Opaque unique identifier, caller-supplied.
    pub id: String,

    /// Display name, free text.
    pub name: String,

    /// Relationship to the deceased.
    pub relationship: Relationship,

    /// Gender of the heir.
    pub gender: Gender,
}

impl Heir {
    /// Convenience constructor used by the host application and tests.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        relationship: Relationship,
        gender: Gender,
    ) -> Self {
        Heir {
            id: id.into(),
            name: name.into(),
            relationship,
            gender,
        }
    }
}

// =============================================================================
// Calculation Result
// =============================================================================

/// One row of the distribution: what a single heir receives, and why.
///
/// Heirs that are evaluated but denied a share (e.g., a stepmother) still
/// appear with `share = 0` and an explanatory basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Copied from the heir's `id`.
    pub heir_id: String,

    /// Copied from the heir's `name`.
    pub name: String,

    /// Copied from the heir's `relationship`.
    pub relationship: Relationship,

    /// Fractional share of the total estate, in `[0, 1]`.
    pub share: f64,

    /// `share * 100`, kept for the front-end's display convenience.
    pub percentage: f64,

    /// `estate_value * share`, same currency unit as the input.
    pub amount: f64,

    /// Human-readable citation of the jurisprudential rule applied.
    pub basis: String,
}

// =============================================================================
// Estate Calculation
// =============================================================================

/// The full output envelope of one calculation.
///
/// Entirely value objects created fresh per call: no persistence, no
/// mutation after construction, no shared ownership. The caller owns
/// everything before and after invoking the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EstateCalculation {
    /// The input estate value, echoed back unchanged.
    pub total_estate: f64,

    /// The input heir list, echoed back unchanged.
    pub heirs: Vec<Heir>,

    /// Distribution rows in fixed pass order (spouse, mother, father,
    /// children, maternal siblings, stepmother, siblings, grandparents).
    pub results: Vec<CalculationResult>,

    /// `estate_value * (1 - allocated)`. Negative when the heir combination
    /// over-allocates (see the engine docs); surfaced, not hidden.
    pub remaining_estate: f64,

    /// When the computation was produced.
    #[ts(as = "String")]
    pub calculation_date: DateTime<Utc>,
}

impl EstateCalculation {
    /// Sum of all allocated fractional shares.
    pub fn allocated_share(&self) -> f64 {
        self.results.iter().map(|r| r.share).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
