//! # Faraid Engine
//!
//! The Sharia inheritance allocation engine. Given a total estate value and
//! a list of heirs, produces the per-heir distribution (fractional share,
//! percentage, monetary amount, legal basis) plus any undistributed
//! remainder.
//!
//! ## Rule Pass Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Allocation Pipeline                                 │
//! │                                                                         │
//! │  classify heirs (counts + presence flags)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. spouse          fixed share: 1/4, 1/2, 1/8 or 1/4 by gender ×      │
//! │  2. mother          fixed share: 1/6, 1/6 or 1/3          children     │
//! │  3. father          1/6 with children, residual (Asabah) without       │
//! │  4. children        sons/daughters split of the remainder, 2:1         │
//! │  5. uterine sibs    fixed class: 1/6 single, 1/3 split                 │
//! │  6. stepmother      excluded, recorded with share = 0                  │
//! │  7. siblings        residuary class, only without children or father   │
//! │  8. grandparents    accepted input, no rule: recorded with share = 0   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  remainder = estate × (1 − allocated)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pass order is also the result-row order. It is a determinism choice
//! for reproducible output, not a jurisprudential requirement.
//!
//! ## Purity
//! `calculate_inheritance` never fails, never panics, and never mutates its
//! inputs. All shares are plain `f64` fractions; callers comparing against
//! exact fractions should tolerate floating-point error
//! (see [`crate::SHARE_EPSILON`]).
//!
//! ## Known Arithmetic Edges (preserved deliberately)
//! - A father with no children absorbs the full remainder *before* uterine
//!   siblings take their fixed class share, so that combination allocates
//!   more than 100% and `remaining_estate` goes negative. Surfaced, not
//!   detected or repaired.
//! - The daughters-only caps (`min` against the remainder) can leave a
//!   shortfall that becomes `remaining_estate` rather than being
//!   redistributed; classical awl-style proportional reduction is not
//!   implemented.

use chrono::{DateTime, Utc};

use crate::types::{CalculationResult, EstateCalculation, Gender, Heir, Relationship};

// =============================================================================
// Fixed Shares (Fard)
// =============================================================================
// One named constant per explicit-share rule, mirroring the jurisprudential
// share table. Residual (Asabah) amounts are computed, not tabled.

/// Husband's share when the deceased has children (Quran 4:12).
const HUSBAND_WITH_CHILDREN: f64 = 1.0 / 4.0;
/// Husband's share when the deceased has no children (Quran 4:12).
const HUSBAND_NO_CHILDREN: f64 = 1.0 / 2.0;
/// Wife's share when the deceased has children (Quran 4:12).
const WIFE_WITH_CHILDREN: f64 = 1.0 / 8.0;
/// Wife's share when the deceased has no children (Quran 4:12).
const WIFE_NO_CHILDREN: f64 = 1.0 / 4.0;

/// Mother's share when the deceased has children (Quran 4:11).
const MOTHER_WITH_CHILDREN: f64 = 1.0 / 6.0;
/// Mother's share with siblings present but no children (Quran 4:11).
const MOTHER_WITH_SIBLINGS: f64 = 1.0 / 6.0;
/// Mother's share with neither children nor siblings (Quran 4:11).
const MOTHER_ALONE: f64 = 1.0 / 3.0;
/// Father's fixed share when the deceased has children (Quran 4:11).
const FATHER_WITH_CHILDREN: f64 = 1.0 / 6.0;

/// A single daughter's share (Quran 4:11).
const DAUGHTER_SINGLE: f64 = 1.0 / 2.0;
/// Collective share of two or more daughters (Quran 4:11).
const DAUGHTERS_MULTIPLE: f64 = 2.0 / 3.0;

/// A single sister's share of the remainder (Quran 4:176).
const SISTER_SINGLE: f64 = 1.0 / 2.0;
/// Collective share of two or more sisters (Quran 4:176).
const SISTERS_MULTIPLE: f64 = 2.0 / 3.0;

/// A single uterine sibling's share (Quran 4:12).
const UTERINE_SINGLE: f64 = 1.0 / 6.0;
/// Collective share of two or more uterine siblings (Quran 4:12).
const UTERINE_MULTIPLE: f64 = 1.0 / 3.0;

// =============================================================================
// Classification
// =============================================================================

/// Presence flags and counts computed from the heir list in one pass.
///
/// Only full siblings (`Brother`/`Sister`) count toward the mother's
/// sibling test; the step classes have their own passes.
#[derive(Debug, Clone, Copy, Default)]
struct HeirFacts {
    sons: usize,
    daughters: usize,
    has_father: bool,
    full_brothers: usize,
    full_sisters: usize,
}

impl HeirFacts {
    fn classify(heirs: &[Heir]) -> Self {
        let mut facts = HeirFacts::default();
        for heir in heirs {
            match heir.relationship {
                Relationship::Son => facts.sons += 1,
                Relationship::Daughter => facts.daughters += 1,
                Relationship::Father => facts.has_father = true,
                Relationship::Brother => facts.full_brothers += 1,
                Relationship::Sister => facts.full_sisters += 1,
                _ => {}
            }
        }
        facts
    }

    #[inline]
    fn has_children(&self) -> bool {
        self.sons > 0 || self.daughters > 0
    }

    #[inline]
    fn has_full_siblings(&self) -> bool {
        self.full_brothers > 0 || self.full_sisters > 0
    }
}

// =============================================================================
// Pass State
// =============================================================================

/// Read-only context shared by every rule pass.
struct PassContext<'a> {
    estate_value: f64,
    heirs: &'a [Heir],
    facts: HeirFacts,
}

/// The running allocation state threaded through the ordered passes.
///
/// Passes append result rows and advance `allocated` themselves: some rules
/// add their exact fraction, the residuary rules force `allocated` to 1.
#[derive(Default)]
struct Allocation {
    allocated: f64,
    results: Vec<CalculationResult>,
}

impl Allocation {
    /// Fraction of the estate not yet assigned to any heir.
    #[inline]
    fn remaining(&self) -> f64 {
        1.0 - self.allocated
    }

    /// Records a result row for `heir`. Does NOT touch `allocated`;
    /// the calling pass owns that bookkeeping.
    fn record(&mut self, estate_value: f64, heir: &Heir, share: f64, basis: &str) {
        self.results.push(CalculationResult {
            heir_id: heir.id.clone(),
            name: heir.name.clone(),
            relationship: heir.relationship,
            share,
            percentage: share * 100.0,
            amount: estate_value * share,
            basis: basis.to_string(),
        });
    }
}

/// One ordered rule pass over the heir list.
type RulePass = fn(&PassContext<'_>, &mut Allocation);

/// The fixed pass order. Changing this changes observable result ordering.
const PASSES: [RulePass; 8] = [
    spouse_pass,
    mother_pass,
    father_pass,
    children_pass,
    maternal_siblings_pass,
    stepmother_pass,
    siblings_pass,
    grandparents_pass,
];

// =============================================================================
// Public API
// =============================================================================

/// Computes the Faraid distribution for `estate_value` across `heirs`.
///
/// ## Contract
/// - Pure: same inputs always produce the same distribution; the input list
///   is never mutated (it is echoed back, cloned, in the envelope).
/// - Total: no error return, no panic. An empty heir list yields empty
///   results and `remaining_estate == estate_value`.
/// - `estate_value` is expected to be positive; the engine does not reject
///   non-positive values, it simply scales every amount by them. Callers
///   validate first (see [`crate::validation::validate_estate_value`]).
///
/// ## Example
/// ```rust
/// use mawareth_core::faraid::calculate_inheritance;
/// use mawareth_core::{Gender, Heir, Relationship};
///
/// let heirs = vec![Heir::new("1", "Omar", Relationship::Spouse, Gender::Male)];
/// let calc = calculate_inheritance(800_000.0, &heirs);
///
/// // Husband with no children takes 1/2
/// assert_eq!(calc.results[0].amount, 400_000.0);
/// ```
pub fn calculate_inheritance(estate_value: f64, heirs: &[Heir]) -> EstateCalculation {
    calculate_inheritance_at(estate_value, heirs, Utc::now())
}

/// Same as [`calculate_inheritance`] with a caller-supplied timestamp.
///
/// The computation proper is deterministic; only the envelope's
/// `calculation_date` varies between calls. Pinning the timestamp makes
/// two runs over identical input byte-for-byte equal, which is how the
/// idempotence tests below state the property.
pub fn calculate_inheritance_at(
    estate_value: f64,
    heirs: &[Heir],
    at: DateTime<Utc>,
) -> EstateCalculation {
    let ctx = PassContext {
        estate_value,
        heirs,
        facts: HeirFacts::classify(heirs),
    };

    // Explicit fold over the ordered passes: each takes and advances the
    // (allocated, results) state. The order is the output row order.
    let allocation = PASSES.iter().fold(Allocation::default(), |mut acc, pass| {
        pass(&ctx, &mut acc);
        acc
    });

    EstateCalculation {
        total_estate: estate_value,
        heirs: heirs.to_vec(),
        results: allocation.results,
        remaining_estate: estate_value * (1.0 - allocation.allocated),
        calculation_date: at,
    }
}

// =============================================================================
// Rule Passes
// =============================================================================

/// Pass 1: spouse fixed share, by gender × presence of children.
fn spouse_pass(ctx: &PassContext<'_>, alloc: &mut Allocation) {
    let Some(spouse) = ctx
        .heirs
        .iter()
        .find(|h| h.relationship == Relationship::Spouse)
    else {
        return;
    };

    let (share, basis) = match (spouse.gender, ctx.facts.has_children()) {
        (Gender::Male, true) => (
            HUSBAND_WITH_CHILDREN,
            "Husband receives 1/4 when deceased has children (Quran 4:12)",
        ),
        (Gender::Male, false) => (
            HUSBAND_NO_CHILDREN,
            "Husband receives 1/2 when deceased has no children (Quran 4:12)",
        ),
        (Gender::Female, true) => (
            WIFE_WITH_CHILDREN,
            "Wife receives 1/8 when deceased has children (Quran 4:12)",
        ),
        (Gender::Female, false) => (
            WIFE_NO_CHILDREN,
            "Wife receives 1/4 when deceased has no children (Quran 4:12)",
        ),
    };

    alloc.record(ctx.estate_value, spouse, share, basis);
    alloc.allocated += share;
}

/// Pass 2: mother fixed share with the children/siblings fallback chain.
fn mother_pass(ctx: &PassContext<'_>, alloc: &mut Allocation) {
    let Some(mother) = ctx
        .heirs
        .iter()
        .find(|h| h.relationship == Relationship::Mother)
    else {
        return;
    };

    let (share, basis) = if ctx.facts.has_children() {
        (
            MOTHER_WITH_CHILDREN,
            "Mother receives 1/6 when deceased has children (Quran 4:11)",
        )
    } else if ctx.facts.has_full_siblings() {
        (
            MOTHER_WITH_SIBLINGS,
            "Mother receives 1/6 when deceased has siblings but no children (Quran 4:11)",
        )
    } else {
        (
            MOTHER_ALONE,
            "Mother receives 1/3 when deceased has no children or siblings (Quran 4:11)",
        )
    };

    alloc.record(ctx.estate_value, mother, share, basis);
    alloc.allocated += share;
}

/// Pass 3: father. Fixed 1/6 beside children; otherwise he is the residuary
/// heir and absorbs everything not yet allocated.
fn father_pass(ctx: &PassContext<'_>, alloc: &mut Allocation) {
    let Some(father) = ctx
        .heirs
        .iter()
        .find(|h| h.relationship == Relationship::Father)
    else {
        return;
    };

    let (share, basis) = if ctx.facts.has_children() {
        (
            FATHER_WITH_CHILDREN,
            "Father receives 1/6 when deceased has children (Quran 4:11)",
        )
    } else {
        (
            alloc.remaining(),
            "Father receives remaining estate (Asabah) when no children exist",
        )
    };

    alloc.record(ctx.estate_value, father, share, basis);
    alloc.allocated += share;
}

/// Pass 4: children split of the remainder.
///
/// Sons only: equal split, remainder exhausted. Daughters only: 1/2 or a
/// 2/3 collective cap, both bounded by the remainder. Mixed: proportional
/// parts where a son's share is exactly twice a daughter's.
fn children_pass(ctx: &PassContext<'_>, alloc: &mut Allocation) {
    let sons: Vec<&Heir> = ctx
        .heirs
        .iter()
        .filter(|h| h.relationship == Relationship::Son)
        .collect();
    let daughters: Vec<&Heir> = ctx
        .heirs
        .iter()
        .filter(|h| h.relationship == Relationship::Daughter)
        .collect();

    if sons.is_empty() && daughters.is_empty() {
        return;
    }

    let remaining = alloc.remaining();

    if !sons.is_empty() && daughters.is_empty() {
        let share_per_son = remaining / sons.len() as f64;
        for son in &sons {
            alloc.record(
                ctx.estate_value,
                son,
                share_per_son,
                "Sons receive equal shares of remaining estate (Asabah)",
            );
        }
        alloc.allocated = 1.0;
    } else if !daughters.is_empty() && sons.is_empty() {
        let (share_per_daughter, basis) = if daughters.len() == 1 {
            (
                DAUGHTER_SINGLE.min(remaining),
                "Single daughter receives 1/2 of estate (Quran 4:11)",
            )
        } else {
            let count = daughters.len() as f64;
            (
                (DAUGHTERS_MULTIPLE / count).min(remaining / count),
                "Multiple daughters share 2/3 of estate equally (Quran 4:11)",
            )
        };

        for daughter in &daughters {
            alloc.record(ctx.estate_value, daughter, share_per_daughter, basis);
        }
        // The caps above can undershoot the remainder; the shortfall stays
        // in remaining_estate rather than being redistributed (no awl).
        alloc.allocated += share_per_daughter * daughters.len() as f64;
    } else {
        // Both present: 2 parts per son, 1 per daughter, over the remainder.
        let total_parts = (sons.len() * 2 + daughters.len()) as f64;
        let share_per_part = remaining / total_parts;

        for son in &sons {
            alloc.record(
                ctx.estate_value,
                son,
                share_per_part * 2.0,
                "Son receives twice the share of daughter (Quran 4:11)",
            );
        }
        for daughter in &daughters {
            alloc.record(
                ctx.estate_value,
                daughter,
                share_per_part,
                "Daughter receives half the share of son (Quran 4:11)",
            );
        }
        alloc.allocated = 1.0;
    }
}

/// Pass 5: uterine (maternal) siblings.
///
/// A fixed-share class evaluated unconditionally: their 1/6 (single) or
/// 1/3 (split) is granted independent of children or the father, even when
/// earlier passes already exhausted the estate.
fn maternal_siblings_pass(ctx: &PassContext<'_>, alloc: &mut Allocation) {
    let maternal: Vec<&Heir> = ctx
        .heirs
        .iter()
        .filter(|h| h.relationship.is_maternal_sibling())
        .collect();

    if maternal.is_empty() {
        return;
    }

    let (share, basis) = if maternal.len() == 1 {
        (UTERINE_SINGLE, "Maternal sibling receives 1/6 (Quran 4:12)")
    } else {
        (
            UTERINE_MULTIPLE / maternal.len() as f64,
            "Maternal siblings share 1/3 equally (Quran 4:12)",
        )
    };

    for sibling in &maternal {
        alloc.record(ctx.estate_value, sibling, share, basis);
        alloc.allocated += share;
    }
}

/// Pass 6: stepmother. Never inherits; recorded explicitly with share 0.
fn stepmother_pass(ctx: &PassContext<'_>, alloc: &mut Allocation) {
    let Some(stepmother) = ctx
        .heirs
        .iter()
        .find(|h| h.relationship == Relationship::Stepmother)
    else {
        return;
    };

    alloc.record(
        ctx.estate_value,
        stepmother,
        0.0,
        "Stepmother does not inherit under Islamic law",
    );
}

/// Pass 7: full/paternal siblings as the residuary class.
///
/// Activates only when there is no descendant and no father to absorb the
/// residue. Mirrors the children split: brothers equal, sisters capped at
/// 1/2 or 2/3, mixed at 2:1.
fn siblings_pass(ctx: &PassContext<'_>, alloc: &mut Allocation) {
    if ctx.facts.has_children() || ctx.facts.has_father {
        return;
    }

    let brothers: Vec<&Heir> = ctx
        .heirs
        .iter()
        .filter(|h| h.relationship.is_residuary_brother())
        .collect();
    let sisters: Vec<&Heir> = ctx
        .heirs
        .iter()
        .filter(|h| h.relationship.is_residuary_sister())
        .collect();

    if brothers.is_empty() && sisters.is_empty() {
        return;
    }

    let remaining = alloc.remaining();

    if !brothers.is_empty() && sisters.is_empty() {
        let share_per_brother = remaining / brothers.len() as f64;
        for brother in &brothers {
            alloc.record(
                ctx.estate_value,
                brother,
                share_per_brother,
                "Brothers receive equal shares of remaining estate (Asabah)",
            );
        }
        alloc.allocated = 1.0;
    } else if !sisters.is_empty() && brothers.is_empty() {
        let (share_per_sister, basis) = if sisters.len() == 1 {
            (
                SISTER_SINGLE.min(remaining),
                "Single sister receives 1/2 of remaining estate (Quran 4:176)",
            )
        } else {
            let count = sisters.len() as f64;
            (
                (SISTERS_MULTIPLE / count).min(remaining / count),
                "Multiple sisters share 2/3 of remaining estate (Quran 4:176)",
            )
        };

        for sister in &sisters {
            alloc.record(ctx.estate_value, sister, share_per_sister, basis);
        }
        alloc.allocated += share_per_sister * sisters.len() as f64;
    } else {
        let total_parts = (brothers.len() * 2 + sisters.len()) as f64;
        let share_per_part = remaining / total_parts;

        for brother in &brothers {
            alloc.record(
                ctx.estate_value,
                brother,
                share_per_part * 2.0,
                "Brother receives twice the share of sister (Quran 4:176)",
            );
        }
        for sister in &sisters {
            alloc.record(
                ctx.estate_value,
                sister,
                share_per_part,
                "Sister receives half the share of brother (Quran 4:176)",
            );
        }
        alloc.allocated = 1.0;
    }
}

/// Pass 8: grandparents. Accepted input with no distribution rule; each is
/// recorded with share 0 so the exclusion is visible instead of silent.
fn grandparents_pass(ctx: &PassContext<'_>, alloc: &mut Allocation) {
    for grandparent in ctx.heirs.iter().filter(|h| h.relationship.is_grandparent()) {
        alloc.record(
            ctx.estate_value,
            grandparent,
            0.0,
            "Grandparent shares are not distributed by this calculator; \
             they require case-by-case juristic assessment",
        );
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SHARE_EPSILON;

    /// Shorthand heir constructor for test fixtures.
    fn heir(id: &str, relationship: Relationship, gender: Gender) -> Heir {
        Heir::new(id, format!("Heir {id}"), relationship, gender)
    }

    /// Runs the engine with a pinned timestamp so outputs compare exactly.
    fn calc(estate_value: f64, heirs: &[Heir]) -> EstateCalculation {
        let at = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        calculate_inheritance_at(estate_value, heirs, at)
    }

    fn row<'a>(calc: &'a EstateCalculation, id: &str) -> &'a CalculationResult {
        calc.results
            .iter()
            .find(|r| r.heir_id == id)
            .unwrap_or_else(|| panic!("no result row for heir {id}"))
    }

    fn assert_share(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < SHARE_EPSILON,
            "share {actual} != expected {expected}"
        );
    }

    // -------------------------------------------------------------------------
    // Spouse rule table
    // -------------------------------------------------------------------------

    #[test]
    fn test_husband_alone_takes_half() {
        let heirs = vec![heir("h", Relationship::Spouse, Gender::Male)];
        let result = calc(800_000.0, &heirs);

        assert_share(row(&result, "h").share, 0.5);
        assert_eq!(row(&result, "h").amount, 400_000.0);
        assert_eq!(
            row(&result, "h").basis,
            "Husband receives 1/2 when deceased has no children (Quran 4:12)"
        );
    }

    #[test]
    fn test_husband_with_son_takes_quarter() {
        let heirs = vec![
            heir("h", Relationship::Spouse, Gender::Male),
            heir("s", Relationship::Son, Gender::Male),
        ];
        let result = calc(800_000.0, &heirs);

        assert_share(row(&result, "h").share, 0.25);
        assert_eq!(row(&result, "h").amount, 200_000.0);

        // The son takes everything left as residuary heir
        assert_share(row(&result, "s").share, 0.75);
        assert_eq!(row(&result, "s").amount, 600_000.0);
    }

    #[test]
    fn test_wife_alone_takes_quarter() {
        let heirs = vec![heir("w", Relationship::Spouse, Gender::Female)];
        let result = calc(800_000.0, &heirs);

        assert_share(row(&result, "w").share, 0.25);
        assert_eq!(row(&result, "w").amount, 200_000.0);
    }

    #[test]
    fn test_wife_with_children_takes_eighth() {
        let heirs = vec![
            heir("w", Relationship::Spouse, Gender::Female),
            heir("d", Relationship::Daughter, Gender::Female),
        ];
        let result = calc(800_000.0, &heirs);

        assert_share(row(&result, "w").share, 1.0 / 8.0);
    }

    // -------------------------------------------------------------------------
    // Conservation & ratio properties
    // -------------------------------------------------------------------------

    #[test]
    fn test_spouse_and_two_sons_conserve_estate() {
        let heirs = vec![
            heir("w", Relationship::Spouse, Gender::Female),
            heir("s1", Relationship::Son, Gender::Male),
            heir("s2", Relationship::Son, Gender::Male),
        ];
        let result = calc(900_000.0, &heirs);

        assert_share(result.allocated_share(), 1.0);
        assert!(result.remaining_estate.abs() < SHARE_EPSILON);
    }

    #[test]
    fn test_son_gets_exactly_twice_daughter() {
        let heirs = vec![
            heir("s", Relationship::Son, Gender::Male),
            heir("d", Relationship::Daughter, Gender::Female),
        ];
        let result = calc(600_000.0, &heirs);

        let son = row(&result, "s").share;
        let daughter = row(&result, "d").share;
        assert_share(son, daughter * 2.0);
        assert_share(son + daughter, 1.0);
    }

    #[test]
    fn test_mixed_children_with_spouse_exhaust_remainder() {
        // Wife 1/8, then 2 sons + 1 daughter split the remaining 7/8
        // into 5 parts of 7/40 each.
        let heirs = vec![
            heir("w", Relationship::Spouse, Gender::Female),
            heir("s1", Relationship::Son, Gender::Male),
            heir("s2", Relationship::Son, Gender::Male),
            heir("d", Relationship::Daughter, Gender::Female),
        ];
        let result = calc(400_000.0, &heirs);

        assert_share(row(&result, "d").share, 7.0 / 40.0);
        assert_share(row(&result, "s1").share, 14.0 / 40.0);
        assert_share(result.allocated_share(), 1.0);
        assert!(result.remaining_estate.abs() < SHARE_EPSILON);
    }

    // -------------------------------------------------------------------------
    // Mother fallback chain
    // -------------------------------------------------------------------------

    #[test]
    fn test_mother_alone_takes_third() {
        let heirs = vec![heir("m", Relationship::Mother, Gender::Female)];
        let result = calc(300_000.0, &heirs);

        assert_share(row(&result, "m").share, 1.0 / 3.0);
    }

    #[test]
    fn test_mother_with_brother_drops_to_sixth() {
        let heirs = vec![
            heir("m", Relationship::Mother, Gender::Female),
            heir("b", Relationship::Brother, Gender::Male),
        ];
        let result = calc(300_000.0, &heirs);

        assert_share(row(&result, "m").share, 1.0 / 6.0);
    }

    #[test]
    fn test_mother_with_son_drops_to_sixth() {
        let heirs = vec![
            heir("m", Relationship::Mother, Gender::Female),
            heir("s", Relationship::Son, Gender::Male),
        ];
        let result = calc(300_000.0, &heirs);

        assert_share(row(&result, "m").share, 1.0 / 6.0);
    }

    // -------------------------------------------------------------------------
    // Father
    // -------------------------------------------------------------------------

    #[test]
    fn test_father_with_children_takes_sixth() {
        let heirs = vec![
            heir("f", Relationship::Father, Gender::Male),
            heir("s", Relationship::Son, Gender::Male),
        ];
        let result = calc(600_000.0, &heirs);

        assert_share(row(&result, "f").share, 1.0 / 6.0);
        assert_share(row(&result, "s").share, 5.0 / 6.0);
    }

    #[test]
    fn test_father_without_children_absorbs_residue() {
        let heirs = vec![
            heir("w", Relationship::Spouse, Gender::Female),
            heir("f", Relationship::Father, Gender::Male),
        ];
        let result = calc(400_000.0, &heirs);

        // Wife 1/4, father the remaining 3/4
        assert_share(row(&result, "f").share, 0.75);
        assert_eq!(
            row(&result, "f").basis,
            "Father receives remaining estate (Asabah) when no children exist"
        );
        assert!(result.remaining_estate.abs() < SHARE_EPSILON);
    }

    // -------------------------------------------------------------------------
    // Daughters only
    // -------------------------------------------------------------------------

    #[test]
    fn test_single_daughter_takes_half() {
        let heirs = vec![heir("d", Relationship::Daughter, Gender::Female)];
        let result = calc(200_000.0, &heirs);

        assert_share(row(&result, "d").share, 0.5);
        assert_eq!(result.remaining_estate, 100_000.0);
    }

    #[test]
    fn test_two_daughters_take_third_each() {
        let heirs = vec![
            heir("d1", Relationship::Daughter, Gender::Female),
            heir("d2", Relationship::Daughter, Gender::Female),
        ];
        let result = calc(300_000.0, &heirs);

        assert_share(row(&result, "d1").share, 1.0 / 3.0);
        assert_share(row(&result, "d2").share, 1.0 / 3.0);
        // The uncovered 1/3 is surfaced as remainder, not redistributed
        assert_share(result.remaining_estate / 300_000.0, 1.0 / 3.0);
    }

    #[test]
    fn test_daughters_capped_by_remaining_share() {
        // Husband takes 1/4 first; the single daughter's 1/2 fits within
        // the remaining 3/4 and is not capped here.
        let heirs = vec![
            heir("h", Relationship::Spouse, Gender::Male),
            heir("d", Relationship::Daughter, Gender::Female),
        ];
        let result = calc(400_000.0, &heirs);

        assert_share(row(&result, "d").share, 0.5);
        assert_share(result.remaining_estate / 400_000.0, 0.25);
    }

    // -------------------------------------------------------------------------
    // Maternal (uterine) siblings
    // -------------------------------------------------------------------------

    #[test]
    fn test_single_maternal_sibling_takes_sixth() {
        let heirs = vec![heir("u", Relationship::StepbrotherMaternal, Gender::Male)];
        let result = calc(600_000.0, &heirs);

        assert_share(row(&result, "u").share, 1.0 / 6.0);
    }

    #[test]
    fn test_maternal_siblings_split_third() {
        let heirs = vec![
            heir("u1", Relationship::StepbrotherMaternal, Gender::Male),
            heir("u2", Relationship::StepsisterMaternal, Gender::Female),
        ];
        let result = calc(600_000.0, &heirs);

        assert_share(row(&result, "u1").share, 1.0 / 6.0);
        assert_share(row(&result, "u2").share, 1.0 / 6.0);
        assert_eq!(
            row(&result, "u2").basis,
            "Maternal siblings share 1/3 equally (Quran 4:12)"
        );
    }

    #[test]
    fn test_maternal_sibling_fixed_share_survives_father() {
        // The uterine class is unconditional: beside a father (who already
        // absorbed the full residue) it still takes 1/6, pushing the
        // allocation past 100%. The negative remainder is reported as-is.
        let heirs = vec![
            heir("f", Relationship::Father, Gender::Male),
            heir("u", Relationship::StepbrotherMaternal, Gender::Male),
        ];
        let result = calc(600_000.0, &heirs);

        assert_share(row(&result, "u").share, 1.0 / 6.0);
        assert_share(row(&result, "f").share, 1.0);
        assert!(result.remaining_estate < 0.0);
        assert_share(result.remaining_estate / 600_000.0, -1.0 / 6.0);
    }

    // -------------------------------------------------------------------------
    // Stepmother & grandparents (zero-share rows)
    // -------------------------------------------------------------------------

    #[test]
    fn test_stepmother_recorded_with_zero_share() {
        let heirs = vec![
            heir("s", Relationship::Son, Gender::Male),
            heir("sm", Relationship::Stepmother, Gender::Female),
        ];
        let result = calc(500_000.0, &heirs);

        let stepmother = row(&result, "sm");
        assert_eq!(stepmother.share, 0.0);
        assert_eq!(stepmother.amount, 0.0);
        assert!(!stepmother.basis.is_empty());
    }

    #[test]
    fn test_grandparents_recorded_with_zero_share() {
        let heirs = vec![
            heir("s", Relationship::Son, Gender::Male),
            heir("gf", Relationship::Grandfather, Gender::Male),
            heir("gm", Relationship::Grandmother, Gender::Female),
        ];
        let result = calc(500_000.0, &heirs);

        assert_eq!(row(&result, "gf").share, 0.0);
        assert_eq!(row(&result, "gm").share, 0.0);
        assert!(!row(&result, "gf").basis.is_empty());
        // Every heir present is accounted for in the results
        assert_eq!(result.results.len(), 3);
    }

    // -------------------------------------------------------------------------
    // Residuary siblings
    // -------------------------------------------------------------------------

    #[test]
    fn test_brothers_split_residue_equally() {
        let heirs = vec![
            heir("w", Relationship::Spouse, Gender::Female),
            heir("b1", Relationship::Brother, Gender::Male),
            heir("b2", Relationship::StepbrotherPaternal, Gender::Male),
        ];
        let result = calc(400_000.0, &heirs);

        // Wife 1/4, brothers split the remaining 3/4
        assert_share(row(&result, "b1").share, 0.375);
        assert_share(row(&result, "b2").share, 0.375);
        assert!(result.remaining_estate.abs() < SHARE_EPSILON);
    }

    #[test]
    fn test_brother_and_sister_split_two_to_one() {
        let heirs = vec![
            heir("b", Relationship::Brother, Gender::Male),
            heir("sis", Relationship::Sister, Gender::Female),
        ];
        let result = calc(300_000.0, &heirs);

        assert_share(row(&result, "b").share, 2.0 / 3.0);
        assert_share(row(&result, "sis").share, 1.0 / 3.0);
    }

    #[test]
    fn test_single_sister_takes_half_of_remainder() {
        let heirs = vec![heir("sis", Relationship::Sister, Gender::Female)];
        let result = calc(200_000.0, &heirs);

        assert_share(row(&result, "sis").share, 0.5);
        assert_eq!(result.remaining_estate, 100_000.0);
    }

    #[test]
    fn test_siblings_blocked_by_children() {
        let heirs = vec![
            heir("s", Relationship::Son, Gender::Male),
            heir("b", Relationship::Brother, Gender::Male),
        ];
        let result = calc(500_000.0, &heirs);

        // The brother class never activates beside a descendant; with the
        // closed relationship set he simply gets no row here.
        assert!(result.results.iter().all(|r| r.heir_id != "b"));
        assert_share(row(&result, "s").share, 1.0);
    }

    #[test]
    fn test_siblings_blocked_by_father() {
        let heirs = vec![
            heir("f", Relationship::Father, Gender::Male),
            heir("b", Relationship::Brother, Gender::Male),
        ];
        let result = calc(500_000.0, &heirs);

        assert!(result.results.iter().all(|r| r.heir_id != "b"));
        assert_share(row(&result, "f").share, 1.0);
    }

    // -------------------------------------------------------------------------
    // Pass isolation
    // -------------------------------------------------------------------------
    // The fold design keeps each rule pass independently callable: hand it
    // a context and a mid-fold allocation state, observe what it adds.

    #[test]
    fn test_spouse_pass_in_isolation() {
        let heirs = vec![heir("w", Relationship::Spouse, Gender::Female)];
        let ctx = PassContext {
            estate_value: 100.0,
            heirs: &heirs,
            facts: HeirFacts::classify(&heirs),
        };
        let mut alloc = Allocation::default();

        spouse_pass(&ctx, &mut alloc);

        assert_eq!(alloc.results.len(), 1);
        assert_share(alloc.allocated, 0.25);
    }

    #[test]
    fn test_father_pass_absorbs_mid_fold_remainder() {
        let heirs = vec![heir("f", Relationship::Father, Gender::Male)];
        let ctx = PassContext {
            estate_value: 100.0,
            heirs: &heirs,
            facts: HeirFacts::classify(&heirs),
        };
        let mut alloc = Allocation::default();
        // As if a wife's quarter had already been taken by an earlier pass
        alloc.allocated = 0.25;

        father_pass(&ctx, &mut alloc);

        assert_share(alloc.results[0].share, 0.75);
        assert_share(alloc.allocated, 1.0);
    }

    // -------------------------------------------------------------------------
    // Envelope semantics
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_heir_list() {
        let result = calc(250_000.0, &[]);

        assert!(result.results.is_empty());
        assert_eq!(result.remaining_estate, 250_000.0);
        assert_eq!(result.total_estate, 250_000.0);
    }

    #[test]
    fn test_idempotent_and_does_not_mutate_input() {
        let heirs = vec![
            heir("w", Relationship::Spouse, Gender::Female),
            heir("s", Relationship::Son, Gender::Male),
            heir("d", Relationship::Daughter, Gender::Female),
            heir("m", Relationship::Mother, Gender::Female),
        ];
        let before = heirs.clone();

        let first = calc(1_000_000.0, &heirs);
        let second = calc(1_000_000.0, &heirs);

        // Pinned timestamp makes equality exact, not just "modulo date"
        assert_eq!(first, second);
        assert_eq!(heirs, before);
        assert_eq!(first.heirs, before);
    }

    #[test]
    fn test_result_rows_follow_pass_order() {
        let heirs = vec![
            heir("sm", Relationship::Stepmother, Gender::Female),
            heir("s", Relationship::Son, Gender::Male),
            heir("w", Relationship::Spouse, Gender::Female),
            heir("m", Relationship::Mother, Gender::Female),
        ];
        let result = calc(800_000.0, &heirs);

        let order: Vec<&str> = result.results.iter().map(|r| r.heir_id.as_str()).collect();
        // spouse, mother, children, stepmother - regardless of input order
        assert_eq!(order, vec!["w", "m", "s", "sm"]);
    }

    #[test]
    fn test_non_positive_estate_scales_through() {
        // The engine does not reject a zero estate; amounts scale to zero
        // while fractional shares stay meaningful. Callers gate on
        // validate_estate_value before ever reaching this point.
        let heirs = vec![heir("h", Relationship::Spouse, Gender::Male)];
        let result = calc(0.0, &heirs);

        assert_share(row(&result, "h").share, 0.5);
        assert_eq!(row(&result, "h").amount, 0.0);
    }
}
