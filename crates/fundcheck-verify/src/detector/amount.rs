//! Amount comparison: relative-difference banding.

use fundcheck_core::{Discrepancy, FieldName, Severity};

/// Relative difference below this is treated as a match.
pub const TOLERANCE: f64 = 0.10;
/// Relative difference above this escalates Minor to Moderate.
pub const MODERATE_BAND: f64 = 0.30;
/// Relative difference above this escalates Moderate to Major.
pub const MAJOR_BAND: f64 = 0.60;

/// Compare reported and extracted amounts (millions USD).
///
/// Impact grows with the relative difference, capped at 1.0, so the
/// aggregator's worst-offender dampening scales with how far apart the
/// figures are. Two exact zeros are a match (no relative difference to
/// compute).
pub fn detect(reported: f64, extracted: f64) -> Option<Discrepancy> {
    if reported == 0.0 && extracted == 0.0 {
        return None;
    }

    // Relative to the larger magnitude, so the comparison is symmetric and
    // defined even when one side is zero.
    let base = reported.abs().max(extracted.abs());
    let rel_diff = (reported - extracted).abs() / base;

    if rel_diff < TOLERANCE {
        return None;
    }

    let severity = if rel_diff > MAJOR_BAND {
        Severity::Major
    } else if rel_diff > MODERATE_BAND {
        Severity::Moderate
    } else {
        Severity::Minor
    };

    Some(Discrepancy {
        field: FieldName::Amount,
        severity,
        impact: rel_diff.min(1.0),
        description: format!(
            "Amount mismatch: reported ${reported}M vs. extracted ${extracted}M ({:.0}% difference)",
            rel_diff * 100.0
        ),
    })
}
