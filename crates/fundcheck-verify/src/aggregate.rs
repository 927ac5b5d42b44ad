//! Confidence aggregation: fixed-weight linear combination, then
//! multiplicative worst-discrepancy dampening.
//!
//! The two stages are kept distinct on purpose. The linear stage weighs the
//! four evidence signals; the multiplicative stage lets a single severe
//! contradiction suppress confidence even when every other signal is
//! strong. Collapsing them into one formula would lose the worst-offender
//! property.

use fundcheck_core::constants::{
    DISCREPANCY_DAMPENING, WEIGHT_COMPLETENESS, WEIGHT_DATA_CONSISTENCY,
    WEIGHT_EXTRACTION_QUALITY, WEIGHT_SOURCE_RELIABILITY,
};
use fundcheck_core::{ComponentScores, Confidence, Discrepancy};

use crate::detector;

/// Combine the evidence signals into an overall confidence.
///
/// `data_consistency` is derived from the single worst discrepancy impact
/// (after same-field merging), not a cumulative average, so one severe
/// contradiction cannot be diluted by many trivial matches.
pub fn aggregate(
    source_reliability: f64,
    completeness: f64,
    extraction_quality: f64,
    discrepancies: &[Discrepancy],
) -> (Confidence, ComponentScores) {
    let max_impact = detector::max_impact(discrepancies);

    let data_consistency = (1.0 - max_impact).clamp(0.0, 1.0);

    let weighted = WEIGHT_SOURCE_RELIABILITY * source_reliability
        + WEIGHT_DATA_CONSISTENCY * data_consistency
        + WEIGHT_COMPLETENESS * completeness
        + WEIGHT_EXTRACTION_QUALITY * extraction_quality;

    let discrepancy_factor = 1.0 - max_impact * DISCREPANCY_DAMPENING;

    let overall = Confidence::new(weighted * discrepancy_factor);

    let scores = ComponentScores {
        source_reliability,
        data_consistency,
        completeness,
        extraction_quality,
        discrepancy_factor,
    };

    (overall, scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundcheck_core::{FieldName, Severity};

    fn discrepancy(impact: f64) -> Discrepancy {
        Discrepancy {
            field: FieldName::Amount,
            severity: Severity::Major,
            impact,
            description: String::new(),
        }
    }

    #[test]
    fn no_discrepancies_means_full_consistency() {
        let (overall, scores) = aggregate(0.9, 1.0, 0.9, &[]);
        assert_eq!(scores.data_consistency, 1.0);
        assert_eq!(scores.discrepancy_factor, 1.0);
        // 0.30*0.9 + 0.30*1.0 + 0.20*1.0 + 0.10*0.9 = 0.95
        assert!((overall.value() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn worst_offender_dominates() {
        let many = vec![
            discrepancy(0.9),
            Discrepancy {
                field: FieldName::Date,
                severity: Severity::Minor,
                impact: 0.1,
                description: String::new(),
            },
        ];
        let single = vec![discrepancy(0.9)];

        let (_, with_many) = aggregate(0.9, 1.0, 0.9, &many);
        let (_, with_single) = aggregate(0.9, 1.0, 0.9, &single);
        assert_eq!(with_many.discrepancy_factor, with_single.discrepancy_factor);
        assert_eq!(with_many.data_consistency, with_single.data_consistency);
    }

    #[test]
    fn major_amount_discrepancy_suppresses_confidence() {
        let (overall, scores) = aggregate(0.9, 1.0, 0.9, &[discrepancy(0.7)]);
        // weighted = 0.30*0.9 + 0.30*0.3 + 0.20*1.0 + 0.10*0.9 = 0.65
        // factor   = 1 - 0.7*0.8 = 0.44
        assert!((scores.data_consistency - 0.3).abs() < 1e-12);
        assert!((scores.discrepancy_factor - 0.44).abs() < 1e-12);
        assert!((overall.value() - 0.65 * 0.44).abs() < 1e-12);
    }

    #[test]
    fn maximal_impact_never_zeroes_strong_signals() {
        let (overall, _) = aggregate(1.0, 1.0, 1.0, &[discrepancy(1.0)]);
        assert!(overall.value() > 0.0);
    }
}
