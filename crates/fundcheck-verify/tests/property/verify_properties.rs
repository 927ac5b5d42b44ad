use fundcheck_core::{Confidence, Discrepancy, FieldName, Severity, Verdict};
use fundcheck_verify::{aggregate, verdict};
use proptest::prelude::*;

fn discrepancy(impact: f64) -> Discrepancy {
    Discrepancy {
        field: FieldName::Amount,
        severity: Severity::Major,
        impact,
        description: String::new(),
    }
}

proptest! {
    #[test]
    fn overall_stays_in_unit_range(
        sr in 0.0..=1.0f64,
        comp in 0.0..=1.0f64,
        eq in 0.0..=1.0f64,
        impact in 0.0..=1.0f64,
    ) {
        let (overall, scores) = aggregate::aggregate(sr, comp, eq, &[discrepancy(impact)]);
        prop_assert!((0.0..=1.0).contains(&overall.value()));
        prop_assert!((0.0..=1.0).contains(&scores.data_consistency));
        prop_assert!((0.0..=1.0).contains(&scores.discrepancy_factor));
    }

    #[test]
    fn increasing_a_component_never_decreases_overall(
        sr in 0.0..=0.9f64,
        comp in 0.0..=1.0f64,
        eq in 0.0..=1.0f64,
        impact in 0.0..=1.0f64,
        bump in 0.0..=0.1f64,
    ) {
        let ds = [discrepancy(impact)];
        let (before, _) = aggregate::aggregate(sr, comp, eq, &ds);
        let (after, _) = aggregate::aggregate(sr + bump, comp, eq, &ds);
        prop_assert!(after.value() >= before.value() - 1e-12);
    }

    #[test]
    fn adding_a_discrepancy_never_increases_overall(
        sr in 0.0..=1.0f64,
        comp in 0.0..=1.0f64,
        eq in 0.0..=1.0f64,
        impact in 0.0..=1.0f64,
    ) {
        let (without, _) = aggregate::aggregate(sr, comp, eq, &[]);
        let (with, _) = aggregate::aggregate(sr, comp, eq, &[discrepancy(impact)]);
        prop_assert!(with.value() <= without.value() + 1e-12);
    }

    #[test]
    fn worst_offender_dominates_any_lesser_set(
        worst in 0.5..=1.0f64,
        lesser in 0.0..=0.5f64,
        sr in 0.0..=1.0f64,
    ) {
        let many = [
            discrepancy(worst),
            Discrepancy {
                field: FieldName::Date,
                severity: Severity::Minor,
                impact: lesser,
                description: String::new(),
            },
        ];
        let single = [discrepancy(worst)];
        let (a, _) = aggregate::aggregate(sr, 1.0, 1.0, &many);
        let (b, _) = aggregate::aggregate(sr, 1.0, 1.0, &single);
        prop_assert_eq!(a.value(), b.value());
    }

    #[test]
    fn aggregation_is_deterministic(
        sr in 0.0..=1.0f64,
        comp in 0.0..=1.0f64,
        eq in 0.0..=1.0f64,
        impact in 0.0..=1.0f64,
    ) {
        let ds = [discrepancy(impact)];
        let (a, scores_a) = aggregate::aggregate(sr, comp, eq, &ds);
        let (b, scores_b) = aggregate::aggregate(sr, comp, eq, &ds);
        prop_assert_eq!(a.value(), b.value());
        prop_assert_eq!(scores_a, scores_b);
    }

    #[test]
    fn classification_is_total_and_threshold_consistent(value in 0.0..=1.0f64) {
        let c = Confidence::new(value);
        let v = verdict::classify(c);
        match v {
            Verdict::Verified => prop_assert!(value >= 0.80),
            Verdict::PartiallyVerified => prop_assert!((0.60..0.80).contains(&value)),
            Verdict::Unverified => prop_assert!(value < 0.60),
        }
    }
}
