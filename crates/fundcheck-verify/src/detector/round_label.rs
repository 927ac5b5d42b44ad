//! Round-label comparison with an explicit synonym table.

use fundcheck_core::{Discrepancy, FieldName, Severity};

use super::normalize::normalize;

/// Impact of a round-label mismatch.
pub const LABEL_MISMATCH_IMPACT: f64 = 0.4;

/// Label pairs treated as equivalent after normalization. Synonymy is only
/// granted when this table says so; "Seed" vs "Pre-Seed" stays a mismatch
/// unless listed here.
const SYNONYMS: &[(&str, &str)] = &[
    ("seed", "seed round"),
    ("series a", "a round"),
    ("series b", "b round"),
    ("series c", "c round"),
    ("pre seed", "preseed"),
    ("angel", "angel round"),
];

fn labels_equivalent(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    SYNONYMS
        .iter()
        .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x))
}

pub fn detect(reported: &str, extracted: &str) -> Option<Discrepancy> {
    let r = normalize(reported);
    let e = normalize(extracted);

    if labels_equivalent(&r, &e) {
        return None;
    }

    Some(Discrepancy {
        field: FieldName::RoundLabel,
        severity: Severity::Moderate,
        impact: LABEL_MISMATCH_IMPACT,
        description: format!(
            "Round label mismatch: reported '{reported}' vs. extracted '{extracted}'"
        ),
    })
}
