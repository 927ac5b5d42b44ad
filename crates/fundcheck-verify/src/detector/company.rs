//! Company-name comparison.

use fundcheck_core::{Discrepancy, FieldName, Severity};

use super::normalize::normalize;

/// Impact when the source names a different company than the claim.
pub const COMPANY_MISMATCH_IMPACT: f64 = 0.8;

pub fn detect(reported: &str, extracted: &str) -> Option<Discrepancy> {
    if normalize(reported) == normalize(extracted) {
        return None;
    }

    Some(Discrepancy {
        field: FieldName::Company,
        severity: Severity::Major,
        impact: COMPANY_MISMATCH_IMPACT,
        description: format!(
            "Company mismatch: reported '{reported}' vs. extracted '{extracted}'"
        ),
    })
}
