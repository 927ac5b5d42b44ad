//! Date comparison: year mismatch is Major, month-only mismatch is Minor.

use fundcheck_core::{Discrepancy, FieldName, RoundDate, Severity};

/// Impact of a year-level mismatch.
pub const YEAR_MISMATCH_IMPACT: f64 = 0.8;
/// Impact of a month-only mismatch.
pub const MONTH_MISMATCH_IMPACT: f64 = 0.2;

pub fn detect(reported: RoundDate, extracted: RoundDate) -> Option<Discrepancy> {
    if reported.year != extracted.year {
        return Some(Discrepancy {
            field: FieldName::Date,
            severity: Severity::Major,
            impact: YEAR_MISMATCH_IMPACT,
            description: format!(
                "Year mismatch: reported {} vs. extracted {}",
                reported.year, extracted.year
            ),
        });
    }

    // Month comparison only applies when both sides report one.
    if let (Some(rm), Some(em)) = (reported.month, extracted.month) {
        if rm != em {
            return Some(Discrepancy {
                field: FieldName::Date,
                severity: Severity::Minor,
                impact: MONTH_MISMATCH_IMPACT,
                description: format!(
                    "Month mismatch: reported {}-{:02} vs. extracted {}-{:02}",
                    reported.year, rm, extracted.year, em
                ),
            });
        }
    }

    None
}
