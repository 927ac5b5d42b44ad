//! Field-by-field discrepancy detection.
//!
//! Each strategy compares one reconciled field and emits discrepancies with
//! a severity and a normalized impact. Fields absent from the extracted
//! record produce no discrepancy — absence is a completeness signal, not a
//! contradiction.

pub mod amount;
pub mod company;
pub mod date;
pub mod investors;
pub mod normalize;
pub mod round_label;

use std::collections::HashMap;

use fundcheck_core::{Discrepancy, ExtractedRound, FieldName, ReportedRound};

/// Output of a detection pass.
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    /// All detected discrepancies, sorted most severe first.
    pub discrepancies: Vec<Discrepancy>,
    /// Audit notes for conditions that are not discrepancies (e.g. an
    /// unparsable extracted amount routed to absence).
    pub notes: Vec<String>,
}

/// Compare every field present in both records.
pub fn detect(reported: &ReportedRound, extracted: &ExtractedRound) -> DetectionResult {
    let mut discrepancies = Vec::new();
    let mut notes = Vec::new();

    if let Some(company) = &extracted.company {
        discrepancies.extend(company::detect(&reported.company, company));
    }

    match (extracted.amount, extracted.comparable_amount()) {
        (Some(_), Some(amount)) => {
            discrepancies.extend(amount::detect(reported.amount, amount));
        }
        (Some(raw), None) => {
            notes.push(format!(
                "Extracted amount {raw} is not comparable; treated as absent"
            ));
        }
        (None, _) => {}
    }

    if let Some(label) = &extracted.round_label {
        discrepancies.extend(round_label::detect(&reported.round_label, label));
    }

    if let Some(extracted_date) = extracted.date {
        discrepancies.extend(date::detect(reported.date, extracted_date));
    }

    if let Some(investor_list) = &extracted.investors {
        discrepancies.extend(investors::detect(&reported.investors, investor_list));
    }

    sort_for_report(&mut discrepancies);

    DetectionResult {
        discrepancies,
        notes,
    }
}

/// Sort descending by impact, ties broken by field-name lexical order,
/// for deterministic reporting.
pub fn sort_for_report(discrepancies: &mut [Discrepancy]) {
    discrepancies.sort_by(|a, b| {
        b.impact
            .total_cmp(&a.impact)
            .then_with(|| a.field.as_str().cmp(b.field.as_str()))
    });
}

/// Merge same-field discrepancies to their maximum impact.
///
/// Multiple findings on one field (e.g. several missing investors) count as
/// a single contradiction at the worst observed impact when feeding the
/// aggregator; the individual discrepancies are all still reported.
pub fn max_impact_per_field(discrepancies: &[Discrepancy]) -> HashMap<FieldName, f64> {
    let mut merged: HashMap<FieldName, f64> = HashMap::new();
    for d in discrepancies {
        let entry = merged.entry(d.field).or_insert(0.0);
        if d.impact > *entry {
            *entry = d.impact;
        }
    }
    merged
}

/// The single worst impact across all fields after merging, 0.0 when the
/// set is empty.
pub fn max_impact(discrepancies: &[Discrepancy]) -> f64 {
    max_impact_per_field(discrepancies)
        .values()
        .fold(0.0, |acc, &v| acc.max(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundcheck_core::Severity;

    #[test]
    fn sorting_is_impact_descending_then_field_lexical() {
        let mut ds = vec![
            Discrepancy {
                field: FieldName::RoundLabel,
                severity: Severity::Moderate,
                impact: 0.4,
                description: String::new(),
            },
            Discrepancy {
                field: FieldName::Date,
                severity: Severity::Major,
                impact: 0.8,
                description: String::new(),
            },
            Discrepancy {
                field: FieldName::Company,
                severity: Severity::Major,
                impact: 0.8,
                description: String::new(),
            },
        ];
        sort_for_report(&mut ds);
        assert_eq!(ds[0].field, FieldName::Company);
        assert_eq!(ds[1].field, FieldName::Date);
        assert_eq!(ds[2].field, FieldName::RoundLabel);
    }

    #[test]
    fn same_field_merges_to_max() {
        let ds = vec![
            Discrepancy {
                field: FieldName::Investors,
                severity: Severity::Minor,
                impact: 0.2,
                description: String::new(),
            },
            Discrepancy {
                field: FieldName::Investors,
                severity: Severity::Moderate,
                impact: 0.5,
                description: String::new(),
            },
        ];
        let merged = max_impact_per_field(&ds);
        assert_eq!(merged.len(), 1);
        assert!((merged[&FieldName::Investors] - 0.5).abs() < f64::EPSILON);
        assert!((max_impact(&ds) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_set_has_zero_max_impact() {
        assert_eq!(max_impact(&[]), 0.0);
    }
}
