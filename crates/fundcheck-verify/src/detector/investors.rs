//! Investor-list comparison: subset check with disjointness escalation.

use std::collections::HashSet;

use fundcheck_core::{Discrepancy, FieldName, Severity};

use super::normalize::normalize;

/// Impact per investor named in the claim but absent from the source.
pub const MISSING_INVESTOR_IMPACT: f64 = 0.2;
/// Impact when the reported and extracted sets share no names at all.
pub const DISJOINT_IMPACT: f64 = 0.5;

/// Compare investor lists. The reported set should be a subset
/// (case-insensitive, normalized) of the extracted set; each missing name
/// is a Minor discrepancy, escalating to a single Moderate one when the
/// sets are entirely disjoint.
pub fn detect(reported: &[String], extracted: &[String]) -> Vec<Discrepancy> {
    if reported.is_empty() {
        return Vec::new();
    }

    let extracted_set: HashSet<String> = extracted.iter().map(|s| normalize(s)).collect();
    let missing: Vec<&String> = reported
        .iter()
        .filter(|name| !extracted_set.contains(&normalize(name)))
        .collect();

    if missing.is_empty() {
        return Vec::new();
    }

    // No overlap at all: the source talks about different backers entirely.
    if missing.len() == reported.len() && !extracted.is_empty() {
        return vec![Discrepancy {
            field: FieldName::Investors,
            severity: Severity::Moderate,
            impact: DISJOINT_IMPACT,
            description: format!(
                "No overlap between reported investors ({}) and extracted investors ({})",
                reported.join(", "),
                extracted.join(", ")
            ),
        }];
    }

    missing
        .into_iter()
        .map(|name| Discrepancy {
            field: FieldName::Investors,
            severity: Severity::Minor,
            impact: MISSING_INVESTOR_IMPACT,
            description: format!("Reported investor '{name}' not found in source"),
        })
        .collect()
}
