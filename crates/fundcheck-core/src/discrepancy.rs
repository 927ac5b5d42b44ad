use serde::{Deserialize, Serialize};
use std::fmt;

/// A detected mismatch between a reported field and the corresponding
/// extracted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub field: FieldName,
    pub severity: Severity,
    /// Normalized impact in [0.0, 1.0], monotonic with severity.
    pub impact: f64,
    /// Human-readable description of the mismatch.
    pub description: String,
}

/// The reconciled fields a discrepancy can be reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Amount,
    Company,
    Date,
    Investors,
    RoundLabel,
}

impl FieldName {
    /// Stable name used for reporting and for lexical tie-breaking
    /// when sorting discrepancies of equal impact.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Amount => "amount",
            FieldName::Company => "company",
            FieldName::Date => "date",
            FieldName::Investors => "investors",
            FieldName::RoundLabel => "round_label",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrepancy severity, ordered least to most severe.
///
/// The derived `Ord` makes "most severe first" sorting and the
/// severity-to-impact mapping total, with no default-case ambiguity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_is_minor_to_major() {
        assert!(Severity::Minor < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Major);
    }

    #[test]
    fn field_names_are_lexically_ordered_by_as_str() {
        let names = [
            FieldName::Amount,
            FieldName::Company,
            FieldName::Date,
            FieldName::Investors,
            FieldName::RoundLabel,
        ];
        let mut sorted: Vec<&str> = names.iter().map(|f| f.as_str()).collect();
        sorted.sort();
        let original: Vec<&str> = names.iter().map(|f| f.as_str()).collect();
        assert_eq!(sorted, original);
    }
}
