use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;
use crate::discrepancy::Discrepancy;

/// Result of reconciling a reported round against an extracted record.
///
/// Created once per verification request and never mutated; a new
/// verification produces a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Calibrated overall confidence.
    pub overall_confidence: Confidence,
    pub verdict: Verdict,
    /// Per-component breakdown, kept for audit and explainability.
    pub component_scores: ComponentScores,
    /// All detected discrepancies, most severe first.
    pub discrepancies: Vec<Discrepancy>,
    /// Human-readable notes summarizing the outcome.
    pub notes: Vec<String>,
}

/// Scores for each component feeding the overall confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// Trust in the source document itself.
    pub source_reliability: f64,
    /// 1.0 minus the worst discrepancy impact.
    pub data_consistency: f64,
    /// Fraction of required fields found in the extracted record.
    pub completeness: f64,
    /// Quality of the unstructured-to-structured conversion.
    pub extraction_quality: f64,
    /// Multiplicative dampening factor from the worst discrepancy.
    pub discrepancy_factor: f64,
}

/// Three-tier trust verdict for a verification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Verified,
    PartiallyVerified,
    Unverified,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Verified => "VERIFIED",
            Verdict::PartiallyVerified => "PARTIALLY_VERIFIED",
            Verdict::Unverified => "UNVERIFIED",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
