//! VerificationEngine — validates inputs, runs all stages, and assembles
//! the final result.

use tracing::debug;

use fundcheck_core::errors::{FundcheckError, FundcheckResult};
use fundcheck_core::{
    ExtractedRound, ReportedRound, SourceReliability, VerificationResult,
};

use crate::aggregate;
use crate::completeness;
use crate::detector;
use crate::verdict;

/// The funding-round verification engine.
///
/// Pure and stateless: `verify` is a computation over immutable inputs with
/// no I/O and no shared state, so one engine can serve any number of
/// concurrent callers without synchronization. Identical inputs always
/// produce an identical result.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerificationEngine;

impl VerificationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Reconcile a reported round against an extracted record and a source
    /// reliability assessment.
    ///
    /// Fails fast on malformed mandatory input (any score outside [0, 1]);
    /// bad input is never folded into a low-confidence verdict.
    pub fn verify(
        &self,
        reported: &ReportedRound,
        extracted: &ExtractedRound,
        source_reliability: &SourceReliability,
    ) -> FundcheckResult<VerificationResult> {
        source_reliability.validate()?;
        validate_extraction_confidence(extracted.extraction_confidence)?;
        validate_reported_amount(reported.amount)?;
        validate_months(reported, extracted)?;

        let detection = detector::detect(reported, extracted);
        let completeness = completeness::completeness(extracted);

        let (overall, component_scores) = aggregate::aggregate(
            source_reliability.overall,
            completeness,
            extracted.extraction_confidence,
            &detection.discrepancies,
        );

        let verdict = verdict::classify(overall);

        debug!(
            company = %reported.company,
            overall = %overall,
            verdict = %verdict,
            discrepancies = detection.discrepancies.len(),
            "verification complete"
        );

        let notes = build_notes(reported, source_reliability, &detection, verdict);

        Ok(VerificationResult {
            overall_confidence: overall,
            verdict,
            component_scores,
            discrepancies: detection.discrepancies,
            notes,
        })
    }
}

/// Verify with a default engine.
pub fn verify(
    reported: &ReportedRound,
    extracted: &ExtractedRound,
    source_reliability: &SourceReliability,
) -> FundcheckResult<VerificationResult> {
    VerificationEngine::new().verify(reported, extracted, source_reliability)
}

fn validate_extraction_confidence(value: f64) -> FundcheckResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(FundcheckError::ScoreOutOfRange {
            field: "extraction_confidence",
            value,
        });
    }
    Ok(())
}

/// The reported amount is mandatory input: unlike the extracted side,
/// which routes unparsable amounts to absence, a non-finite claim is a
/// data-quality bug and must surface as an error, not a low verdict.
fn validate_reported_amount(value: f64) -> FundcheckResult<()> {
    if !value.is_finite() {
        return Err(FundcheckError::NonFiniteAmount {
            field: "reported.amount",
            value,
        });
    }
    Ok(())
}

fn validate_months(
    reported: &ReportedRound,
    extracted: &ExtractedRound,
) -> FundcheckResult<()> {
    if let Some(month) = reported.date.month {
        if !(1..=12).contains(&month) {
            return Err(FundcheckError::InvalidMonth {
                field: "reported.date",
                month,
            });
        }
    }
    if let Some(month) = extracted.date.and_then(|d| d.month) {
        if !(1..=12).contains(&month) {
            return Err(FundcheckError::InvalidMonth {
                field: "extracted.date",
                month,
            });
        }
    }
    Ok(())
}

/// Human-readable summary lines: status, source assessment, then one line
/// per discrepancy plus any audit notes from detection.
fn build_notes(
    reported: &ReportedRound,
    source_reliability: &SourceReliability,
    detection: &detector::DetectionResult,
    verdict: fundcheck_core::Verdict,
) -> Vec<String> {
    let mut notes = Vec::with_capacity(2 + detection.discrepancies.len());

    notes.push(format!(
        "Verification status for {}: {}",
        reported.company, verdict
    ));
    notes.push(format!(
        "Source reliability: {:.2} (domain reputation {:.2}, editorial {:.2}, history {:.2})",
        source_reliability.overall,
        source_reliability.domain_reputation,
        source_reliability.editorial_status,
        source_reliability.history,
    ));

    if detection.discrepancies.is_empty() {
        notes.push("No discrepancies found".to_string());
    } else {
        for d in &detection.discrepancies {
            notes.push(format!(
                "[{:?}] {} (impact {:.2})",
                d.severity, d.description, d.impact
            ));
        }
    }

    notes.extend(detection.notes.iter().cloned());
    notes
}
