//! Completeness evaluation: what fraction of the required fields the
//! extraction actually found.

use fundcheck_core::constants::REQUIRED_FIELD_COUNT;
use fundcheck_core::ExtractedRound;

use crate::detector::normalize::is_present;

/// Fraction of required fields (company, amount, round label, date year)
/// present and non-empty in the extracted record.
///
/// Investor list and month granularity are informative but not required;
/// their absence never penalizes completeness. Presence is binary — a
/// present field counts fully regardless of extraction confidence.
pub fn completeness(extracted: &ExtractedRound) -> f64 {
    let present = [
        extracted.company.as_deref().is_some_and(is_present),
        extracted.comparable_amount().is_some(),
        extracted.round_label.as_deref().is_some_and(is_present),
        extracted.date.is_some(),
    ]
    .iter()
    .filter(|&&p| p)
    .count();

    present as f64 / REQUIRED_FIELD_COUNT as f64
}
