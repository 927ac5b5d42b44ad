//! Fixed weights and thresholds for confidence aggregation.
//!
//! These are deliberately constants, not configuration: verdicts must be
//! reproducible across runs and deployments for audit purposes.

/// Fundcheck system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight of the source-reliability component.
pub const WEIGHT_SOURCE_RELIABILITY: f64 = 0.30;

/// Weight of the data-consistency component.
pub const WEIGHT_DATA_CONSISTENCY: f64 = 0.30;

/// Weight of the completeness component.
pub const WEIGHT_COMPLETENESS: f64 = 0.20;

/// Weight of the extraction-quality component.
pub const WEIGHT_EXTRACTION_QUALITY: f64 = 0.10;

/// Multiplier applied to the worst discrepancy impact when dampening.
/// A maximal-impact discrepancy suppresses at most 80% of the weighted
/// score, so strong corroborating signals never collapse to exactly zero.
pub const DISCREPANCY_DAMPENING: f64 = 0.8;

/// Overall confidence at or above this classifies as VERIFIED.
pub const VERIFIED_THRESHOLD: f64 = 0.80;

/// Overall confidence at or above this (and below VERIFIED_THRESHOLD)
/// classifies as PARTIALLY_VERIFIED.
pub const PARTIALLY_VERIFIED_THRESHOLD: f64 = 0.60;

/// Number of fields required for full completeness: company, amount,
/// round label, date year.
pub const REQUIRED_FIELD_COUNT: usize = 4;
