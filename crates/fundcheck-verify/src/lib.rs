//! # fundcheck-verify
//!
//! Confidence-scoring and discrepancy-reconciliation engine for
//! funding-round claims.
//!
//! ## Stages
//! 1. **Discrepancy detection** — per-field comparison of the reported
//!    claim against the extracted record (amount, date, round label,
//!    investors, company)
//! 2. **Completeness** — fraction of required fields found in the source
//! 3. **Aggregation** — fixed-weight combination plus multiplicative
//!    worst-discrepancy dampening
//! 4. **Classification** — three-tier verdict from fixed thresholds
//!
//! The whole pipeline is pure and synchronous: no I/O, no shared state,
//! identical inputs always produce an identical result.

pub mod aggregate;
pub mod completeness;
pub mod detector;
pub mod engine;
pub mod verdict;

pub use engine::{verify, VerificationEngine};
