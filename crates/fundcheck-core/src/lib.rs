//! # fundcheck-core
//!
//! Foundation crate for the fundcheck verification system.
//! Defines the data model, errors, and constants shared by the engine.
//! Everything here is plain immutable data — no I/O, no state.

pub mod confidence;
pub mod constants;
pub mod discrepancy;
pub mod errors;
pub mod reliability;
pub mod round;
pub mod verification;

// Re-export the most commonly used types at the crate root.
pub use confidence::Confidence;
pub use discrepancy::{Discrepancy, FieldName, Severity};
pub use errors::{FundcheckError, FundcheckResult};
pub use reliability::SourceReliability;
pub use round::{ExtractedRound, ReportedRound, RoundDate};
pub use verification::{ComponentScores, VerificationResult, Verdict};
