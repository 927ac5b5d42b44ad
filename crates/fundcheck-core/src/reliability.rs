use serde::{Deserialize, Serialize};

use crate::errors::{FundcheckError, FundcheckResult};

/// Trust assessment for the source document, supplied by the
/// domain-reputation collaborator.
///
/// The overall score is a deterministic function of the sub-scores as
/// defined by that collaborator; the engine treats it as opaque input and
/// only checks ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceReliability {
    /// Overall reliability score.
    pub overall: f64,
    /// Domain age and reputation signal.
    pub domain_reputation: f64,
    /// Whether the outlet has editorial oversight (verified publisher).
    pub editorial_status: f64,
    /// Track record of the outlet on prior verifications.
    pub history: f64,
}

impl SourceReliability {
    /// Check that every score is finite and within [0.0, 1.0].
    pub fn validate(&self) -> FundcheckResult<()> {
        for (field, value) in [
            ("source_reliability.overall", self.overall),
            ("source_reliability.domain_reputation", self.domain_reputation),
            ("source_reliability.editorial_status", self.editorial_status),
            ("source_reliability.history", self.history),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(FundcheckError::ScoreOutOfRange { field, value });
            }
        }
        Ok(())
    }
}
