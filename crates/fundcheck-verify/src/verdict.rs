//! Verdict classification: pure threshold mapping, stateless per call.

use fundcheck_core::constants::{PARTIALLY_VERIFIED_THRESHOLD, VERIFIED_THRESHOLD};
use fundcheck_core::{Confidence, Verdict};

/// Map an overall confidence to a verdict. Boundaries are inclusive on the
/// lower bound: exactly 0.80 is Verified, exactly 0.60 is PartiallyVerified.
pub fn classify(overall: Confidence) -> Verdict {
    let value = overall.value();
    if value >= VERIFIED_THRESHOLD {
        Verdict::Verified
    } else if value >= PARTIALLY_VERIFIED_THRESHOLD {
        Verdict::PartiallyVerified
    } else {
        Verdict::Unverified
    }
}
