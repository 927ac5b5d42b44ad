/// Verification subsystem errors.
///
/// Malformed mandatory input fails fast with a structured error; it is
/// never converted into a low-but-plausible confidence score, which would
/// mask a data-quality bug as a low-trust verdict.
#[derive(Debug, thiserror::Error)]
pub enum FundcheckError {
    #[error("score out of range for {field}: {value} (expected 0.0..=1.0)")]
    ScoreOutOfRange { field: &'static str, value: f64 },

    #[error("invalid month in {field}: {month} (expected 1..=12)")]
    InvalidMonth { field: &'static str, month: u32 },

    #[error("non-finite amount in {field}: {value}")]
    NonFiniteAmount { field: &'static str, value: f64 },
}

/// Result alias used across the fundcheck crates.
pub type FundcheckResult<T> = Result<T, FundcheckError>;
