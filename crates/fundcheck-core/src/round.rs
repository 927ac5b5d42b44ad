use serde::{Deserialize, Serialize};

/// A funding-round date: year with optional month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDate {
    pub year: i32,
    /// 1–12 when known; sources often report only the year.
    pub month: Option<u32>,
}

impl RoundDate {
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }
}

/// The funding-round claim as originally submitted for verification.
///
/// Immutable once constructed; produced by the input-ingestion collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedRound {
    pub company: String,
    /// Amount in millions USD, currency-normalized upstream.
    pub amount: f64,
    /// E.g. "Series A", "Seed".
    pub round_label: String,
    pub date: RoundDate,
    /// May be empty when the claim names no investors.
    pub investors: Vec<String>,
    /// News link supplied with the claim, if any.
    pub source_url: Option<String>,
}

/// Funding-round facts derived from a source document.
///
/// Every field is optional: absence means "not found in source", which is a
/// completeness signal, not a contradiction. Produced by the extraction
/// collaborator; immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRound {
    pub company: Option<String>,
    /// Amount in millions USD.
    pub amount: Option<f64>,
    pub round_label: Option<String>,
    pub date: Option<RoundDate>,
    pub investors: Option<Vec<String>>,
    /// How reliably the unstructured-to-structured conversion succeeded.
    pub extraction_confidence: f64,
    /// Raw source snippets the extraction was based on, kept for audit.
    pub source_excerpts: Vec<String>,
}

impl ExtractedRound {
    /// The extracted amount, if present and comparable.
    ///
    /// A non-finite value (the extraction collaborator failed to parse a
    /// figure) is routed to "absent": it counts against completeness
    /// instead of producing a discrepancy or crashing the verification.
    pub fn comparable_amount(&self) -> Option<f64> {
        self.amount.filter(|a| a.is_finite())
    }

    /// An extraction that found nothing, with the given quality score.
    pub fn empty(extraction_confidence: f64) -> Self {
        Self {
            company: None,
            amount: None,
            round_label: None,
            date: None,
            investors: None,
            extraction_confidence,
            source_excerpts: Vec::new(),
        }
    }
}
