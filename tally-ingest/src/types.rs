use chrono::NaiveDate;
use serde::Serialize;

/// Normalized output of provider parsers (provider-agnostic).
///
/// Exactly five populated fields regardless of the source layout. Amounts
/// stay numeric until the sheet is rendered; repayments to the provider
/// (credits) never appear here, so `amount` is non-negative in practice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    /// Fixed label for the originating provider, assigned by the parser.
    pub payment_method: &'static str,
    /// Charge/purchase amount in dollars.
    pub amount: f64,
}

impl LedgerTransaction {
    /// Date rendered in the canonical `YYYY-MM-DD` form used for output.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
