//! Ledger construction: concatenate provider outputs, sort, total.

use tally_ingest::LedgerTransaction;

/// The merged per-run ledger. Built once, rendered once, discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    /// Stably sorted ascending by date; ties keep source order.
    pub transactions: Vec<LedgerTransaction>,
    /// Numeric sum of all amounts, computed before any display formatting.
    pub total: f64,
}

impl Ledger {
    /// Merge parsed record sets into a sorted, totaled ledger.
    ///
    /// Returns `None` when no set contributed any record; the caller writes
    /// nothing in that case.
    pub fn build(sets: Vec<Vec<LedgerTransaction>>) -> Option<Ledger> {
        let mut transactions: Vec<LedgerTransaction> = sets.into_iter().flatten().collect();
        if transactions.is_empty() {
            return None;
        }

        transactions.sort_by_key(|t| t.date);
        let total = transactions.iter().map(|t| t.amount).sum();

        Some(Ledger { transactions, total })
    }
}

/// Render a dollar amount as `$` + thousands-separated two-decimal value.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = format!("{:.2}", value.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${}{grouped}.{frac}", if negative { "-" } else { "" })
}
