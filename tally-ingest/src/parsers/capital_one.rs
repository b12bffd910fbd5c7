//! Capital One activity export parser.
//!
//! Flat CSV, header on row 0:
//!   Transaction Date,Posted Date,Card No.,Description,Category,Debit,Credit
//!
//! Only the Debit column is kept as the amount; rows with an empty Debit are
//! payments made to Capital One and are not tracked. Extra columns are
//! ignored.

use std::path::Path;

use chrono::NaiveDate;
use tracing::warn;

use crate::error::ParseError;
use crate::types::LedgerTransaction;

const COLUMNS: [&str; 4] = ["Transaction Date", "Description", "Category", "Debit"];

fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").replace('$', "").trim().parse().ok()
}

pub fn parse_csv(path: &Path) -> Result<Vec<LedgerTransaction>, ParseError> {
    let mut rdr = csv::Reader::from_path(path)?;

    // Column positions are discovered from the header by name.
    let headers = rdr.headers()?.clone();
    let mut idx = [0usize; 4];
    for (slot, column) in idx.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| ParseError::MissingColumn {
                column,
                file: path.display().to_string(),
            })?;
    }
    let [idx_date, idx_desc, idx_cat, idx_debit] = idx;

    let mut out = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let debit = record.get(idx_debit).unwrap_or("").trim();
        if debit.is_empty() {
            // Payment to the provider, not a purchase.
            continue;
        }

        let date_str = record.get(idx_date).unwrap_or("").trim();
        let date = match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                warn!("skipping Capital One row with unexpected date {date_str:?}");
                continue;
            }
        };

        let amount = match parse_amount(debit) {
            Some(a) => a,
            None => {
                warn!("skipping Capital One row with unparseable debit {debit:?}");
                continue;
            }
        };

        out.push(LedgerTransaction {
            date,
            description: record.get(idx_desc).unwrap_or("").trim().to_string(),
            category: record.get(idx_cat).unwrap_or("").trim().to_string(),
            payment_method: "Capital One",
            amount,
        });
    }

    Ok(out)
}
