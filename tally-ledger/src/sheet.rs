//! Spreadsheet rendering for a built ledger.
//!
//! One sheet named "Expenses": a header row, one row per transaction, and a
//! trailing total row under its own `Total` column so summary and
//! transaction cells never share a column. Cells are center-aligned and
//! column widths track the longest rendered value plus padding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::builder::{format_amount, Ledger};

pub const OUTPUT_FILE_NAME: &str = "ExpenseSheet.xlsx";
pub const SHEET_NAME: &str = "Expenses";

const HEADERS: [&str; 6] = [
    "Transaction Date",
    "Description",
    "Category",
    "Payment Method",
    "Amount",
    "Total",
];
const WIDTH_PADDING: usize = 2;

/// Width contribution of a cell, in characters rather than bytes.
fn content_width(value: &str) -> usize {
    value.chars().count()
}

/// Write the ledger to `ExpenseSheet.xlsx` inside `folder`, overwriting any
/// existing file of that name. Returns the output path.
pub fn write_sheet(ledger: &Ledger, folder: &Path) -> Result<PathBuf> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let centered = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    let mut widths: [usize; 6] = HEADERS.map(content_width);
    let mut write = |sheet: &mut rust_xlsxwriter::Worksheet,
                     row: u32,
                     col: usize,
                     value: &str|
     -> Result<()> {
        widths[col] = widths[col].max(content_width(value));
        sheet.write_string_with_format(row, col as u16, value, &centered)?;
        Ok(())
    };

    for (col, header) in HEADERS.iter().enumerate() {
        write(sheet, 0, col, header)?;
    }

    for (i, txn) in ledger.transactions.iter().enumerate() {
        let row = 1 + i as u32;
        write(sheet, row, 0, &txn.date_string())?;
        write(sheet, row, 1, &txn.description)?;
        write(sheet, row, 2, &txn.category)?;
        write(sheet, row, 3, txn.payment_method)?;
        write(sheet, row, 4, &format_amount(txn.amount))?;
        // Total column stays empty on transaction rows.
    }

    let total_row = 1 + ledger.transactions.len() as u32;
    write(sheet, total_row, 5, &format_amount(ledger.total))?;

    for (col, width) in widths.into_iter().enumerate() {
        sheet.set_column_width(col as u16, (width + WIDTH_PADDING) as f64)?;
    }

    let path = folder.join(OUTPUT_FILE_NAME);
    workbook
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width_counts_characters_not_bytes() {
        assert_eq!(content_width("CAFÉ MÜLLER"), 11);
        assert_eq!(content_width("Transaction Date"), 16);
        assert_eq!(content_width(""), 0);
    }
}
