//! American Express activity export parser.
//!
//! AMEX .xlsx files are formatted oddly: 6 leading title/metadata rows, then
//! a header row that must include Date, Description, Category, Amount.
//!
//! Rows with an empty Category are payments made to American Express, not
//! purchases, and are dropped. Dates arrive in AMEX's native representation
//! (MM/DD/YYYY strings or Excel date cells) and are normalized here.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use tracing::warn;

use crate::error::ParseError;
use crate::types::LedgerTransaction;

const COLUMNS: [&str; 4] = ["Date", "Description", "Category", "Amount"];

/// Leading non-data rows before the header.
const SKIP_ROWS: usize = 6;

/// Excel epoch is 1899-12-30, accounting for the 1900 leap year bug.
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_signed(chrono::Duration::days(serial as i64))
}

fn cell_to_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::String(s) => {
            let s = s.trim();
            NaiveDate::parse_from_str(s, "%m/%d/%Y")
                .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
                .ok()
        }
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()),
        Data::Float(f) => excel_serial_to_date(*f),
        Data::Int(i) => excel_serial_to_date(*i as f64),
        _ => None,
    }
}

fn cell_to_amount(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.replace(',', "").replace('$', "").trim().parse().ok(),
        _ => None,
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

pub fn parse_xlsx(path: &Path) -> Result<Vec<LedgerTransaction>, ParseError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ParseError::EmptySheet(path.display().to_string()))?;
    let range = workbook.worksheet_range(&sheet)?;

    // The range is trimmed to used cells; when the leading metadata rows are
    // blank it already starts at or past the header row.
    let start_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    let mut rows = range.rows().skip(SKIP_ROWS.saturating_sub(start_row));
    let header = rows
        .next()
        .ok_or_else(|| ParseError::EmptySheet(path.display().to_string()))?;

    let mut idx = [0usize; 4];
    for (slot, column) in idx.iter_mut().zip(COLUMNS) {
        *slot = header
            .iter()
            .position(|cell| cell_to_string(cell) == column)
            .ok_or_else(|| ParseError::MissingColumn {
                column,
                file: path.display().to_string(),
            })?;
    }
    let [idx_date, idx_desc, idx_cat, idx_amount] = idx;
    let width = idx.into_iter().max().unwrap_or(0) + 1;

    let mut out = Vec::new();
    for row in rows {
        if row.len() < width {
            continue;
        }

        let category = cell_to_string(&row[idx_cat]);
        if category.is_empty() {
            // Payment to the provider, not a purchase.
            continue;
        }

        let date = match cell_to_date(&row[idx_date]) {
            Some(d) => d,
            None => {
                warn!("skipping AMEX row with unreadable date cell {:?}", row[idx_date]);
                continue;
            }
        };

        let amount = match cell_to_amount(&row[idx_amount]) {
            Some(a) => a,
            None => {
                warn!("skipping AMEX row with unreadable amount cell {:?}", row[idx_amount]);
                continue;
            }
        };

        out.push(LedgerTransaction {
            date,
            description: cell_to_string(&row[idx_desc]),
            category,
            payment_method: "American Express",
            amount,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;

    /// Write an AMEX-shaped workbook: 6 metadata rows, header, data rows.
    fn write_amex_xlsx(dir: &Path, rows: &[(&str, &str, &str, f64)]) -> PathBuf {
        let path = dir.join("amex_activity.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        sheet.write_string(0, 0, "Transaction Details").unwrap();
        sheet.write_string(1, 0, "Prepared for JOHN DOE").unwrap();
        // Rows 2-5 left blank.

        for (col, name) in ["Date", "Description", "Category", "Amount"].iter().enumerate() {
            sheet.write_string(6, col as u16, *name).unwrap();
        }
        for (i, (date, desc, cat, amount)) in rows.iter().enumerate() {
            let r = 7 + i as u32;
            sheet.write_string(r, 0, *date).unwrap();
            sheet.write_string(r, 1, *desc).unwrap();
            if !cat.is_empty() {
                sheet.write_string(r, 2, *cat).unwrap();
            }
            sheet.write_number(r, 3, *amount).unwrap();
        }

        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn test_drops_rows_with_empty_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_amex_xlsx(
            dir.path(),
            &[
                ("02/01/2024", "ONLINE PAYMENT - THANK YOU", "", -20.00),
                ("01/15/2024", "WAKABA RESTAURANT", "Food", 15.00),
            ],
        );

        let txns = parse_xlsx(&path).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date_string(), "2024-01-15");
        assert_eq!(txns[0].category, "Food");
        assert_eq!(txns[0].amount, 15.00);
        assert_eq!(txns[0].payment_method, "American Express");
    }

    #[test]
    fn test_normalizes_native_date_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_amex_xlsx(dir.path(), &[("12/31/2023", "NYE DINNER", "Food", 88.10)]);

        let txns = parse_xlsx(&path).unwrap();
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(txns[0].date_string(), "2023-12-31");
    }

    #[test]
    fn test_missing_category_column_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amex_bad.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, name) in ["Date", "Description", "Amount"].iter().enumerate() {
            sheet.write_string(6, col as u16, *name).unwrap();
        }
        workbook.save(&path).unwrap();

        let err = parse_xlsx(&path).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingColumn { column: "Category", .. }
        ));
    }

    #[test]
    fn test_parses_numeric_date_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amex_activity.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, name) in ["Date", "Description", "Category", "Amount"].iter().enumerate() {
            sheet.write_string(6, col as u16, *name).unwrap();
        }
        // A date exported as a raw Excel serial rather than a string.
        sheet.write_number(7, 0, 45306.0).unwrap();
        sheet.write_string(7, 1, "COFFEE").unwrap();
        sheet.write_string(7, 2, "Food").unwrap();
        sheet.write_number(7, 3, 4.25).unwrap();
        workbook.save(&path).unwrap();

        let txns = parse_xlsx(&path).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(txns[0].date_string(), "2024-01-15");
    }

    #[test]
    fn test_excel_serial_dates_convert() {
        assert_eq!(
            excel_serial_to_date(45667.0),
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
    }
}
