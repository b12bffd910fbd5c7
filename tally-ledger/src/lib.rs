//! tally-ledger: merges per-provider transaction sets into one sorted,
//! totaled ledger and renders it to a styled expense spreadsheet.

pub mod builder;
pub mod pipeline;
pub mod sheet;

pub use builder::{format_amount, Ledger};
pub use pipeline::build_expense_sheet;
