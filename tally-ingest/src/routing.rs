//! Filename-convention routing.
//!
//! Provider identity is conveyed only through the file name (e.g.
//! `c1_activity.csv`, `amex_activity.xlsx`), never through file content.
//! This is a deliberate contract the caller must follow; routing happens
//! before any parsing is attempted.

use std::path::Path;

use crate::error::ParseError;
use crate::parsers;
use crate::types::LedgerTransaction;

/// A financial institution with a dedicated parser.
///
/// Adding a provider means adding a variant here, its token/extension row in
/// [`Provider::route`], and one parser module — shared dispatch never
/// changes beyond that table. (A Robinhood Gold variant would need OCR over
/// image statements and is deliberately unimplemented.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    CapitalOne,
    AmericanExpress,
}

impl Provider {
    /// Fixed label stamped onto every transaction this provider emits.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CapitalOne => "Capital One",
            Self::AmericanExpress => "American Express",
        }
    }

    /// Select a provider from a file name, or `None` for unroutable files.
    ///
    /// `.csv` containing `"c1"` routes to Capital One; `.xlsx` containing
    /// `"amex"` routes to American Express. Extension match is
    /// case-insensitive, token match is on the raw name.
    pub fn route(file_name: &str) -> Option<Provider> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())?;

        if ext.eq_ignore_ascii_case("csv") && file_name.contains("c1") {
            Some(Self::CapitalOne)
        } else if ext.eq_ignore_ascii_case("xlsx") && file_name.contains("amex") {
            Some(Self::AmericanExpress)
        } else {
            None
        }
    }

    /// Parse one export file into canonical transactions.
    pub fn parse(&self, path: &Path) -> Result<Vec<LedgerTransaction>, ParseError> {
        match self {
            Self::CapitalOne => parsers::capital_one::parse_csv(path),
            Self::AmericanExpress => parsers::american_express::parse_xlsx(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_capital_one_csv() {
        assert_eq!(Provider::route("c1_activity.csv"), Some(Provider::CapitalOne));
        assert_eq!(Provider::route("2024_c1.CSV"), Some(Provider::CapitalOne));
    }

    #[test]
    fn test_routes_amex_xlsx() {
        assert_eq!(
            Provider::route("amex_activity.xlsx"),
            Some(Provider::AmericanExpress)
        );
    }

    #[test]
    fn test_token_and_extension_must_agree() {
        // Right token, wrong extension
        assert_eq!(Provider::route("amex_activity.csv"), None);
        assert_eq!(Provider::route("c1_activity.xlsx"), None);
    }

    #[test]
    fn test_unroutable_files() {
        assert_eq!(Provider::route("statement.pdf"), None);
        assert_eq!(Provider::route("ExpenseSheet.xlsx"), None);
        assert_eq!(Provider::route("notes.txt"), None);
        assert_eq!(Provider::route("no_extension"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Provider::CapitalOne.label(), "Capital One");
        assert_eq!(Provider::AmericanExpress.label(), "American Express");
    }
}
