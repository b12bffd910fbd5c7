//! tally-ingest: provider routing and per-provider statement parsers that
//! normalize heterogeneous exports into one canonical transaction shape.

pub mod error;
pub mod parsers;
pub mod routing;
pub mod types;

pub use error::ParseError;
pub use routing::Provider;
pub use types::LedgerTransaction;
