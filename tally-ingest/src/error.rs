use thiserror::Error;

/// Structural failures inside a single routed file.
///
/// These never escape the per-file boundary: the pipeline logs them and the
/// file contributes zero records.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("missing expected column {column:?} in {file}")]
    MissingColumn { column: &'static str, file: String },

    #[error("no worksheet found in {0}")]
    EmptySheet(String),
}
