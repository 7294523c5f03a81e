use thiserror::Error;

/// Fatal export-level failures. Anything here aborts the run; per-row
/// problems are `RowError` and never surface past the export loop.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("export file has no header row")]
    MissingHeader,

    #[error("export header is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("export contained no valid messages ({rows} rows scanned, all dropped)")]
    Empty { rows: usize },
}

/// Why a single row was rejected. Rows failing validation are dropped
/// silently; the variants exist so tests can assert on the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("date field does not match the two-digit-year export pattern")]
    InvalidDate,

    #[error("time field does not combine into a valid timestamp")]
    InvalidTime,
}
