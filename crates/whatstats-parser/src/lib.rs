pub mod errors;
pub mod export;
pub mod model;

pub use errors::{ExportError, RowError};
pub use export::{parse_export, parse_row, ExportSchema, ParsedExport};
pub use model::{Event, UNKNOWN_SENDER};
