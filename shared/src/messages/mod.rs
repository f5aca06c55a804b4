//! Message types exchanged with the presentation layer
//!
//! - `history`: the JSON history export format

pub mod history;

pub use history::{HistoryExport, HistoryExportEntry};
