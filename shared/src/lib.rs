//! Shared types for the prompt engine
//!
//! Contains the identifiers, value types and export format used by both the
//! engine core and the presentation layer that calls into it.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{HistoryExport, HistoryExportEntry};
