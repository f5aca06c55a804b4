//! Trait definitions with mockall annotations for testing
//!
//! The core is pure apart from the wall clock used to stamp history records
//! and the file system used for exports; both are injected here so tests can
//! pin timestamps and avoid touching disk.

use chrono::{DateTime, Utc};
use std::path::Path;

use crate::error::EngineResult;

/// Time source for history record timestamps
#[mockall::automock]
pub trait Clock: Send + Sync {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// File access for history exports and reports
///
/// Keeps the session free of direct I/O so export paths can be tested
/// with a mock.
#[mockall::automock]
pub trait FileSystem: Send + Sync {
    /// Write `contents` to `path`, replacing any existing file
    ///
    /// # Parameters
    /// - `path`: Destination file; parent directories are created
    /// - `contents`: UTF-8 text to write
    fn write_text(&self, path: &Path, contents: &str) -> EngineResult<()>;

    /// Read a whole UTF-8 file
    fn read_text(&self, path: &Path) -> EngineResult<String>;
}
