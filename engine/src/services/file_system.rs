//! Real file system service implementation
//!
//! Writes go to a sibling temporary file first and are renamed into place,
//! so a failed export never leaves a truncated file behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EngineResult;
use crate::traits::FileSystem;
use shared::{component_debug, Component};

/// Real file system implementation
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}

impl FileSystem for RealFileSystem {
    fn write_text(&self, path: &Path, contents: &str) -> EngineResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp = Self::temp_path(path);
        fs::write(&temp, contents)?;
        if let Err(e) = fs::rename(&temp, path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        component_debug!(Component::Cli, path = %path.display(), bytes = contents.len(), "💾 Wrote file");
        Ok(())
    }

    fn read_text(&self, path: &Path) -> EngineResult<String> {
        Ok(fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let fs = RealFileSystem::new();

        fs.write_text(&path, "first").unwrap();
        fs.write_text(&path, "second").unwrap();

        assert_eq!(fs.read_text(&path).unwrap(), "second");
        assert!(!RealFileSystem::temp_path(&path).exists());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = RealFileSystem::new().read_text(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(EngineError::IoError(_))));
    }
}
