//! History export format
//!
//! A history export is a JSON array of objects with `timestamp` (ISO-8601),
//! `original`, `optimized` (provider -> text) and `metrics` (flat object).
//! This is the only persisted shape the engine produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{SharedError, SharedResult};
use crate::types::{Metrics, ProviderId};

/// One exported optimization record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryExportEntry {
    pub timestamp: DateTime<Utc>,
    pub original: String,
    pub optimized: BTreeMap<ProviderId, String>,
    pub metrics: Metrics,
}

/// Ordered collection of exported records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryExport {
    pub entries: Vec<HistoryExportEntry>,
}

impl HistoryExport {
    pub fn new(entries: Vec<HistoryExportEntry>) -> Self {
        Self { entries }
    }

    /// Serialize as a pretty-printed JSON array
    pub fn to_json(&self) -> SharedResult<String> {
        serde_json::to_string_pretty(&self.entries).map_err(|e| SharedError::SerializationError {
            message: e.to_string(),
        })
    }

    /// Parse a JSON array produced by [`HistoryExport::to_json`]
    pub fn from_json(json: &str) -> SharedResult<Self> {
        let entries: Vec<HistoryExportEntry> =
            serde_json::from_str(json).map_err(|e| SharedError::DeserializationError {
                message: e.to_string(),
            })?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
