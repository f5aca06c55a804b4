//! History ledger
//!
//! Append-only, session-scoped record of optimizations. Records are stored
//! oldest first and listed most recent first. No size cap is enforced here;
//! windowing for display belongs to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{component_info, Component, HistoryExport, HistoryExportEntry, Metrics, ProviderId, RecordId};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::EngineResult;

/// Mode label stored on records restored from an export
pub const IMPORTED_MODE: &str = "imported";

/// One completed optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRecord {
    pub id: RecordId,
    pub timestamp: DateTime<Utc>,
    pub original: String,
    pub optimized: BTreeMap<ProviderId, String>,
    /// Applied technique display names per provider, in application order
    pub techniques: BTreeMap<ProviderId, Vec<String>>,
    /// Metrics of the original prompt
    pub metrics: Metrics,
    pub mode: String,
}

impl OptimizationRecord {
    /// Project onto the export wire format
    pub fn to_export_entry(&self) -> HistoryExportEntry {
        HistoryExportEntry {
            timestamp: self.timestamp,
            original: self.original.clone(),
            optimized: self.optimized.clone(),
            metrics: self.metrics.clone(),
        }
    }

    /// Rebuild a record from an exported entry; techniques are not exported
    pub fn from_export_entry(entry: HistoryExportEntry) -> Self {
        Self {
            id: RecordId::new(),
            timestamp: entry.timestamp,
            original: entry.original,
            optimized: entry.optimized,
            techniques: BTreeMap::new(),
            metrics: entry.metrics,
            mode: IMPORTED_MODE.to_string(),
        }
    }
}

/// Session-owned sequence of optimization records
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Mutex<Vec<OptimizationRecord>>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored: no critical section leaves the Vec half-updated
    fn records(&self) -> MutexGuard<'_, Vec<OptimizationRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn append(&self, record: OptimizationRecord) {
        let mut records = self.records();
        records.push(record);
        component_info!(Component::History, records = records.len(), "History record appended");
    }

    /// Records most recent first, optionally filtered by a case-insensitive
    /// substring of the original prompt
    pub fn list(&self, filter: Option<&str>) -> Vec<OptimizationRecord> {
        let needle = filter.map(str::to_lowercase).filter(|f| !f.is_empty());
        self.records()
            .iter()
            .rev()
            .filter(|r| match &needle {
                Some(needle) => r.original.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &RecordId) -> Option<OptimizationRecord> {
        self.records().iter().find(|r| r.id == *id).cloned()
    }

    pub fn clear(&self) {
        let mut records = self.records();
        let removed = records.len();
        records.clear();
        component_info!(Component::History, removed = removed, "History cleared");
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Export every record, oldest first
    pub fn export(&self) -> HistoryExport {
        HistoryExport::new(self.records().iter().map(OptimizationRecord::to_export_entry).collect())
    }

    pub fn export_json(&self) -> EngineResult<String> {
        Ok(self.export().to_json()?)
    }

    /// Append every entry of an export in file order; returns the number imported
    pub fn import_json(&self, json: &str) -> EngineResult<usize> {
        let export = HistoryExport::from_json(json)?;
        let imported = export.len();
        let mut records = self.records();
        records.extend(export.entries.into_iter().map(OptimizationRecord::from_export_entry));
        component_info!(Component::History, imported = imported, records = records.len(), "History imported");
        Ok(imported)
    }
}
