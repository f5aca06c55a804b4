//! Session context
//!
//! Owns everything a presentation layer would otherwise keep in ambient
//! state: the current prompt, the last results and the history ledger.
//! The clock and file system are injected so every path is testable.

use shared::{component_info, logging, Component, ProviderId, RecordId};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::config::EngineConfig;
use crate::core::history::{HistoryLedger, OptimizationRecord};
use crate::core::metrics::compute_metrics;
use crate::core::optimizer::{OptimizationOutcome, Optimizer, Selection};
use crate::core::{report, templates};
use crate::error::{EngineError, EngineResult};
use crate::services::SystemClock;
use crate::traits::{Clock, FileSystem};

/// One user's working context
pub struct Session {
    config: EngineConfig,
    optimizer: Optimizer,
    ledger: HistoryLedger,
    clock: Box<dyn Clock>,
    current_prompt: String,
    current: Option<OptimizationRecord>,
    last_outcome: Option<OptimizationOutcome>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("records", &self.ledger.len())
            .field("current_prompt", &self.current_prompt)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session with an injected clock
    pub fn new(config: EngineConfig, clock: Box<dyn Clock>) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            optimizer: Optimizer::with_top_n(config.recommended_top_n),
            config,
            ledger: HistoryLedger::new(),
            clock,
            current_prompt: String::new(),
            current: None,
            last_outcome: None,
        })
    }

    /// Create a session stamped by the system clock
    pub fn with_system_clock(config: EngineConfig) -> EngineResult<Self> {
        Self::new(config, Box::new(SystemClock))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_prompt(&self) -> &str {
        &self.current_prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.current_prompt = prompt.into();
    }

    /// Record currently shown as the latest result
    pub fn current(&self) -> Option<&OptimizationRecord> {
        self.current.as_ref()
    }

    /// Full outcome of the last successful `optimize` call in this session
    pub fn last_outcome(&self) -> Option<&OptimizationOutcome> {
        self.last_outcome.as_ref()
    }

    /// Optimize a prompt and append exactly one history record
    ///
    /// Providers and selection go to the optimizer unchanged, so an empty
    /// provider list is rejected as invalid input. Nothing is recorded on
    /// failure.
    pub fn optimize(
        &mut self,
        prompt: &str,
        providers: &[ProviderId],
        selection: &Selection,
    ) -> EngineResult<OptimizationRecord> {
        let outcome = match self.optimizer.optimize(prompt, providers, selection) {
            Ok(outcome) => outcome,
            Err(e) => {
                logging::log_error(Component::Optimizer, "Optimization", &e);
                return Err(e);
            }
        };

        let record = OptimizationRecord {
            id: RecordId::new(),
            timestamp: self.clock.now(),
            original: prompt.to_string(),
            optimized: outcome.texts(),
            techniques: outcome.technique_names(),
            metrics: compute_metrics(prompt),
            mode: outcome.mode_label(),
        };

        self.ledger.append(record.clone());
        self.current_prompt = prompt.to_string();
        self.current = Some(record.clone());
        self.last_outcome = Some(outcome);

        component_info!(
            Component::Optimizer,
            record = %record.id,
            providers = record.optimized.len(),
            "Optimization recorded"
        );
        Ok(record)
    }

    /// Optimize the current prompt
    pub fn optimize_current(&mut self, providers: &[ProviderId], selection: &Selection) -> EngineResult<OptimizationRecord> {
        let prompt = self.current_prompt.clone();
        self.optimize(&prompt, providers, selection)
    }

    /// Restore a past record's prompt and results as current
    pub fn reuse(&mut self, id: &RecordId) -> EngineResult<&OptimizationRecord> {
        let record = self.ledger.get(id).ok_or_else(|| EngineError::UnknownRecord { id: id.to_string() })?;
        self.current_prompt = record.original.clone();
        self.last_outcome = None;
        component_info!(Component::History, record = %id, "Record restored");
        Ok(self.current.insert(record))
    }

    /// Render a template into the current prompt
    pub fn apply_template(&mut self, name: &str, values: &HashMap<String, String>) -> EngineResult<&str> {
        self.current_prompt = templates::render(name, values)?;
        component_info!(Component::Templates, template = name, "Template applied to current prompt");
        Ok(&self.current_prompt)
    }

    /// Every record, most recent first
    pub fn history(&self, filter: Option<&str>) -> Vec<OptimizationRecord> {
        self.ledger.list(filter)
    }

    /// Most recent records up to the configured display limit
    pub fn display_history(&self, filter: Option<&str>) -> Vec<OptimizationRecord> {
        let mut records = self.ledger.list(filter);
        records.truncate(self.config.history_display_limit);
        records
    }

    pub fn history_len(&self) -> usize {
        self.ledger.len()
    }

    pub fn clear_history(&mut self) {
        self.ledger.clear();
        self.current = None;
        self.last_outcome = None;
    }

    pub fn export_history_json(&self) -> EngineResult<String> {
        self.ledger.export_json()
    }

    pub fn import_history_json(&mut self, json: &str) -> EngineResult<usize> {
        self.ledger.import_json(json)
    }

    /// Markdown report for a record, or for the current one
    pub fn report(&self, id: Option<&RecordId>) -> EngineResult<String> {
        let record = match id {
            Some(id) => self.ledger.get(id).ok_or_else(|| EngineError::UnknownRecord { id: id.to_string() })?,
            None => self
                .current
                .clone()
                .ok_or_else(|| EngineError::invalid_input("no optimization to report"))?,
        };
        Ok(report::render_report(&record, self.clock.now()))
    }

    /// Report preview truncated to the configured length
    pub fn report_preview(&self, id: Option<&RecordId>) -> EngineResult<String> {
        Ok(report::preview(&self.report(id)?, self.config.report_preview_chars))
    }

    pub fn save_history(&self, fs: &dyn FileSystem, path: &Path) -> EngineResult<()> {
        fs.write_text(path, &self.export_history_json()?)?;
        logging::log_success(Component::History, &format!("Exported {} records", self.ledger.len()));
        Ok(())
    }

    pub fn load_history(&mut self, fs: &dyn FileSystem, path: &Path) -> EngineResult<usize> {
        let json = fs.read_text(path)?;
        self.import_history_json(&json)
    }

    pub fn save_report(&self, fs: &dyn FileSystem, path: &Path, id: Option<&RecordId>) -> EngineResult<()> {
        fs.write_text(path, &self.report(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockClock, MockFileSystem};
    use chrono::{TimeZone, Utc};
    use shared::Mode;

    fn session() -> Session {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        Session::new(EngineConfig::default(), Box::new(clock)).unwrap()
    }

    #[test]
    fn test_optimize_appends_one_record() {
        let mut session = session();
        let record = session
            .optimize("Explain how gravity works.", &[ProviderId::Anthropic], &Selection::Mode(Mode::Reasoning))
            .unwrap();

        assert_eq!(session.history_len(), 1);
        assert_eq!(record.timestamp, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(record.metrics.word_count, 4);
        assert_eq!(record.mode, "mode:reasoning");
        assert_eq!(session.current_prompt(), "Explain how gravity works.");
        assert_eq!(session.current().map(|r| r.id), Some(record.id));
    }

    #[test]
    fn test_failed_optimize_records_nothing() {
        let mut session = session();
        let result = session.optimize("", &[ProviderId::OpenAI], &Selection::Mode(Mode::Minimal));
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
        assert_eq!(session.history_len(), 0);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_empty_providers_are_rejected() {
        let mut session = session();
        let result = session.optimize("List primes.", &[], &Selection::Recommended);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
        assert_eq!(session.history_len(), 0);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_empty_focus_matches_optimizer() {
        let mut session = session();
        let record = session
            .optimize("Please list primes.", &[ProviderId::Anthropic], &Selection::FocusAreas(vec![]))
            .unwrap();
        let direct = crate::optimize("Please list primes.", &[ProviderId::Anthropic], &Selection::Recommended).unwrap();
        assert_eq!(record.optimized[&ProviderId::Anthropic], direct[&ProviderId::Anthropic].text);
        assert_eq!(record.techniques[&ProviderId::Anthropic], vec!["XML Task Tags", "Step-by-Step Reasoning", "Expert Role"]);
    }

    #[test]
    fn test_save_history_writes_export() {
        let mut session = session();
        session.optimize("List primes.", &[ProviderId::Google], &Selection::Recommended).unwrap();

        let mut fs = MockFileSystem::new();
        fs.expect_write_text()
            .withf(|path, contents| path.ends_with("history.json") && contents.contains("\"original\": \"List primes.\""))
            .times(1)
            .returning(|_, _| Ok(()));

        session.save_history(&fs, Path::new("out/history.json")).unwrap();
    }

    #[test]
    fn test_report_requires_a_result() {
        let session = session();
        assert!(matches!(session.report(None), Err(EngineError::InvalidInput { .. })));
        assert!(matches!(session.report(Some(&RecordId::new())), Err(EngineError::UnknownRecord { .. })));
    }
}
