//! Test helpers and builder patterns for engine tests
//!
//! This module provides convenient helper functions and builder patterns
//! to reduce test boilerplate and improve maintainability.
use chrono::Duration;
use prompt_engine::traits::MockClock;
use prompt_engine::*;
use shared::ProviderId;
use std::sync::atomic::{AtomicI64, Ordering};

use super::fixtures::TestFixtures;

/// Builder pattern for creating test sessions with sensible defaults
pub struct SessionBuilder {
    config: EngineConfig,
    clock: MockClock,
}

impl SessionBuilder {
    /// Create a new builder whose clock advances one minute per call
    pub fn new() -> Self {
        let mut clock = MockClock::new();
        let ticks = AtomicI64::new(0);
        clock
            .expect_now()
            .returning(move || TestFixtures::base_time() + Duration::minutes(ticks.fetch_add(1, Ordering::SeqCst)))
            .times(0..);

        Self { config: EngineConfig::default(), clock }
    }

    /// Set how many records `display_history` shows
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.config.history_display_limit = limit;
        self
    }

    /// Set the number of recommended techniques used when nothing is selected
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.config.recommended_top_n = top_n;
        self
    }

    /// Set the providers targeted when a call names none
    pub fn with_default_providers(mut self, providers: Vec<ProviderId>) -> Self {
        self.config.default_providers = providers;
        self
    }

    /// Replace the clock mock with a custom setup
    pub fn with_clock<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockClock),
    {
        let mut clock = MockClock::new();
        setup(&mut clock);
        self.clock = clock;
        self
    }

    /// Build the session, panicking on invalid configuration
    pub fn build(self) -> Session {
        Session::new(self.config, Box::new(self.clock)).expect("valid test configuration")
    }

    /// Build the session, returning configuration errors
    pub fn try_build(self) -> EngineResult<Session> {
        Session::new(self.config, Box::new(self.clock))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Create a session with default configuration
    pub fn simple_session() -> Session {
        SessionBuilder::new().build()
    }

    /// Optimize each prompt for OpenAI in minimal mode, returning the records
    pub fn run_prompts(session: &mut Session, prompts: &[&str]) -> Vec<OptimizationRecord> {
        prompts
            .iter()
            .map(|prompt| {
                session
                    .optimize(prompt, &[ProviderId::OpenAI], &Selection::Mode(shared::Mode::Minimal))
                    .expect("optimization should succeed")
            })
            .collect()
    }

    /// Original prompts of a record list, in list order
    pub fn originals(records: &[OptimizationRecord]) -> Vec<String> {
        records.iter().map(|r| r.original.clone()).collect()
    }

    /// Assert records are ordered newest first
    pub fn assert_most_recent_first(records: &[OptimizationRecord]) {
        for pair in records.windows(2) {
            assert!(
                pair[0].timestamp >= pair[1].timestamp,
                "record {} is older than the one after it",
                pair[0].id
            );
        }
    }

    /// Assert an output names a technique of the given category label
    pub fn assert_has_category(output: &ProviderOutput, label: &str) {
        assert!(
            output.applied.iter().any(|t| t.category.label() == label),
            "no {label} technique in {:?}",
            output.provenance()
        );
    }
}
