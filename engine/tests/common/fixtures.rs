//! Test fixtures and data for engine tests
//!
//! This module provides consistent test data and fixtures used across all test suites.

use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Prompts with a known classification
    pub const CODING_PROMPT: &'static str = "Write a Python function that merges two sorted lists";
    pub const DATA_PROMPT: &'static str = "Find the trend in this sales dataset";
    pub const CREATIVE_PROMPT: &'static str = "Compose a poem about the sea";
    pub const REASONING_PROMPT: &'static str = "Explain how gravity works.";
    pub const GENERAL_PROMPT: &'static str = "Say hello to the team";

    /// Standard record id in UUID format
    pub const RECORD_ID: &'static str = "550e8400-e29b-41d4-a716-446655440001";

    /// Fixed time every mocked clock starts from
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    /// Prompts used to fill history, oldest first
    pub fn history_prompts() -> Vec<&'static str> {
        vec![
            "Summarize the quarterly report.",
            "Write a haiku about rain.",
            "Explain why the build failed.",
            "Draft a REPORT outline for the board.",
        ]
    }

    /// Complete variables for the Creative Writing template
    pub fn creative_values() -> HashMap<String, String> {
        [
            ("content_type", "short story"),
            ("theme", "friendship"),
            ("tone", "warm"),
            ("audience", "children"),
            ("constraints", "under 500 words"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// History export produced by an earlier session
    pub fn exported_history() -> &'static str {
        r####"[
  {
    "timestamp": "2024-05-01T12:00:00Z",
    "original": "List three primes.",
    "optimized": {
      "OpenAI": "### Task\nList three primes.",
      "Google": "**Task Description:**\nList three primes."
    },
    "metrics": {
      "word_count": 3,
      "char_count": 18,
      "sentence_count": 1,
      "avg_word_length": 5.33,
      "estimated_tokens": 4,
      "clarity_score": 22.4
    }
  }
]"####
    }
}
