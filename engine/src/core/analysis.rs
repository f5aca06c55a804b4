//! Prompt analysis
//!
//! Heuristic feedback on a prompt built on top of [`Metrics`]: issues,
//! suggestions, keyword density, and per-provider cost comparison.

use serde::{Deserialize, Serialize};
use shared::{Metrics, ProviderId};
use std::collections::{BTreeMap, HashMap};

use crate::core::metrics::{compute_metrics, ReadabilityLevel};
use crate::core::profiles;

/// Number of keywords reported by [`analyze`]
pub const TOP_KEYWORDS: usize = 5;

const ACTION_VERBS: &[&str] = &["please", "provide", "create", "generate", "write"];

/// Word frequency entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Full analysis of one prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub metrics: Metrics,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub keywords: Vec<KeywordCount>,
    pub readability: String,
}

/// Analyze a prompt
pub fn analyze(text: &str) -> PromptAnalysis {
    let metrics = compute_metrics(text);
    let lower = text.to_lowercase();

    let mut issues = Vec::new();
    if metrics.word_count < 10 {
        issues.push("Very short prompt".to_string());
    }
    if metrics.sentence_count < 2 {
        issues.push("Consider adding more detail".to_string());
    }
    if metrics.avg_word_length > 7.0 {
        issues.push("Complex vocabulary".to_string());
    }

    let mut suggestions = Vec::new();
    if metrics.clarity_score < 70.0 {
        suggestions.push("Simplify sentence structure".to_string());
    }
    if !text.contains('?') && !lower.contains("question") {
        suggestions.push("Consider framing as a clear question".to_string());
    }
    if metrics.word_count > 500 {
        suggestions.push("Consider breaking into sub-tasks".to_string());
    }
    if !ACTION_VERBS.iter().any(|verb| lower.contains(verb)) {
        suggestions.push("Add clear action verbs".to_string());
    }

    let readability = ReadabilityLevel::from_score(metrics.readability_score).description().to_string();

    PromptAnalysis {
        keywords: keyword_density(text, TOP_KEYWORDS),
        metrics,
        issues,
        suggestions,
        readability,
    }
}

/// Most frequent lower-cased words longer than four characters
///
/// Ties keep first-occurrence order.
pub fn keyword_density(text: &str, limit: usize) -> Vec<KeywordCount> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (index, word) in text
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 4)
        .enumerate()
    {
        counts.entry(word.to_string()).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> =
        counts.into_iter().map(|(word, (count, first))| (word, count, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, count, _)| KeywordCount { word, count })
        .collect()
}

/// Estimated input cost of a text for one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub provider: ProviderId,
    pub estimated_tokens: usize,
    pub estimated_cost: f64,
    pub max_context_tokens: u64,
}

/// Cost of sending `text` to each provider
pub fn cost_table(text: &str, providers: &[ProviderId]) -> Vec<CostEstimate> {
    let tokens = compute_metrics(text).estimated_token_count;
    providers
        .iter()
        .map(|provider| {
            let profile = profiles::profile(*provider);
            CostEstimate {
                provider: *provider,
                estimated_tokens: tokens,
                estimated_cost: profile.estimate_cost(tokens),
                max_context_tokens: profile.max_context_tokens,
            }
        })
        .collect()
}

/// One row of a provider comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub provider: ProviderId,
    pub estimated_tokens: usize,
    pub estimated_cost: f64,
    pub max_context_tokens: u64,
    pub clarity_score: f64,
}

/// Side-by-side comparison of optimized outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderComparison {
    pub rows: Vec<ComparisonRow>,
    /// Lowest estimated cost; the first provider wins ties
    pub best_value: Option<ProviderId>,
    /// Highest clarity; the first provider wins ties
    pub best_clarity: Option<ProviderId>,
}

/// Compare optimized texts across providers
pub fn compare(optimized: &BTreeMap<ProviderId, String>) -> ProviderComparison {
    let rows: Vec<ComparisonRow> = optimized
        .iter()
        .map(|(provider, text)| {
            let profile = profiles::profile(*provider);
            let metrics = compute_metrics(text);
            ComparisonRow {
                provider: *provider,
                estimated_tokens: metrics.estimated_token_count,
                estimated_cost: profile.estimate_cost(metrics.estimated_token_count),
                max_context_tokens: profile.max_context_tokens,
                clarity_score: metrics.clarity_score,
            }
        })
        .collect();

    let mut best_value: Option<&ComparisonRow> = None;
    let mut best_clarity: Option<&ComparisonRow> = None;
    for row in &rows {
        if best_value.is_none_or(|best| row.estimated_cost < best.estimated_cost) {
            best_value = Some(row);
        }
        if best_clarity.is_none_or(|best| row.clarity_score > best.clarity_score) {
            best_clarity = Some(row);
        }
    }

    ProviderComparison {
        best_value: best_value.map(|r| r.provider),
        best_clarity: best_clarity.map(|r| r.provider),
        rows,
    }
}
