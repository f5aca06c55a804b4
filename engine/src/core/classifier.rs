//! Intent classifier
//!
//! Keyword membership over the lower-cased prompt. Categories are tested in
//! a fixed priority order (coding, data analysis, creative, reasoning) and
//! the first match wins, so "analyze this algorithm" is coding even though
//! "analyze" is a data-analysis keyword. Anything unmatched is general.

use shared::TaskCategory;

const CODING_KEYWORDS: &[&str] = &[
    "code", "coding", "function", "functions", "algorithm", "algorithms", "program", "programming",
    "debug", "bug", "bugs", "implement", "implementation", "refactor", "compile", "compiler",
    "script", "api", "class", "method", "python", "rust", "javascript", "typescript", "java",
    "sql", "regex", "unittest", "software",
];

const DATA_ANALYSIS_KEYWORDS: &[&str] = &[
    "data", "dataset", "datasets", "analyze", "analyse", "analysis", "statistics", "statistical",
    "trend", "trends", "correlation", "regression", "chart", "graph", "csv", "spreadsheet",
    "metrics", "forecast", "distribution", "outliers",
];

const CREATIVE_KEYWORDS: &[&str] = &[
    "story", "stories", "poem", "poetry", "creative", "fiction", "narrative", "character",
    "characters", "novel", "song", "lyrics", "imagine", "plot", "script-writing", "haiku",
    "fantasy",
];

const REASONING_KEYWORDS: &[&str] = &[
    "why", "explain", "reason", "reasoning", "logic", "logical", "prove", "proof", "solve",
    "deduce", "infer", "evaluate", "compare", "calculate", "argue", "justify", "derive",
];

/// Categories in priority order with their keyword sets
const PRIORITY: &[(TaskCategory, &[&str])] = &[
    (TaskCategory::Coding, CODING_KEYWORDS),
    (TaskCategory::DataAnalysis, DATA_ANALYSIS_KEYWORDS),
    (TaskCategory::Creative, CREATIVE_KEYWORDS),
    (TaskCategory::Reasoning, REASONING_KEYWORDS),
];

/// Classify a prompt into one task category
pub fn classify(text: &str) -> TaskCategory {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|t| !t.is_empty())
        .collect();

    PRIORITY
        .iter()
        .find(|(_, keywords)| tokens.iter().any(|t| keywords.contains(t)))
        .map(|(category, _)| *category)
        .unwrap_or(TaskCategory::General)
}
