//! Metrics calculator
//!
//! Pure lexical statistics for a prompt. Nothing here is cached: texts are
//! small and recomputing keeps results from going stale.

use regex::Regex;
use shared::Metrics;
use std::sync::OnceLock;

/// Approximate sub-word tokens per whitespace-delimited word
pub const TOKENS_PER_WORD: f64 = 1.3;

/// Runs of terminators count as a single sentence boundary
fn sentence_boundaries() -> &'static Regex {
    static BOUNDARIES: OnceLock<Regex> = OnceLock::new();
    BOUNDARIES.get_or_init(|| Regex::new(r"[.!?]+").expect("static sentence regex"))
}

/// Compute metrics for a text
pub fn compute_metrics(text: &str) -> Metrics {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    let char_count = text.chars().count();
    let sentence_count = sentence_boundaries().find_iter(text).count();

    let letters: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = round_to(letters as f64 / word_count.max(1) as f64, 2);

    // sentence_count may be zero; ratios divide by at least one
    let words_per_sentence = word_count as f64 / sentence_count.max(1) as f64;

    Metrics {
        word_count,
        char_count,
        sentence_count,
        avg_word_length,
        estimated_token_count: estimate_tokens(word_count),
        clarity_score: round_to(clarity_score(avg_word_length, words_per_sentence), 1),
        readability_score: round_to(flesch_reading_ease(avg_word_length, words_per_sentence), 1),
    }
}

/// Word-count based token estimate; not a tokenizer
pub fn estimate_tokens(word_count: usize) -> usize {
    (word_count as f64 * TOKENS_PER_WORD).round() as usize
}

/// Clarity on a 0-100 scale:
/// `100 - |15 - avg_word_length| * 5 - |20 - words_per_sentence| * 2`, clamped
pub fn clarity_score(avg_word_length: f64, words_per_sentence: f64) -> f64 {
    let raw = 100.0 - (15.0 - avg_word_length).abs() * 5.0 - (20.0 - words_per_sentence).abs() * 2.0;
    raw.clamp(0.0, 100.0)
}

/// Flesch Reading Ease approximation with `syllables ≈ avg_word_length / 3`, clamped to 0-100
pub fn flesch_reading_ease(avg_word_length: f64, words_per_sentence: f64) -> f64 {
    let syllables_per_word = avg_word_length / 3.0;
    let raw = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    raw.clamp(0.0, 100.0)
}

/// Coarse reading difficulty derived from the Flesch score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadabilityLevel {
    Easy,
    Moderate,
    Difficult,
}

impl ReadabilityLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 60.0 {
            ReadabilityLevel::Easy
        } else if score > 30.0 {
            ReadabilityLevel::Moderate
        } else {
            ReadabilityLevel::Difficult
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReadabilityLevel::Easy => "Easy to read",
            ReadabilityLevel::Moderate => "Moderate difficulty",
            ReadabilityLevel::Difficult => "Difficult to read",
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_a_function() {
        let metrics = compute_metrics("Write a function.");
        assert_eq!(metrics.word_count, 3);
        assert_eq!(metrics.char_count, 17);
        assert_eq!(metrics.sentence_count, 1);
        assert_eq!(metrics.estimated_token_count, 4);
        // (5 + 1 + 9) / 3
        assert_eq!(metrics.avg_word_length, 5.0);
        // 100 - 10*5 - 17*2
        assert_eq!(metrics.clarity_score, 16.0);
    }

    #[test]
    fn test_repeated_terminators_are_one_boundary() {
        let metrics = compute_metrics("Really?! Yes... No!!!");
        assert_eq!(metrics.sentence_count, 3);
    }

    #[test]
    fn test_no_terminators_does_not_divide_by_zero() {
        let metrics = compute_metrics("just some words without an ending");
        assert_eq!(metrics.sentence_count, 0);
        assert!(metrics.clarity_score.is_finite());
        assert!(metrics.readability_score.is_finite());
        assert_eq!(metrics.words_per_sentence(), 6.0);
    }

    #[test]
    fn test_empty_text() {
        let metrics = compute_metrics("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.char_count, 0);
        assert_eq!(metrics.sentence_count, 0);
        assert_eq!(metrics.avg_word_length, 0.0);
        assert_eq!(metrics.estimated_token_count, 0);
        assert!((0.0..=100.0).contains(&metrics.clarity_score));
    }

    #[test]
    fn test_word_count_matches_whitespace_split() {
        let samples = [
            "one",
            "  leading and trailing  ",
            "tabs\tand\nnewlines\r\nmixed",
            "Explain how gravity works. Then summarize!",
        ];
        for text in samples {
            let metrics = compute_metrics(text);
            assert_eq!(metrics.word_count, text.split_whitespace().count());
            assert_eq!(metrics.estimated_token_count, (metrics.word_count as f64 * 1.3).round() as usize);
        }
    }

    #[test]
    fn test_char_count_is_unicode_aware() {
        let metrics = compute_metrics("café naïve");
        assert_eq!(metrics.char_count, 10);
        assert_eq!(metrics.avg_word_length, 4.5);
    }

    #[test]
    fn test_metrics_are_pure() {
        let text = "Summarize the quarterly report. Highlight risks and opportunities!";
        assert_eq!(compute_metrics(text), compute_metrics(text));
    }

    #[test]
    fn test_scores_are_bounded() {
        let long_word = "a".repeat(80);
        let metrics = compute_metrics(&long_word);
        assert_eq!(metrics.clarity_score, 0.0);
        assert_eq!(metrics.readability_score, 0.0);

        assert_eq!(clarity_score(15.0, 20.0), 100.0);
        assert_eq!(flesch_reading_ease(0.0, 0.0), 100.0);
    }

    #[test]
    fn test_readability_levels() {
        assert_eq!(ReadabilityLevel::from_score(75.0), ReadabilityLevel::Easy);
        assert_eq!(ReadabilityLevel::from_score(60.0), ReadabilityLevel::Moderate);
        assert_eq!(ReadabilityLevel::from_score(30.0), ReadabilityLevel::Difficult);
        assert_eq!(ReadabilityLevel::Moderate.description(), "Moderate difficulty");
    }
}
