//! Markdown report for a single optimization record

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::core::history::OptimizationRecord;

/// Render a record as a markdown report
pub fn render_report(record: &OptimizationRecord, generated_at: DateTime<Utc>) -> String {
    let metrics = &record.metrics;
    let mut report = String::new();

    // Writing into a String cannot fail
    let _ = write!(
        report,
        "# Prompt Engineering Report\n\
         Generated: {}\n\n\
         ## Original Prompt\n{}\n\n\
         ## Metrics\n\
         - Word Count: {}\n\
         - Character Count: {}\n\
         - Clarity Score: {}%\n\
         - Estimated Tokens (approximate): {}\n\
         - Mode: {}\n\n\
         ## Optimized Versions\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        record.original,
        metrics.word_count,
        metrics.char_count,
        metrics.clarity_score,
        metrics.estimated_token_count,
        record.mode,
    );

    for (provider, optimized) in &record.optimized {
        let _ = write!(report, "### {provider}\n```\n{optimized}\n```\n");
        if let Some(techniques) = record.techniques.get(provider).filter(|t| !t.is_empty()) {
            let _ = writeln!(report, "Techniques: {}", techniques.join(", "));
        }
        report.push('\n');
    }

    report
}

/// First `max_chars` characters of a report, for previews
pub fn preview(report: &str, max_chars: usize) -> String {
    match report.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &report[..cut]),
        None => report.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::compute_metrics;
    use chrono::TimeZone;
    use shared::{ProviderId, RecordId};
    use std::collections::BTreeMap;

    fn sample_record() -> OptimizationRecord {
        OptimizationRecord {
            id: RecordId::new(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap(),
            original: "Write a function.".to_string(),
            optimized: BTreeMap::from([
                (ProviderId::Anthropic, "<task>\nWrite a function.\n</task>".to_string()),
                (ProviderId::Google, "**Task Description:**\nWrite a function.".to_string()),
            ]),
            techniques: BTreeMap::from([(ProviderId::Anthropic, vec!["XML Task Tags".to_string()])]),
            metrics: compute_metrics("Write a function."),
            mode: "minimal".to_string(),
        }
    }

    #[test]
    fn test_report_sections() {
        let generated = Utc.with_ymd_and_hms(2024, 3, 9, 9, 0, 0).unwrap();
        let report = render_report(&sample_record(), generated);

        assert!(report.starts_with("# Prompt Engineering Report\nGenerated: 2024-03-09 09:00:00\n"));
        assert!(report.contains("## Original Prompt\nWrite a function.\n"));
        assert!(report.contains("- Word Count: 3\n"));
        assert!(report.contains("- Character Count: 17\n"));
        assert!(report.contains("- Clarity Score: 16%\n"));
        assert!(report.contains("- Estimated Tokens (approximate): 4\n"));
        assert!(report.contains("### Anthropic\n```\n<task>\nWrite a function.\n</task>\n```\nTechniques: XML Task Tags\n"));
        assert!(report.contains("### Google\n```\n"));
        assert!(report.find("### Anthropic").unwrap() < report.find("### Google").unwrap());
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("héllo world", 5), "héllo...");
        assert_eq!(preview("short", 500), "short");
    }
}
