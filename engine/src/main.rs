//! Main entry point for the prompt-engine binary
//!
//! A thin presentation layer: parses arguments, drives a [`Session`] and
//! prints what it returns.

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

use prompt_engine::core::{analysis, registry, templates};
use prompt_engine::{EngineConfig, FileSystem, OptimizationRecord, RealFileSystem, Selection, Session};
use shared::{component_debug, logging, Component, FocusArea, Mode, ProviderId, TechniqueCategory};

/// Rewrites prompts into provider-tailored variants
#[derive(Parser)]
#[command(name = "prompt-engine")]
#[command(about = "Rule-based prompt optimization for Claude, GPT and Gemini")]
pub struct Args {
    /// Prompt text to optimize
    #[arg(long, conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Read the prompt from a file
    #[arg(long)]
    pub prompt_file: Option<PathBuf>,

    /// Target provider (anthropic/claude, openai/gpt, google/gemini); repeatable, defaults to all
    #[arg(long = "provider")]
    pub providers: Vec<ProviderId>,

    /// Optimization mode (auto, reasoning, creative, coding, data, minimal)
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Explicit technique id; repeatable
    #[arg(long = "technique")]
    pub techniques: Vec<String>,

    /// Focus area (structure, clarity, specificity, examples, constraints, json); repeatable
    #[arg(long = "focus")]
    pub focus: Vec<FocusArea>,

    /// Render a built-in template as the prompt
    #[arg(long, conflicts_with_all = ["prompt", "prompt_file"])]
    pub template: Option<String>,

    /// Template variable as key=value; repeatable
    #[arg(long = "var", value_parser = parse_key_val, requires = "template")]
    pub vars: Vec<(String, String)>,

    /// List the technique registry and exit
    #[arg(long)]
    pub list_techniques: bool,

    /// List the built-in templates and exit
    #[arg(long)]
    pub list_templates: bool,

    /// Print an analysis of the prompt instead of optimizing it
    #[arg(long)]
    pub analyze: bool,

    /// Write a markdown report of the optimization to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Write the history export (JSON) to this path
    #[arg(long)]
    pub export_history: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=value: no '=' found in '{s}'"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(Component::Cli, "prompt engine");

    if args.list_techniques {
        list_techniques(args.json)?;
        return Ok(());
    }
    if args.list_templates {
        list_templates(args.json)?;
        return Ok(());
    }

    let fs = RealFileSystem::new();
    let mut session = Session::with_system_clock(EngineConfig::default())?;
    load_prompt(&args, &fs, &mut session)?;

    if args.analyze {
        return print_analysis(session.current_prompt(), session.config(), &args);
    }

    let selection = selection_from(&args);
    component_debug!(Component::Cli, selection = %selection, "Resolved selection from arguments");

    let providers = session.config().providers_or_default(&args.providers);
    let record = session.optimize_current(&providers, &selection)?;
    print_record(&record, args.json)?;

    if let Some(path) = &args.report {
        session
            .save_report(&fs, path, Some(&record.id))
            .with_context(|| format!("writing report to {}", path.display()))?;
    }
    if let Some(path) = &args.export_history {
        session
            .save_history(&fs, path)
            .with_context(|| format!("writing history to {}", path.display()))?;
    }

    logging::log_success(Component::Cli, "Optimization complete");
    Ok(())
}

fn load_prompt(args: &Args, fs: &dyn FileSystem, session: &mut Session) -> Result<()> {
    if let Some(name) = &args.template {
        let values: HashMap<String, String> = args.vars.iter().cloned().collect();
        session.apply_template(name, &values)?;
    } else if let Some(path) = &args.prompt_file {
        let text = fs
            .read_text(path)
            .with_context(|| format!("reading prompt from {}", path.display()))?;
        session.set_prompt(text);
    } else if let Some(prompt) = &args.prompt {
        session.set_prompt(prompt.clone());
    } else {
        anyhow::bail!("no prompt given: use --prompt, --prompt-file or --template");
    }
    Ok(())
}

/// Explicit techniques win over focus areas, which win over a mode
fn selection_from(args: &Args) -> Selection {
    if !args.techniques.is_empty() {
        Selection::Techniques(args.techniques.clone())
    } else if !args.focus.is_empty() {
        Selection::FocusAreas(args.focus.clone())
    } else if let Some(mode) = args.mode {
        Selection::Mode(mode)
    } else {
        Selection::Recommended
    }
}

fn list_techniques(json: bool) -> Result<()> {
    if json {
        let listing: Vec<serde_json::Value> = registry::all()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "id": t.id,
                    "name": t.name,
                    "category": t.category.as_str(),
                    "description": t.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for category in TechniqueCategory::all() {
        println!("{} ({})", category.label(), category.as_str());
        for technique in registry::list_by_category(category) {
            println!("  {:<24} {}", technique.id, technique.description);
        }
    }
    Ok(())
}

fn list_templates(json: bool) -> Result<()> {
    if json {
        let listing: Vec<serde_json::Value> = templates::all()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "variables": t.variables(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for template in templates::all() {
        println!("{} - {}", template.name, template.description);
        println!("  variables: {}", template.variables().join(", "));
    }
    Ok(())
}

fn print_analysis(prompt: &str, config: &EngineConfig, args: &Args) -> Result<()> {
    let report = analysis::analyze(prompt);
    let providers = config.providers_or_default(&args.providers);
    let costs = analysis::cost_table(prompt, &providers);

    if args.json {
        let value = serde_json::json!({ "analysis": report, "costs": costs });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let m = &report.metrics;
    println!("Words: {}  Characters: {}  Sentences: {}", m.word_count, m.char_count, m.sentence_count);
    println!("Clarity: {}%  Readability: {} ({})", m.clarity_score, m.readability_score, report.readability);
    println!("Estimated tokens (approximate): {}", m.estimated_token_count);
    print_list("Issues", &report.issues);
    print_list("Suggestions", &report.suggestions);
    if !report.keywords.is_empty() {
        println!("Keywords:");
        for keyword in &report.keywords {
            println!("  {} ({})", keyword.word, keyword.count);
        }
    }
    println!("Estimated input cost:");
    for cost in &costs {
        println!("  {:<10} ${:.6}  (context {} tokens)", cost.provider.as_str(), cost.estimated_cost, cost.max_context_tokens);
    }
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

fn print_record(record: &OptimizationRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    for (provider, text) in &record.optimized {
        println!("=== {provider} ===");
        println!("{text}");
        if let Some(names) = record.techniques.get(provider).filter(|n| !n.is_empty()) {
            println!("--- techniques: {}", names.join(", "));
        }
        println!();
    }

    let comparison = analysis::compare(&record.optimized);
    for row in &comparison.rows {
        println!(
            "{:<10} ~{} tokens  ${:.6}  clarity {}%",
            row.provider.as_str(), row.estimated_tokens, row.estimated_cost, row.clarity_score
        );
    }
    if let (Some(value), Some(clarity)) = (comparison.best_value, comparison.best_clarity) {
        println!("Best value: {value}  Best clarity: {clarity}");
    }
    println!("Mode: {}", record.mode);
    Ok(())
}
