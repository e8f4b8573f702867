//! # Classify and Rules Subcommands
//!
//! `wsa classify` shows how individual titles are categorised; `wsa rules`
//! prints the rule table in the order it is evaluated.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{Cell, ContentArrangement, Table};

use wsa_core::{classify, rules, Classification};

/// Arguments for the `wsa classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Task titles to classify.
    #[arg(value_name = "TITLE", required = true)]
    pub titles: Vec<String>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `wsa rules` subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs) -> Result<u8> {
    let results: Vec<(&str, Classification)> =
        args.titles.iter().map(|t| (t.as_str(), classify(t))).collect();

    if args.json {
        let json: Vec<serde_json::Value> = results
            .iter()
            .map(|(title, c)| {
                serde_json::json!({
                    "title": title,
                    "task_type": c.task_type,
                    "hours": c.minutes.as_hours(),
                    "senior_preferred": c.senior_preferred,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).context("failed to serialize classification")?
        );
        return Ok(0);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Task Title", "Task Type", "Hours", "Senior Preferred"]);
    for (title, c) in &results {
        table.add_row(vec![
            Cell::new(title),
            Cell::new(c.task_type),
            Cell::new(c.minutes),
            Cell::new(if c.senior_preferred { "yes" } else { "no" }),
        ]);
    }
    println!("{table}");
    Ok(0)
}

/// Execute the rules subcommand.
pub fn run_rules(args: &RulesArgs) -> Result<u8> {
    if args.json {
        let json: Vec<serde_json::Value> = rules()
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                serde_json::json!({
                    "order": i + 1,
                    "keywords": rule.keywords,
                    "task_type": rule.task_type,
                    "hours": rule.task_type.minutes().as_hours(),
                    "senior_preferred": rule.task_type.senior_preferred(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).context("failed to serialize rules")?
        );
        return Ok(0);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Order", "Title contains any of", "Task Type", "Hours", "Senior"]);
    for (i, rule) in rules().iter().enumerate() {
        let keywords = rule
            .keywords
            .iter()
            .map(|k| format!("\"{k}\""))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(keywords),
            Cell::new(rule.task_type),
            Cell::new(rule.task_type.minutes()),
            Cell::new(if rule.task_type.senior_preferred() { "yes" } else { "no" }),
        ]);
    }
    println!("{table}");
    println!("First match wins. Titles matching no rule are Unclassified (0 h).");
    Ok(0)
}
