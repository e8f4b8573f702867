//! # Analyze Subcommand
//!
//! Runs the pipeline over a task export and prints the weekly report as
//! text tables, preceded by what was kept and dropped. `--records` adds
//! the per-task listing.

use anyhow::Result;
use clap::Args;

use wsa_core::RunStats;
use wsa_report::{records_table, render, ReportFormat, WeeklyReport};

use crate::config::WsaConfig;
use crate::input::InputArgs;

/// Arguments for the `wsa analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also list every classified task in due order.
    #[arg(long)]
    pub records: bool,
}

/// Execute the analyze subcommand. Returns the process exit code.
pub fn run_analyze(args: &AnalyzeArgs, config: &WsaConfig) -> Result<u8> {
    let output = args.input.run_pipeline(config)?;

    println!("{}", stats_line(&output.stats));
    println!();

    if args.records && !output.records.is_empty() {
        print!("{}", records_table(&output.records));
        println!();
    }

    let report = WeeklyReport::build(&output).with_source(args.input.source_name());
    print!("{}", render(&report, ReportFormat::Text)?);
    Ok(0)
}

/// One-line account of a run.
pub fn stats_line(stats: &RunStats) -> String {
    let mut line = format!(
        "{} rows read, {} tasks kept ({} unparseable dates, {} Sunday",
        stats.rows_read, stats.records_kept, stats.unparseable_dates, stats.sunday_excluded
    );
    if stats.outside_week > 0 {
        line.push_str(&format!(", {} outside week", stats.outside_week));
    }
    if stats.unclassified_dropped > 0 {
        line.push_str(&format!(", {} unclassified dropped", stats.unclassified_dropped));
    } else if stats.unclassified > 0 {
        line.push_str(&format!(", {} unclassified at 0 h", stats.unclassified));
    }
    line.push(')');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_line_mentions_only_relevant_counts() {
        let stats = RunStats {
            rows_read: 10,
            unparseable_dates: 1,
            sunday_excluded: 2,
            records_kept: 7,
            ..Default::default()
        };
        assert_eq!(
            stats_line(&stats),
            "10 rows read, 7 tasks kept (1 unparseable dates, 2 Sunday)"
        );
    }

    #[test]
    fn stats_line_reports_policy_effect() {
        let retained = RunStats {
            unclassified: 3,
            ..Default::default()
        };
        assert!(stats_line(&retained).contains("3 unclassified at 0 h"));

        let dropped = RunStats {
            unclassified: 3,
            unclassified_dropped: 3,
            outside_week: 4,
            ..Default::default()
        };
        let line = stats_line(&dropped);
        assert!(line.contains("3 unclassified dropped"));
        assert!(line.contains("4 outside week"));
    }
}
