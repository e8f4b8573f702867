//! # Report Subcommand
//!
//! Renders the weekly staffing report as text, Markdown or JSON, to stdout
//! or to a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use wsa_report::{render, ReportFormat, WeeklyReport};

use crate::config::WsaConfig;
use crate::input::InputArgs;

/// Arguments for the `wsa report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format: text, markdown or json.
    #[arg(long, short, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report here instead of stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

/// Execute the report subcommand. Returns the process exit code.
pub fn run_report(args: &ReportArgs, config: &WsaConfig) -> Result<u8> {
    let output = args.input.run_pipeline(config)?;
    let report = WeeklyReport::build(&output).with_source(args.input.source_name());
    let rendered = render(&report, args.format).context("failed to render report")?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            tracing::info!(path = %path.display(), format = %args.format, "wrote report");
            println!("OK: wrote {} report to {}", args.format, path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(0)
}
