//! # wsa CLI entry point
//!
//! Parses command-line arguments, sets up logging and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use wsa_cli::analyze::{run_analyze, AnalyzeArgs};
use wsa_cli::classify::{run_classify, run_rules, ClassifyArgs, RulesArgs};
use wsa_cli::config::WsaConfig;
use wsa_cli::report::{run_report, ReportArgs};

/// Weekly staffing analysis
///
/// Classifies the tasks in a task export, totals labor hours for the
/// Monday-Saturday week and renders the weekly staffing report.
#[derive(Parser, Debug)]
#[command(name = "wsa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./wsa.yaml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a task export and print the weekly report.
    Analyze(AnalyzeArgs),

    /// Render the weekly report as text, Markdown or JSON.
    Report(ReportArgs),

    /// Classify task titles without reading a file.
    Classify(ClassifyArgs),

    /// Print the classification rule table.
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    tracing::debug!("wsa CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Analyze(args) => {
            WsaConfig::load(cli.config.as_deref()).and_then(|cfg| run_analyze(&args, &cfg))
        }
        Commands::Report(args) => {
            WsaConfig::load(cli.config.as_deref()).and_then(|cfg| run_report(&args, &cfg))
        }
        Commands::Classify(args) => run_classify(&args),
        Commands::Rules(args) => run_rules(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
