//! # Report Command Tests
//!
//! Drives the `report` subcommand end to end: command-line parsing, a
//! `wsa.yaml` configuration, a CSV export on disk and the rendered file.

use std::path::{Path, PathBuf};

use clap::Parser;
use wsa_cli::config::WsaConfig;
use wsa_cli::report::{run_report, ReportArgs};

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    report: ReportArgs,
}

fn parse(args: &[&str]) -> ReportArgs {
    let mut argv = vec!["wsa-report"];
    argv.extend_from_slice(args);
    TestCli::try_parse_from(argv).unwrap().report
}

/// Three-column export: id, title, due.
fn write_export(dir: &Path) -> PathBuf {
    let body = "\
Id,Title,Due
1,Arrival Hot Tub Service,2026-03-02 09:00
2,Post Rental Inspection,03/03/2026
3,Dump & Scrub,2026-03-04
4,Random Task,2026-03-05
5,VIP Sunday,2026-03-08
6,VIP Next Week,2026-03-10
";
    let path = dir.join("tasks.csv");
    std::fs::write(&path, body).unwrap();
    path
}

fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("wsa.yaml");
    std::fs::write(
        &path,
        "ingest:\n  title_column: 1\n  due_date_column: 2\n",
    )
    .unwrap();
    path
}

fn report_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn json_report_for_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let config = WsaConfig::load(Some(&write_config(dir.path()))).unwrap();
    let out = dir.path().join("report.json");

    let args = parse(&[
        input.to_str().unwrap(),
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert_eq!(run_report(&args, &config).unwrap(), 0);

    let json = report_json(&out);
    assert_eq!(json["title"], "Weekly Staffing Analysis Report");
    assert_eq!(json["source"], "tasks.csv");
    // VIP Next Week falls on a Tuesday and counts without a week anchor.
    assert_eq!(json["summary"]["total_hours"], 4.0);
    assert_eq!(json["summary"]["senior_hours"], 2.0);
    assert_eq!(json["summary"]["hot_tub_hours"], 2.0);
    assert_eq!(json["stats"]["sunday_excluded"], 1);
    assert_eq!(json["stats"]["unclassified"], 1);
}

#[test]
fn week_anchor_and_drop_policy_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let config = WsaConfig::load(Some(&write_config(dir.path()))).unwrap();
    let out = dir.path().join("report.json");

    let args = parse(&[
        input.to_str().unwrap(),
        "--week-of",
        "2026-03-06",
        "--unclassified",
        "drop",
        "-f",
        "json",
        "-o",
        out.to_str().unwrap(),
    ]);
    run_report(&args, &config).unwrap();

    let json = report_json(&out);
    assert_eq!(json["summary"]["total_hours"], 3.0);
    assert_eq!(json["stats"]["outside_week"], 1);
    assert_eq!(json["stats"]["unclassified_dropped"], 1);
    assert_eq!(json["stats"]["records_kept"], 3);
}

#[test]
fn markdown_report_has_day_sections() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let config = WsaConfig::load(Some(&write_config(dir.path()))).unwrap();
    let out = dir.path().join("report.md");

    let args = parse(&[
        input.to_str().unwrap(),
        "--format",
        "markdown",
        "--out",
        out.to_str().unwrap(),
    ]);
    run_report(&args, &config).unwrap();

    let md = std::fs::read_to_string(&out).unwrap();
    assert!(md.starts_with("# Weekly Staffing Analysis Report"));
    assert!(md.contains("### Monday 03/02/2026"));
    assert!(md.contains("Total Weekly Labor Hours"));
}

#[test]
fn default_columns_reject_narrow_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let args = parse(&[input.to_str().unwrap()]);

    let err = run_report(&args, &WsaConfig::default()).unwrap_err();
    assert!(format!("{err:#}").contains("tasks.csv"));
}

#[test]
fn unknown_format_is_a_parse_error() {
    assert!(TestCli::try_parse_from(["wsa-report", "tasks.csv", "--format", "pdf"]).is_err());
}
