//! # wsa-cli — Weekly Staffing Analysis CLI
//!
//! Provides the `wsa` command-line interface over a Breezeway-style task
//! export.
//!
//! ## Subcommands
//!
//! - `wsa analyze` — Run counts, optional task listing and the text report.
//! - `wsa report` — Render the report as text, Markdown or JSON.
//! - `wsa classify` — Show how given task titles are categorised.
//! - `wsa rules` — Print the classification rule table.
//!
//! ```bash
//! wsa analyze tasks.csv --records
//! wsa report tasks.xlsx --format markdown --out week.md
//! wsa report tasks.csv --week-of 2026-03-04 --unclassified drop -f json
//! wsa classify "Hot Tub Dump & Scrub" "VIP Arrival"
//! ```
//!
//! Settings come from `wsa.yaml` (see [`config`]), with per-run flags
//! layered on top (see [`input::InputArgs`]).

pub mod analyze;
pub mod classify;
pub mod config;
pub mod input;
pub mod report;
