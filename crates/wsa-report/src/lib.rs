//! # wsa-report — Weekly Staffing Report
//!
//! Builds a presentation model ([`WeeklyReport`]) from a pipeline run and
//! renders it. This is the only place hours become decimals: every value
//! in the model is rounded to 2 decimal places from exact minute sums.
//!
//! ## Sections
//!
//! 1. Weekly summary: total, senior-preferred and hot tub hours.
//! 2. Weekly hours by task type.
//! 3. Total labor hours per day, Monday to Saturday, zero-filled.
//! 4. One section per non-empty day: totals, hours by task type, and the
//!    senior-vs-other split.
//!
//! ## Renderers
//!
//! - [`ReportFormat::Text`] — boxed tables via `comfy-table`.
//! - [`ReportFormat::Markdown`] — headings plus Markdown tables.
//! - [`ReportFormat::Json`] — the model itself, pretty-printed.

pub mod error;
pub mod model;
pub mod render;

pub use error::ReportError;
pub use model::{DaySection, HoursRow, SummaryLines, WeeklyReport, REPORT_TITLE};
pub use render::{records_table, render, ReportFormat};
