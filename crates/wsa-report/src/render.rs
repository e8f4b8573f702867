//! # Renderers

use std::fmt::Write as _;
use std::str::FromStr;

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use wsa_core::TaskRecord;

use crate::error::ReportError;
use crate::model::{HoursRow, WeeklyReport};

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain-text tables for a terminal.
    #[default]
    Text,
    /// Markdown document.
    Markdown,
    /// Pretty-printed JSON of the report model.
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        })
    }
}

/// Render `report` in `format`.
pub fn render(report: &WeeklyReport, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_document(report, Style::Text)),
        ReportFormat::Markdown => Ok(render_document(report, Style::Markdown)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Heading and table conventions of the textual formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Text,
    Markdown,
}

impl Style {
    fn heading(self, level: usize, title: &str) -> String {
        match self {
            Self::Markdown => format!("{} {title}\n", "#".repeat(level)),
            Self::Text => match level {
                1 => format!("{title}\n{}\n", "=".repeat(title.chars().count())),
                2 => format!("{title}\n{}\n", "-".repeat(title.chars().count())),
                _ => format!("{title}\n"),
            },
        }
    }

    fn markdown_tables(self) -> bool {
        self == Self::Markdown
    }
}

fn new_table(style: Style, header: Option<[&str; 2]>) -> Table {
    let mut table = Table::new();
    if style.markdown_tables() {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(header) = header {
        table.set_header(vec![Cell::new(header[0]), Cell::new(header[1])]);
    }
    table
}

fn hours_cell(hours: f64) -> Cell {
    Cell::new(format!("{hours:.2}")).set_alignment(CellAlignment::Right)
}

fn pairs_table<'a>(
    style: Style,
    header: Option<[&str; 2]>,
    rows: impl IntoIterator<Item = (&'a str, f64)>,
) -> String {
    let mut table = new_table(style, header);
    for (label, hours) in rows {
        table.add_row(vec![Cell::new(label), hours_cell(hours)]);
    }
    format!("{table}\n")
}

fn hours_rows<'a>(rows: &'a [HoursRow]) -> impl Iterator<Item = (&'a str, f64)> + 'a {
    rows.iter().map(|r| (r.label.as_str(), r.hours))
}

fn render_document(report: &WeeklyReport, style: Style) -> String {
    let mut out = String::new();
    out.push_str(&style.heading(1, &report.title));
    if let Some(source) = &report.source {
        let _ = writeln!(out, "Source: {source}");
    }
    out.push('\n');

    out.push_str(&style.heading(2, "Weekly Labor Summary (Mon-Sat)"));
    out.push('\n');
    // Markdown tables need a header row.
    let summary_header = style.markdown_tables().then_some(["Metric", "Hours"]);
    out.push_str(&pairs_table(style, summary_header, report.summary.weekly_rows()));
    out.push('\n');

    out.push_str(&style.heading(2, "Weekly Hours by Task Type"));
    out.push('\n');
    if report.by_task_type.is_empty() {
        out.push_str("No tasks in the week window.\n");
    } else {
        out.push_str(&pairs_table(
            style,
            Some(["Task Type", "Hours"]),
            hours_rows(&report.by_task_type),
        ));
    }
    out.push('\n');

    out.push_str(&style.heading(2, "Total Labor Hours Per Day"));
    out.push('\n');
    out.push_str(&pairs_table(
        style,
        Some(["Day", "Hours"]),
        hours_rows(&report.daily_totals),
    ));

    if !report.days.is_empty() {
        out.push('\n');
        out.push_str(&style.heading(2, "Daily Labor Summary (Mon-Sat)"));
    }
    for day in &report.days {
        out.push('\n');
        out.push_str(&style.heading(3, &day.heading()));
        out.push('\n');
        out.push_str(&pairs_table(style, summary_header, day.summary.daily_rows()));
        out.push('\n');
        out.push_str(&pairs_table(
            style,
            Some(["Task Type", "Hours"]),
            hours_rows(&day.by_task_type),
        ));
        out.push('\n');
        out.push_str(&pairs_table(
            style,
            Some(["Skill Level", "Hours"]),
            hours_rows(&day.by_skill),
        ));
    }

    out
}

/// Tabulate individual records in due order: date, day, title, type, hours, senior.
pub fn records_table(records: &[TaskRecord]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Due", "Day", "Task Title", "Task Type", "Hours", "Senior"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.due.format("%Y-%m-%d %H:%M")),
            Cell::new(record.day),
            Cell::new(&record.title),
            Cell::new(record.task_type),
            hours_cell(record.minutes().hours_2dp()),
            Cell::new(if record.senior_preferred() { "yes" } else { "" }),
        ]);
    }
    format!("{table}\n")
}
