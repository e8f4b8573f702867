//! # Classification & Aggregation Pipeline
//!
//! One run turns raw rows into [`TaskRecord`]s and a [`WeeklySummary`]:
//!
//! 1. Parse the due date. Unparseable rows are dropped.
//! 2. Bucket by weekday. Sunday rows, and rows outside an anchored week,
//!    are dropped.
//! 3. Classify the title.
//! 4. Apply the [`UnclassifiedPolicy`].
//! 5. Stable-sort by due date-time.
//! 6. Aggregate.
//!
//! A run holds no state between invocations and has no failure path.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::aggregate::{summarize, WeeklySummary};
use crate::classify::classify_type;
use crate::config::{PipelineConfig, UnclassifiedPolicy};
use crate::task::{TaskRecord, TaskType};
use crate::window::{parse_due, WeekDay};

/// Due-date cell as it came off the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueCell {
    /// Cell text, parsed leniently.
    Text(String),
    /// A native date-time (spreadsheet date cell).
    DateTime(NaiveDateTime),
    /// The row had no such cell.
    Missing,
}

/// One input row, reduced to the two fields the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based source line or sheet row, for diagnostics.
    pub line: usize,
    /// Task title cell text.
    pub title: String,
    /// Due date cell.
    pub due: DueCell,
}

impl RawRow {
    /// Convenience constructor for a text due date.
    pub fn new(line: usize, title: impl Into<String>, due: impl Into<String>) -> Self {
        Self {
            line,
            title: title.into(),
            due: DueCell::Text(due.into()),
        }
    }
}

/// Counters describing what a run kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Rows handed to the pipeline.
    pub rows_read: usize,
    /// Rows dropped for a missing or unparseable due date.
    pub unparseable_dates: usize,
    /// Rows dropped because they fall on a Sunday.
    pub sunday_excluded: usize,
    /// Rows dropped for falling outside an anchored week.
    pub outside_week: usize,
    /// In-window rows no rule matched.
    pub unclassified: usize,
    /// Unclassified rows removed under [`UnclassifiedPolicy::Drop`].
    pub unclassified_dropped: usize,
    /// Records that reached aggregation.
    pub records_kept: usize,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Surviving records, ascending by due date-time.
    pub records: Vec<TaskRecord>,
    /// Aggregates over `records`.
    pub summary: WeeklySummary,
    /// Keep/drop counters.
    pub stats: RunStats,
}

/// A configured pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline. The config is assumed validated.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Turn one raw row into a record, or `None` if it is filtered out.
    fn admit(&self, row: RawRow, stats: &mut RunStats) -> Option<TaskRecord> {
        let due = match &row.due {
            DueCell::Text(text) => parse_due(text, &self.config.extra_date_formats),
            DueCell::DateTime(dt) => Some(*dt),
            DueCell::Missing => None,
        };
        let Some(due) = due else {
            tracing::debug!(line = row.line, due = ?row.due, "dropping row with unparseable due date");
            stats.unparseable_dates += 1;
            return None;
        };

        let window = self.config.window();
        let Some(day) = window.bucket(due.date()) else {
            if WeekDay::from_date(due.date()).is_none() {
                tracing::debug!(line = row.line, date = %due.date(), "dropping Sunday row");
                stats.sunday_excluded += 1;
            } else {
                tracing::debug!(line = row.line, date = %due.date(), "dropping row outside week");
                stats.outside_week += 1;
            }
            return None;
        };

        let task_type = classify_type(&row.title);
        if task_type == TaskType::Unclassified {
            stats.unclassified += 1;
            if self.config.unclassified == UnclassifiedPolicy::Drop {
                tracing::debug!(line = row.line, title = %row.title, "dropping unclassified row");
                stats.unclassified_dropped += 1;
                return None;
            }
        }

        Some(TaskRecord {
            title: row.title,
            due,
            day,
            task_type,
        })
    }

    /// Run the pipeline over a batch of rows.
    pub fn run(&self, rows: impl IntoIterator<Item = RawRow>) -> PipelineOutput {
        let mut stats = RunStats::default();
        let mut records = Vec::new();

        for row in rows {
            stats.rows_read += 1;
            if let Some(record) = self.admit(row, &mut stats) {
                records.push(record);
            }
        }

        records.sort_by_key(|r| r.due);
        stats.records_kept = records.len();

        let summary = summarize(&records);

        tracing::info!(
            rows = stats.rows_read,
            kept = stats.records_kept,
            unparseable = stats.unparseable_dates,
            sunday = stats.sunday_excluded,
            unclassified = stats.unclassified,
            total_minutes = summary.totals.total.get(),
            "pipeline run complete"
        );
        if stats.rows_read > 0 && stats.records_kept == 0 {
            tracing::warn!(rows = stats.rows_read, "no rows survived filtering");
        }

        PipelineOutput {
            records,
            summary,
            stats,
        }
    }
}
