//! # Report Model
//!
//! A flat, serializable view of a pipeline run with every hour value
//! already rounded for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use wsa_core::{DaySummary, HourTotals, Minutes, PipelineOutput, RunStats, WeekDay};

/// Heading of every report.
pub const REPORT_TITLE: &str = "Weekly Staffing Analysis Report";

/// One labelled hour value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursRow {
    /// Task type, skill level or weekday name.
    pub label: String,
    /// Hours rounded to 2 dp.
    pub hours: f64,
}

impl HoursRow {
    fn new(label: impl Into<String>, minutes: Minutes) -> Self {
        Self {
            label: label.into(),
            hours: minutes.hours_2dp(),
        }
    }
}

/// The three headline figures, rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryLines {
    /// All classified hours.
    pub total_hours: f64,
    /// Hours of senior-preferred task types.
    pub senior_hours: f64,
    /// Hours of the hot tub task types.
    pub hot_tub_hours: f64,
}

impl From<HourTotals> for SummaryLines {
    fn from(t: HourTotals) -> Self {
        Self {
            total_hours: t.total.hours_2dp(),
            senior_hours: t.senior.hours_2dp(),
            hot_tub_hours: t.hot_tub.hours_2dp(),
        }
    }
}

impl SummaryLines {
    /// Rows as labelled for the weekly summary table.
    pub fn weekly_rows(&self) -> [(&'static str, f64); 3] {
        [
            ("Total Weekly Labor Hours", self.total_hours),
            ("Senior Preferred Hours", self.senior_hours),
            ("Hot Tub Hours", self.hot_tub_hours),
        ]
    }

    /// Rows as labelled inside a day section.
    pub fn daily_rows(&self) -> [(&'static str, f64); 3] {
        [
            ("Total Hours", self.total_hours),
            ("Senior Preferred Hours", self.senior_hours),
            ("Hot Tub Hours", self.hot_tub_hours),
        ]
    }
}

/// One day's section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySection {
    /// The weekday.
    pub day: WeekDay,
    /// Date of the earliest task that day.
    pub date: NaiveDate,
    /// Tasks kept for the day.
    pub task_count: usize,
    /// Headline figures for the day.
    pub summary: SummaryLines,
    /// Hours per task type, alphabetical.
    pub by_task_type: Vec<HoursRow>,
    /// Senior Preferred and Other hours.
    pub by_skill: Vec<HoursRow>,
}

impl DaySection {
    /// Heading such as `Monday 03/02/2026`.
    pub fn heading(&self) -> String {
        format!("{} {}", self.day, self.date.format("%m/%d/%Y"))
    }
}

impl From<&DaySummary> for DaySection {
    fn from(d: &DaySummary) -> Self {
        Self {
            day: d.day,
            date: d.date,
            task_count: d.task_count,
            summary: d.totals.into(),
            by_task_type: d
                .by_task_type
                .iter()
                .map(|t| HoursRow::new(t.task_type.label(), t.minutes))
                .collect(),
            by_skill: d
                .by_skill
                .iter()
                .map(|s| HoursRow::new(s.skill.label(), s.minutes))
                .collect(),
        }
    }
}

/// Everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Report heading.
    pub title: String,
    /// Name of the input the report was built from, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Headline figures for the week.
    pub summary: SummaryLines,
    /// Weekly hours per task type, alphabetical.
    pub by_task_type: Vec<HoursRow>,
    /// Monday to Saturday, zero where a day had no tasks.
    pub daily_totals: Vec<HoursRow>,
    /// Sections for days with at least one task, Monday first.
    pub days: Vec<DaySection>,
    /// What the run kept and dropped.
    pub stats: RunStats,
}

impl WeeklyReport {
    /// Build the report for a pipeline run.
    pub fn build(output: &PipelineOutput) -> Self {
        let s = &output.summary;
        Self {
            title: REPORT_TITLE.to_string(),
            source: None,
            summary: s.totals.into(),
            by_task_type: s
                .by_task_type
                .iter()
                .map(|t| HoursRow::new(t.task_type.label(), t.minutes))
                .collect(),
            daily_totals: s
                .daily_totals()
                .iter()
                .map(|(day, minutes)| HoursRow::new(day.name(), *minutes))
                .collect(),
            days: s.by_day.iter().map(DaySection::from).collect(),
            stats: output.stats,
        }
    }

    /// Attach the input name shown under the title.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
