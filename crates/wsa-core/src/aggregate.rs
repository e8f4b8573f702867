//! # Hour Aggregation
//!
//! Pure reductions over a classified, week-filtered record set. Nothing
//! here is cached: a [`WeeklySummary`] is recomputed from the records each
//! time it is asked for.
//!
//! Grouped outputs are ordered alphabetically by label, the same order a
//! sorted group-by produces. Day outputs follow calendar order Monday to
//! Saturday. Days without records are absent from [`WeeklySummary::by_day`]
//! but present as zero in [`WeeklySummary::daily_totals`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::hours::Minutes;
use crate::task::{TaskRecord, TaskType};
use crate::window::WeekDay;

/// The three headline sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTotals {
    /// All hours.
    pub total: Minutes,
    /// Hours on senior-preferred task types.
    pub senior: Minutes,
    /// Hours on task types whose label starts with "Hot Tub".
    pub hot_tub: Minutes,
}

impl HourTotals {
    /// Fold one record in.
    pub fn add(&mut self, record: &TaskRecord) {
        let minutes = record.minutes();
        self.total += minutes;
        if record.senior_preferred() {
            self.senior += minutes;
        }
        if record.task_type.is_hot_tub() {
            self.hot_tub += minutes;
        }
    }

    /// Sums over a record set.
    pub fn of<'a>(records: impl IntoIterator<Item = &'a TaskRecord>) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.add(record);
        }
        totals
    }
}

/// Staffing skill split used by the senior-vs-other breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    /// Any task type that is not senior-preferred.
    #[serde(rename = "Other")]
    Other,
    /// Senior-preferred task types.
    #[serde(rename = "Senior Preferred")]
    SeniorPreferred,
}

impl SkillLevel {
    /// Skill level of a task type.
    pub fn of(task_type: TaskType) -> Self {
        if task_type.senior_preferred() {
            Self::SeniorPreferred
        } else {
            Self::Other
        }
    }

    /// Display label, also the serialized name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Other => "Other",
            Self::SeniorPreferred => "Senior Preferred",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Hours for one task type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHours {
    /// The task type.
    pub task_type: TaskType,
    /// Summed hours of every record of that type.
    pub minutes: Minutes,
}

/// Hours for one skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillHours {
    /// The skill level.
    pub skill: SkillLevel,
    /// Summed hours of every record at that level.
    pub minutes: Minutes,
}

/// Aggregates for one non-empty weekday bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The weekday bucket.
    pub day: WeekDay,
    /// Calendar date of the earliest record in the bucket.
    pub date: NaiveDate,
    /// Number of records in the bucket.
    pub task_count: usize,
    /// Headline sums for the day.
    pub totals: HourTotals,
    /// Hours per task type, alphabetical by label.
    pub by_task_type: Vec<TypeHours>,
    /// Hours per skill level, alphabetical by label.
    pub by_skill: Vec<SkillHours>,
}

/// Weekly aggregates over a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Number of records aggregated.
    pub record_count: usize,
    /// Headline sums for the week.
    pub totals: HourTotals,
    /// Hours per task type, alphabetical by label.
    pub by_task_type: Vec<TypeHours>,
    /// Per-day aggregates for days with records, Monday to Saturday.
    pub by_day: Vec<DaySummary>,
}

impl WeeklySummary {
    /// The summary for one day, if it had records.
    pub fn day(&self, day: WeekDay) -> Option<&DaySummary> {
        self.by_day.iter().find(|d| d.day == day)
    }

    /// Total hours for every day Monday to Saturday, zero where empty.
    pub fn daily_totals(&self) -> [(WeekDay, Minutes); 6] {
        WeekDay::ALL.map(|day| {
            let total = self.day(day).map_or(Minutes::ZERO, |d| d.totals.total);
            (day, total)
        })
    }

    /// Whether nothing was aggregated.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Aggregate a record set.
///
/// Order of `records` does not affect any value.
pub fn summarize(records: &[TaskRecord]) -> WeeklySummary {
    let by_day = WeekDay::ALL
        .iter()
        .filter_map(|&day| summarize_day(day, records))
        .collect();

    WeeklySummary {
        record_count: records.len(),
        totals: HourTotals::of(records),
        by_task_type: group_by_type(records.iter()),
        by_day,
    }
}

fn summarize_day(day: WeekDay, records: &[TaskRecord]) -> Option<DaySummary> {
    let day_records: Vec<&TaskRecord> = records.iter().filter(|r| r.day == day).collect();
    let date = day_records.iter().map(|r| r.due_date()).min()?;

    let mut by_skill: BTreeMap<&'static str, SkillHours> = BTreeMap::new();
    for record in &day_records {
        let skill = SkillLevel::of(record.task_type);
        by_skill
            .entry(skill.label())
            .or_insert(SkillHours {
                skill,
                minutes: Minutes::ZERO,
            })
            .minutes += record.minutes();
    }

    Some(DaySummary {
        day,
        date,
        task_count: day_records.len(),
        totals: HourTotals::of(day_records.iter().copied()),
        by_task_type: group_by_type(day_records.iter().copied()),
        by_skill: by_skill.into_values().collect(),
    })
}

fn group_by_type<'a>(records: impl Iterator<Item = &'a TaskRecord>) -> Vec<TypeHours> {
    let mut groups: BTreeMap<&'static str, TypeHours> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.task_type.label())
            .or_insert(TypeHours {
                task_type: record.task_type,
                minutes: Minutes::ZERO,
            })
            .minutes += record.minutes();
    }
    groups.into_values().collect()
}
