//! # Week Window and Due-Date Parsing
//!
//! The staffing week runs Monday through Saturday. Sunday rows are never
//! part of any aggregate. [`WeekDay`] is the day bucket and deliberately has
//! no Sunday variant: a record that exists has a bucket.
//!
//! Due dates arrive as spreadsheet text in whatever shape the exporter
//! produced. [`parse_due`] accepts the common ISO and US layouts; anything
//! else yields `None` and the row is dropped by the pipeline.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A day bucket inside the Monday–Saturday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekDay {
    /// All buckets in calendar order.
    pub const ALL: [WeekDay; 6] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Bucket for a calendar date, or `None` on Sunday.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Self::from_weekday(date.weekday())
    }

    /// Bucket for a chrono weekday, or `None` on Sunday.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Self::Monday),
            Weekday::Tue => Some(Self::Tuesday),
            Weekday::Wed => Some(Self::Wednesday),
            Weekday::Thu => Some(Self::Thursday),
            Weekday::Fri => Some(Self::Friday),
            Weekday::Sat => Some(Self::Saturday),
            Weekday::Sun => None,
        }
    }

    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for WeekDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which calendar weeks a run admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekWindow {
    /// Every Monday–Saturday date, whatever week it falls in.
    #[default]
    AnyWeek,
    /// Only the Monday–Saturday span of the week containing this date.
    Anchored(NaiveDate),
}

impl WeekWindow {
    /// Anchor on the week containing `date`.
    pub fn anchored(date: NaiveDate) -> Self {
        Self::Anchored(date)
    }

    /// Parse a `YYYY-MM-DD` anchor.
    pub fn parse_anchor(s: &str) -> Result<Self, ConfigError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::Anchored)
            .map_err(|_| ConfigError::InvalidWeekAnchor(s.to_string()))
    }

    /// Monday and Saturday of the anchored week, if any.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::AnyWeek => None,
            Self::Anchored(anchor) => {
                let offset = i64::from(anchor.weekday().num_days_from_monday());
                let monday = *anchor - Duration::days(offset);
                Some((monday, monday + Duration::days(5)))
            }
        }
    }

    /// Day bucket for `date` if the window admits it.
    pub fn bucket(&self, date: NaiveDate) -> Option<WeekDay> {
        let day = WeekDay::from_date(date)?;
        match self.bounds() {
            Some((monday, saturday)) if date < monday || date > saturday => None,
            _ => Some(day),
        }
    }
}

/// Date-time layouts tried in order. Two-digit years come before four-digit
/// ones, and US layouts before `%Y/%m/%d`, because `%Y` would otherwise read
/// `26` as the year 26.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%y %I:%M:%S %p",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%Y/%m/%d"];

/// Leniently parse a due-date cell.
///
/// Returns `None` for empty or unrecognised input. RFC 3339 values with an
/// offset keep their local wall-clock time, since only the calendar day
/// matters downstream. `extra_formats` are tried last, first as date-time
/// then as date-only layouts.
pub fn parse_due(raw: &str, extra_formats: &[String]) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(dt);
    }
    if let Some(d) = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
    {
        return Some(d.and_time(NaiveTime::MIN));
    }

    extra_formats.iter().find_map(|f| {
        NaiveDateTime::parse_from_str(s, f)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, f)
                    .ok()
                    .map(|d| d.and_time(NaiveTime::MIN))
            })
    })
}

/// Reject strftime strings chrono cannot use.
pub fn validate_date_format(format: &str) -> Result<(), ConfigError> {
    if format.trim().is_empty() {
        return Err(ConfigError::InvalidDateFormat {
            format: format.to_string(),
            reason: "empty format".to_string(),
        });
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidDateFormat {
            format: format.to_string(),
            reason: "unrecognised strftime specifier".to_string(),
        });
    }
    Ok(())
}
