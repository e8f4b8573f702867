//! # Task Types and Records
//!
//! [`TaskType`] is the single enumeration of labor categories. Its
//! duration and skill requirement are methods on the enum, so every
//! consumer reads the same values and a record cannot drift from its type.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::hours::Minutes;
use crate::window::WeekDay;

/// The canonical category a raw task title maps to.
///
/// Every `match` on this enum must be exhaustive. Adding a category forces
/// the rule table, the durations and the skill flags to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskType {
    /// Routine hot tub service (arrival, biweekly, lease).
    #[serde(rename = "Hot Tub - Regular")]
    HotTubRegular,
    /// Full hot tub drain and scrub.
    #[serde(rename = "Hot Tub - Dump & Scrub")]
    HotTubDumpScrub,
    /// Inspection after a guest stay.
    #[serde(rename = "Post Rental Inspection")]
    PostRentalInspection,
    /// Inspection for a managed-services owner.
    #[serde(rename = "Managed Services Inspection")]
    ManagedServicesInspection,
    /// Arrival preparation for a managed-services owner.
    #[serde(rename = "Managed Services Arrival")]
    ManagedServicesArrival,
    /// VIP guest task.
    #[serde(rename = "VIP")]
    Vip,
    /// Property walk-through.
    #[serde(rename = "Walk Thru")]
    WalkThru,
    /// No rule matched.
    #[serde(rename = "Unclassified")]
    Unclassified,
}

impl TaskType {
    /// All task types, classified categories first in rule order.
    pub fn all() -> &'static [TaskType] {
        &[
            Self::HotTubRegular,
            Self::HotTubDumpScrub,
            Self::PostRentalInspection,
            Self::ManagedServicesInspection,
            Self::ManagedServicesArrival,
            Self::Vip,
            Self::WalkThru,
            Self::Unclassified,
        ]
    }

    /// Human-readable label used in reports and for grouping order.
    pub fn label(self) -> &'static str {
        match self {
            Self::HotTubRegular => "Hot Tub - Regular",
            Self::HotTubDumpScrub => "Hot Tub - Dump & Scrub",
            Self::PostRentalInspection => "Post Rental Inspection",
            Self::ManagedServicesInspection => "Managed Services Inspection",
            Self::ManagedServicesArrival => "Managed Services Arrival",
            Self::Vip => "VIP",
            Self::WalkThru => "Walk Thru",
            Self::Unclassified => "Unclassified",
        }
    }

    /// Fixed labor duration for one task of this type.
    pub fn minutes(self) -> Minutes {
        match self {
            Self::HotTubRegular => Minutes::new(30),
            Self::HotTubDumpScrub => Minutes::new(90),
            Self::PostRentalInspection
            | Self::ManagedServicesInspection
            | Self::ManagedServicesArrival
            | Self::Vip => Minutes::new(60),
            Self::WalkThru => Minutes::new(30),
            Self::Unclassified => Minutes::ZERO,
        }
    }

    /// Whether the task should be staffed by senior personnel.
    pub fn senior_preferred(self) -> bool {
        matches!(
            self,
            Self::PostRentalInspection
                | Self::ManagedServicesInspection
                | Self::ManagedServicesArrival
                | Self::Vip
        )
    }

    /// Whether the task counts toward hot tub hours (label starts with "Hot Tub").
    pub fn is_hot_tub(self) -> bool {
        self.label().starts_with("Hot Tub")
    }

    /// Whether a rule matched.
    pub fn is_classified(self) -> bool {
        self != Self::Unclassified
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One input row that survived date filtering, with its classification.
///
/// Created once per pipeline run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Free-text task title as exported.
    pub title: String,
    /// Parsed due date-time. Only the date part affects bucketing.
    pub due: NaiveDateTime,
    /// Weekday bucket, always Monday through Saturday.
    pub day: WeekDay,
    /// Category assigned by the classifier.
    pub task_type: TaskType,
}

impl TaskRecord {
    /// Calendar due date.
    pub fn due_date(&self) -> NaiveDate {
        self.due.date()
    }

    /// Labor duration, derived from the task type.
    pub fn minutes(&self) -> Minutes {
        self.task_type.minutes()
    }

    /// Skill requirement, derived from the task type.
    pub fn senior_preferred(&self) -> bool {
        self.task_type.senior_preferred()
    }
}
