//! # Task Classifier
//!
//! Maps a free-text task title to a [`TaskType`] using an ordered table of
//! keyword rules. Matching is a case-insensitive substring test and the
//! first matching rule wins.
//!
//! Order is significant. Several keywords overlap ("ho arrival hot tub"
//! contains "arrival hot tub"; a title may mention both a hot tub and an
//! inspection), and the result is decided by table position, never by the
//! longest or most specific match. A title that names a hot tub service
//! and an inspection is a hot tub task.

use serde::Serialize;

use crate::hours::Minutes;
use crate::task::TaskType;

/// One classification rule: any keyword hit assigns `task_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Lowercase substrings, any of which selects this rule.
    pub keywords: &'static [&'static str],
    /// Category assigned when the rule matches.
    pub task_type: TaskType,
}

impl Rule {
    /// Whether the already-lowercased title contains any keyword.
    pub fn matches(&self, lowered_title: &str) -> bool {
        self.keywords.iter().any(|k| lowered_title.contains(k))
    }
}

/// The rule table in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &[
            "arrival hot tub",
            "ho arrival hot tub",
            "biweekly hot tub",
            "lease hot tub",
        ],
        task_type: TaskType::HotTubRegular,
    },
    Rule {
        keywords: &["dump", "scrub"],
        task_type: TaskType::HotTubDumpScrub,
    },
    Rule {
        keywords: &["post rental inspection"],
        task_type: TaskType::PostRentalInspection,
    },
    Rule {
        keywords: &["managed services inspection"],
        task_type: TaskType::ManagedServicesInspection,
    },
    Rule {
        keywords: &["managed services arrival"],
        task_type: TaskType::ManagedServicesArrival,
    },
    Rule {
        keywords: &["vip"],
        task_type: TaskType::Vip,
    },
    Rule {
        keywords: &["walk thru"],
        task_type: TaskType::WalkThru,
    },
];

/// The rule table, for display and inspection.
pub fn rules() -> &'static [Rule] {
    RULES
}

/// Result of classifying one title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Assigned category.
    pub task_type: TaskType,
    /// Labor duration for the category.
    pub minutes: Minutes,
    /// Skill requirement for the category.
    pub senior_preferred: bool,
}

impl From<TaskType> for Classification {
    fn from(task_type: TaskType) -> Self {
        Self {
            task_type,
            minutes: task_type.minutes(),
            senior_preferred: task_type.senior_preferred(),
        }
    }
}

/// Classify a task title. Never fails; unmatched titles are `Unclassified`.
pub fn classify(title: &str) -> Classification {
    classify_type(title).into()
}

/// Classify a task title to its [`TaskType`] only.
pub fn classify_type(title: &str) -> TaskType {
    let lowered = title.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(TaskType::Unclassified, |rule| rule.task_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tuple(title: &str, task_type: TaskType, minutes: u32, senior: bool) {
        let c = classify(title);
        assert_eq!(
            c,
            Classification {
                task_type,
                minutes: Minutes::new(minutes),
                senior_preferred: senior,
            },
            "title {title:?}"
        );
    }

    #[test]
    fn each_rule_yields_its_row() {
        assert_tuple("Arrival Hot Tub Service", TaskType::HotTubRegular, 30, false);
        assert_tuple("HO Arrival Hot Tub", TaskType::HotTubRegular, 30, false);
        assert_tuple("Biweekly Hot Tub - Unit 4", TaskType::HotTubRegular, 30, false);
        assert_tuple("LEASE HOT TUB check", TaskType::HotTubRegular, 30, false);
        assert_tuple("Hot Tub Dump", TaskType::HotTubDumpScrub, 90, false);
        assert_tuple("Dump & Scrub", TaskType::HotTubDumpScrub, 90, false);
        assert_tuple("scrub only", TaskType::HotTubDumpScrub, 90, false);
        assert_tuple("Post Rental Inspection", TaskType::PostRentalInspection, 60, true);
        assert_tuple(
            "Managed Services Inspection",
            TaskType::ManagedServicesInspection,
            60,
            true,
        );
        assert_tuple("Managed Services Arrival", TaskType::ManagedServicesArrival, 60, true);
        assert_tuple("VIP Turnover", TaskType::Vip, 60, true);
        assert_tuple("Owner Walk Thru", TaskType::WalkThru, 30, false);
        assert_tuple("Random Task", TaskType::Unclassified, 0, false);
    }

    #[test]
    fn hot_tub_beats_inspection() {
        assert_eq!(
            classify_type("Arrival Hot Tub + Post Rental Inspection"),
            TaskType::HotTubRegular
        );
        assert_eq!(
            classify_type("Post rental inspection and scrub"),
            TaskType::HotTubDumpScrub
        );
    }

    #[test]
    fn managed_services_inspection_beats_vip() {
        assert_eq!(
            classify_type("VIP Managed Services Inspection"),
            TaskType::ManagedServicesInspection
        );
    }

    #[test]
    fn vip_beats_walk_thru() {
        assert_eq!(classify_type("VIP walk thru"), TaskType::Vip);
    }

    #[test]
    fn scrub_check_is_not_degenerate() {
        // A title with neither "dump" nor "scrub" must fall through rule 2.
        assert_eq!(classify_type("Walk Thru"), TaskType::WalkThru);
        assert_eq!(classify_type(""), TaskType::Unclassified);
    }

    #[test]
    fn plain_hot_tub_without_qualifier_is_unclassified() {
        assert_eq!(classify_type("Hot Tub Service"), TaskType::Unclassified);
    }

    #[test]
    fn rules_cover_every_classified_type_once_in_order() {
        let types: Vec<TaskType> = rules().iter().map(|r| r.task_type).collect();
        let expected: Vec<TaskType> = TaskType::all()
            .iter()
            .copied()
            .filter(|t| t.is_classified())
            .collect();
        assert_eq!(types, expected);
    }

    #[test]
    fn keywords_are_lowercase() {
        for rule in rules() {
            for k in rule.keywords {
                assert_eq!(*k, k.to_lowercase());
            }
        }
    }
}
