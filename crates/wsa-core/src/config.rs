//! # Pipeline Configuration
//!
//! Knobs that change which records a run keeps. Column positions are an
//! ingest concern and live in `wsa-ingest`.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::window::{validate_date_format, WeekWindow};

/// What to do with rows no rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclassifiedPolicy {
    /// Keep them as `Unclassified` with zero hours. They appear in record
    /// listings and the by-task-type table but add nothing to any total.
    #[default]
    Retain,
    /// Remove them before aggregation.
    Drop,
}

impl FromStr for UnclassifiedPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" | "keep" => Ok(Self::Retain),
            "drop" => Ok(Self::Drop),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for UnclassifiedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Retain => "retain",
            Self::Drop => "drop",
        })
    }
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Handling of rows no rule matched.
    pub unclassified: UnclassifiedPolicy,
    /// Restrict the run to the week containing this date.
    pub week_of: Option<NaiveDate>,
    /// Additional strftime layouts for due dates, tried after the built-ins.
    pub extra_date_formats: Vec<String>,
}

impl PipelineConfig {
    /// Check every user-supplied value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for format in &self.extra_date_formats {
            validate_date_format(format)?;
        }
        Ok(())
    }

    /// The week window implied by `week_of`.
    pub fn window(&self) -> WeekWindow {
        self.week_of.map_or(WeekWindow::AnyWeek, WeekWindow::anchored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("Retain".parse::<UnclassifiedPolicy>(), Ok(UnclassifiedPolicy::Retain));
        assert_eq!("DROP".parse::<UnclassifiedPolicy>(), Ok(UnclassifiedPolicy::Drop));
        assert_eq!(
            "ignore".parse::<UnclassifiedPolicy>(),
            Err(ConfigError::UnknownPolicy("ignore".to_string()))
        );
    }

    #[test]
    fn default_retains_and_spans_any_week() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.unclassified, UnclassifiedPolicy::Retain);
        assert_eq!(cfg.window(), WeekWindow::AnyWeek);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bad_extra_format_is_rejected() {
        let cfg = PipelineConfig {
            extra_date_formats: vec!["%d.%m.%Y".into(), "%Q".into()],
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn week_of_anchors_window() {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        let cfg = PipelineConfig {
            week_of: Some(anchor),
            ..Default::default()
        };
        assert_eq!(cfg.window(), WeekWindow::Anchored(anchor));
    }
}
