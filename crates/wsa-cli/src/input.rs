//! Input selection shared by `analyze` and `report`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use wsa_core::{Pipeline, PipelineOutput, UnclassifiedPolicy, WeekWindow};

use crate::config::WsaConfig;

/// Input file plus per-run overrides of the configuration file.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Task export to analyze (.csv, .xlsx, .xls, .ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 0-based column index of the task title (default 9, column J).
    #[arg(long)]
    pub title_column: Option<usize>,

    /// 0-based column index of the due date (default 18, column S).
    #[arg(long)]
    pub due_date_column: Option<usize>,

    /// Treat the first row as data instead of a header.
    #[arg(long)]
    pub no_header: bool,

    /// Keep ("retain") or remove ("drop") rows no rule matches.
    #[arg(long, value_name = "POLICY")]
    pub unclassified: Option<UnclassifiedPolicy>,

    /// Only include the Monday-Saturday week containing this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    pub week_of: Option<String>,

    /// Extra strftime layout for due dates. Repeatable.
    #[arg(long = "date-format", value_name = "FORMAT")]
    pub date_formats: Vec<String>,
}

impl InputArgs {
    /// Layer these flags over a loaded configuration.
    pub fn apply(&self, base: &WsaConfig) -> Result<WsaConfig> {
        let mut config = base.clone();

        if let Some(col) = self.title_column {
            config.ingest.title_column = col;
        }
        if let Some(col) = self.due_date_column {
            config.ingest.due_date_column = col;
        }
        if self.no_header {
            config.ingest.has_header = false;
        }
        if let Some(policy) = self.unclassified {
            config.pipeline.unclassified = policy;
        }
        if let Some(raw) = &self.week_of {
            // Store the Monday; any date in the week selects the same window.
            config.pipeline.week_of = WeekWindow::parse_anchor(raw)?
                .bounds()
                .map(|(monday, _)| monday);
        }
        config
            .pipeline
            .extra_date_formats
            .extend(self.date_formats.iter().cloned());

        config.validate()?;
        Ok(config)
    }

    /// Read the input and run the pipeline over it.
    pub fn run_pipeline(&self, base: &WsaConfig) -> Result<PipelineOutput> {
        let config = self.apply(base)?;
        let rows = wsa_ingest::read_rows(&self.file, &config.ingest)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        Ok(Pipeline::new(config.pipeline).run(rows))
    }

    /// File name for report headings.
    pub fn source_name(&self) -> String {
        self.file.file_name().map_or_else(
            || self.file.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args() -> InputArgs {
        InputArgs {
            file: PathBuf::from("tasks.csv"),
            title_column: None,
            due_date_column: None,
            no_header: false,
            unclassified: None,
            week_of: None,
            date_formats: Vec::new(),
        }
    }

    #[test]
    fn no_flags_keep_base() {
        let base = WsaConfig::default();
        assert_eq!(args().apply(&base).unwrap(), base);
    }

    #[test]
    fn flags_override_base() {
        let a = InputArgs {
            title_column: Some(1),
            due_date_column: Some(2),
            no_header: true,
            unclassified: Some(UnclassifiedPolicy::Drop),
            week_of: Some("2026-03-04".into()),
            date_formats: vec!["%d.%m.%Y".into()],
            ..args()
        };
        let cfg = a.apply(&WsaConfig::default()).unwrap();
        assert_eq!(cfg.ingest.title_column, 1);
        assert_eq!(cfg.ingest.due_date_column, 2);
        assert!(!cfg.ingest.has_header);
        assert_eq!(cfg.pipeline.unclassified, UnclassifiedPolicy::Drop);
        assert_eq!(cfg.pipeline.week_of, NaiveDate::from_ymd_opt(2026, 3, 2));
        assert_eq!(cfg.pipeline.extra_date_formats, vec!["%d.%m.%Y".to_string()]);
    }

    #[test]
    fn bad_week_of_is_rejected() {
        let a = InputArgs {
            week_of: Some("someday".into()),
            ..args()
        };
        assert!(a.apply(&WsaConfig::default()).is_err());
    }

    #[test]
    fn colliding_override_is_rejected() {
        let a = InputArgs {
            title_column: Some(18),
            ..args()
        };
        assert!(a.apply(&WsaConfig::default()).is_err());
    }

    #[test]
    fn source_name_is_file_name() {
        let a = InputArgs {
            file: PathBuf::from("/tmp/exports/week.csv"),
            ..args()
        };
        assert_eq!(a.source_name(), "week.csv");
    }
}
