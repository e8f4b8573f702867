//! # wsa-core — Weekly Staffing Analysis Pipeline
//!
//! Turns raw task-export rows into classified, week-filtered task records
//! and the hour aggregates a staffing report is built from. This crate is
//! the leaf of the workspace: it performs no I/O and depends on no other
//! `wsa-*` crate.
//!
//! ## Key Design Principles
//!
//! 1. **Ordered rule table.** Classification is a fixed, priority-ordered
//!    list of keyword rules (`classify::RULES`). First match wins; the order
//!    is part of the contract.
//!
//! 2. **Hours derive from the task type.** `TaskType::minutes()` and
//!    `TaskType::senior_preferred()` are the only source of those values.
//!    A `TaskRecord` cannot carry hours that disagree with its type.
//!
//! 3. **Exact summation.** Hours are held as integer [`Minutes`]. Decimal
//!    hours and 2 dp rounding exist only at the presentation boundary.
//!
//! 4. **Nothing in the pipeline is fatal.** Bad dates drop the row,
//!    unknown titles are `Unclassified`, and an empty result is a valid
//!    all-zero summary.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod hours;
pub mod pipeline;
pub mod task;
pub mod window;

// Re-export primary types for ergonomic imports.
pub use aggregate::{
    summarize, DaySummary, HourTotals, SkillHours, SkillLevel, TypeHours, WeeklySummary,
};
pub use classify::{classify, classify_type, rules, Classification, Rule};
pub use config::{PipelineConfig, UnclassifiedPolicy};
pub use error::ConfigError;
pub use hours::Minutes;
pub use pipeline::{DueCell, Pipeline, PipelineOutput, RawRow, RunStats};
pub use task::{TaskRecord, TaskType};
pub use window::{parse_due, validate_date_format, WeekDay, WeekWindow};
