//! # Error Types
//!
//! The pipeline itself never fails: malformed dates and unknown titles are
//! data, not errors. What can fail is configuring it, reported as
//! [`ConfigError`]. The ingest and report crates carry their own error
//! enums and wrap this one.

use thiserror::Error;

/// Invalid configuration value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Title and due date were mapped to the same column.
    #[error("title column and due date column must differ (both are {0})")]
    ColumnCollision(usize),

    /// A user-supplied chrono format string cannot be used for parsing.
    #[error("invalid date format {format:?}: {reason}")]
    InvalidDateFormat {
        /// The offending format string.
        format: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An unclassified-row policy name was not recognised.
    #[error("unknown unclassified policy {0:?} (expected \"retain\" or \"drop\")")]
    UnknownPolicy(String),

    /// A week anchor date could not be parsed.
    #[error("invalid week anchor {0:?}: expected YYYY-MM-DD")]
    InvalidWeekAnchor(String),
}
