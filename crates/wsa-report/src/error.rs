//! Report errors.

use thiserror::Error;

/// Failure to render a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output format name not recognised.
    #[error("unknown report format {0:?} (expected text, markdown or json)")]
    UnknownFormat(String),
}
