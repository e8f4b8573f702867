//! Ingest errors.

use thiserror::Error;

use wsa_core::ConfigError;

/// Failure to read a task export.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The input path does not exist.
    #[error("input file not found: {0}")]
    NotFound(String),

    /// The extension is not one we can read.
    #[error("unsupported input format: {0} (expected .csv, .xlsx, .xlsm, .xlsb, .xls or .ods)")]
    UnsupportedFormat(String),

    /// The header row is too narrow for the configured columns.
    #[error("header has {found} columns but column index {column} is required")]
    MissingColumn {
        /// Highest 0-based column index needed.
        column: usize,
        /// Columns actually present in the header.
        found: usize,
    },

    /// Column layout was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// CSV decoding failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook could not be opened or has no readable sheet.
    #[error("workbook error: {0}")]
    Workbook(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
