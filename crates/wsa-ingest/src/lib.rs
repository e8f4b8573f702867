//! # wsa-ingest — Positional Input Adapter
//!
//! Task exports put the task title in the 10th column (J) and the due
//! date in the 19th (S). Header names vary between exports, so columns are
//! read by position, never by name. This crate is the only place that
//! knows about that layout; everything downstream sees
//! [`wsa_core::RawRow`].
//!
//! ## Formats
//!
//! - `.csv` — via the `csv` crate, rows may be ragged.
//! - `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` — first worksheet via
//!   `calamine`. Native date cells become date-times directly.
//!
//! ## Crate Policy
//!
//! - Structural problems (missing file, header too narrow) are errors.
//! - Per-row problems (short row, empty cell) are not: the row is passed on
//!   with a missing cell and the pipeline decides.

pub mod config;
pub mod csv_source;
pub mod error;
pub mod workbook;

use std::path::Path;

use wsa_core::RawRow;

pub use config::IngestConfig;
pub use error::IngestError;

/// Input file kind, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated text.
    Csv,
    /// Spreadsheet workbook readable by calamine.
    Workbook,
}

impl InputFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read every data row of `path` as a [`RawRow`].
pub fn read_rows(path: &Path, config: &IngestConfig) -> Result<Vec<RawRow>, IngestError> {
    config.validate()?;
    if !path.exists() {
        return Err(IngestError::NotFound(path.display().to_string()));
    }

    let format = InputFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), ?format, "reading task export");

    let rows = match format {
        InputFormat::Csv => {
            let file = std::fs::File::open(path)?;
            csv_source::read_csv(file, config)?
        }
        InputFormat::Workbook => workbook::read_workbook(path, config)?,
    };

    tracing::info!(path = %path.display(), rows = rows.len(), "read task export");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.CSV")).unwrap(), InputFormat::Csv);
        assert_eq!(
            InputFormat::from_path(Path::new("tasks.xlsx")).unwrap(),
            InputFormat::Workbook
        );
        assert!(matches!(
            InputFormat::from_path(Path::new("tasks.json")),
            Err(IngestError::UnsupportedFormat(_))
        ));
        assert!(InputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_rows(Path::new("/definitely/not/here.csv"), &IngestConfig::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::NotFound(_)));
    }
}
