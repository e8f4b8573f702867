//! # CSV Source
//!
//! Reads a CSV export positionally. Rows may have any number of fields; a
//! row too short to reach a column yields an empty title or a missing due
//! date for that row. Cells are decoded lossily, so an export saved in a
//! legacy encoding still reads, with replacement characters in place of
//! the bytes that are not UTF-8.

use std::io::Read;

use wsa_core::{DueCell, RawRow};

use crate::config::IngestConfig;
use crate::error::IngestError;

/// Read all data rows from CSV text.
pub fn read_csv<R: Read>(reader: R, config: &IngestConfig) -> Result<Vec<RawRow>, IngestError> {
    config.validate()?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut records = csv_reader.byte_records();

    if config.has_header {
        match records.next() {
            Some(header) => check_header_width(header?.len(), config)?,
            None => return Ok(rows),
        }
    }

    for (index, record) in records.enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(index + 1, |p| usize::try_from(p.line()).unwrap_or(usize::MAX));

        if record.iter().all(|f| f.iter().all(u8::is_ascii_whitespace)) {
            tracing::debug!(line, "skipping blank row");
            continue;
        }

        let title = record
            .get(config.title_column)
            .map(|b| String::from_utf8_lossy(b).trim().to_string())
            .unwrap_or_default();
        let due = match record.get(config.due_date_column) {
            Some(b) => DueCell::Text(String::from_utf8_lossy(b).into_owned()),
            None => DueCell::Missing,
        };
        rows.push(RawRow { line, title, due });
    }

    Ok(rows)
}

pub(crate) fn check_header_width(found: usize, config: &IngestConfig) -> Result<(), IngestError> {
    let required = config.required_width();
    if found < required {
        return Err(IngestError::MissingColumn {
            column: required - 1,
            found,
        });
    }
    Ok(())
}
