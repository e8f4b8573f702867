//! # Workbook Source
//!
//! Reads the first worksheet of a spreadsheet positionally. Date cells
//! stored natively are converted to date-times here, honouring the
//! workbook's 1900 or 1904 date system; durations are not due dates.
//! Textual dates are left for the pipeline's lenient parser.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use wsa_core::{DueCell, RawRow};

use crate::config::IngestConfig;
use crate::csv_source::check_header_width;
use crate::error::IngestError;

/// Read all data rows from the first worksheet of `path`.
pub fn read_workbook(path: &Path, config: &IngestConfig) -> Result<Vec<RawRow>, IngestError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| IngestError::Workbook(format!("{}: {e}", path.display())))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::Workbook(format!("{}: no worksheets", path.display())))?;

    let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
        IngestError::Workbook(format!("{}: sheet {sheet_name:?}: {e}", path.display()))
    })?;

    let first_row = range.start().map_or(0, |(row, _)| row as usize);
    rows_from_cells(range.rows().map(<[Data]>::to_vec), first_row, config)
}

/// Convert worksheet rows to raw rows. `first_row` is the 0-based sheet row
/// of the first item, used for 1-based line numbers in diagnostics.
pub fn rows_from_cells(
    cells: impl Iterator<Item = Vec<Data>>,
    first_row: usize,
    config: &IngestConfig,
) -> Result<Vec<RawRow>, IngestError> {
    config.validate()?;

    let mut rows = Vec::new();
    let mut cells = cells.enumerate();

    if config.has_header {
        match cells.next() {
            Some((_, header)) => check_header_width(header.len(), config)?,
            None => return Ok(rows),
        }
    }

    for (offset, row) in cells {
        let line = first_row + offset + 1;
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let title = row
            .get(config.title_column)
            .map(cell_text)
            .unwrap_or_default();
        let due = row
            .get(config.due_date_column)
            .map_or(DueCell::Missing, due_cell);
        rows.push(RawRow { line, title, due });
    }

    Ok(rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({e:?})"),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

fn due_cell(cell: &Data) -> DueCell {
    match cell {
        Data::Empty | Data::Error(_) => DueCell::Missing,
        Data::DateTime(dt) if dt.is_duration() => DueCell::Missing,
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or(DueCell::Missing, DueCell::DateTime),
        Data::String(s) | Data::DateTimeIso(s) => DueCell::Text(s.clone()),
        other => DueCell::Text(cell_text(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use chrono::NaiveDate;
    use wsa_core::{Pipeline, WeekDay};

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn date_cell(serial: f64, is_1904: bool) -> Data {
        Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, is_1904))
    }

    fn narrow() -> IngestConfig {
        IngestConfig {
            title_column: 0,
            due_date_column: 1,
            has_header: true,
        }
    }

    #[test]
    fn reads_string_cells_by_position() {
        let cells = vec![
            vec![s("Title"), s("Due")],
            vec![s("VIP"), s("2026-03-02")],
            vec![Data::Empty, Data::Empty],
            vec![s("Walk Thru"), Data::DateTimeIso("2026-03-03T09:00:00".into())],
        ];
        let rows = rows_from_cells(cells.into_iter(), 0, &narrow()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "VIP");
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].due, DueCell::Text("2026-03-03T09:00:00".into()));
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn empty_and_error_dates_are_missing() {
        let cells = vec![
            vec![s("Title"), s("Due")],
            vec![s("VIP"), Data::Empty],
            vec![s("VIP")],
        ];
        let rows = rows_from_cells(cells.into_iter(), 0, &narrow()).unwrap();
        assert!(rows.iter().all(|r| r.due == DueCell::Missing));
    }

    #[test]
    fn narrow_header_is_an_error() {
        let cells = vec![vec![s("Title")]];
        let err = rows_from_cells(cells.into_iter(), 0, &IngestConfig::default()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { column: 18, found: 1 }));
    }

    #[test]
    fn native_dates_follow_the_date_system() {
        let monday_9am = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let cells = vec![
            vec![s("Title"), s("Due")],
            vec![s("VIP"), date_cell(46083.375, false)],
            vec![s("VIP"), date_cell(44621.375, true)],
        ];
        let rows = rows_from_cells(cells.into_iter(), 0, &narrow()).unwrap();
        assert_eq!(rows[0].due, DueCell::DateTime(monday_9am));
        assert_eq!(rows[1].due, DueCell::DateTime(monday_9am));

        let out = Pipeline::default().run(rows);
        assert_eq!(out.records.len(), 2);
        assert!(out.records.iter().all(|r| r.day == WeekDay::Monday));
    }

    #[test]
    fn durations_are_not_due_dates() {
        let cells = vec![
            vec![s("Title"), s("Due")],
            vec![
                s("VIP"),
                Data::DateTime(ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false)),
            ],
        ];
        let rows = rows_from_cells(cells.into_iter(), 0, &narrow()).unwrap();
        assert_eq!(rows[0].due, DueCell::Missing);
    }

    #[test]
    fn numeric_titles_are_stringified() {
        let cells = vec![vec![s("T"), s("D")], vec![Data::Int(42), s("2026-03-02")]];
        let rows = rows_from_cells(cells.into_iter(), 0, &narrow()).unwrap();
        assert_eq!(rows[0].title, "42");
    }
}
