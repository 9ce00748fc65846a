use crate::core::{Cell, Table};
use crate::errors::{AppError, AppResult};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveTime;
use std::path::Path;

/// Workbook input (xlsx/xls/ods): the first worksheet is the dataset and
/// its first row the column labels.
pub(crate) fn read_workbook(path: &Path) -> AppResult<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppError::Import(format!("cannot open workbook: {e}")))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Import("workbook has no worksheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| AppError::Import(format!("cannot read worksheet '{sheet}': {e}")))?;

    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_row) => header_row.iter().map(|d| d.to_string()).collect(),
        None => Vec::new(),
    };

    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(to_cell).collect());
    }

    Ok(table)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // clock cells arrive as day fractions, day columns as whole serials
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if dt.as_f64() < 1.0 => Cell::Text(ndt.format("%H:%M").to_string()),
            Some(ndt) if ndt.time() == NaiveTime::MIN => {
                Cell::Text(ndt.date().format("%Y-%m-%d").to_string())
            }
            Some(ndt) => Cell::Text(ndt.format("%Y-%m-%d %H:%M").to_string()),
            None => Cell::Empty,
        },
        other => Cell::Text(other.to_string()),
    }
}
