use crate::core::{Cell, Table};
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// CSV input: the first record is the header row. Ragged rows are
/// tolerated; short ones are padded with empty cells by the table.
pub(crate) fn read_csv(path: &Path) -> AppResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("CSV open error: {e}")))?;

    let headers = rdr
        .headers()
        .map_err(|e| AppError::Import(format!("CSV header error: {e}")))?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();

    let mut table = Table::new(headers);

    for record in rdr.records() {
        let record = record.map_err(|e| AppError::Import(format!("CSV read error: {e}")))?;
        let cells = record
            .iter()
            .map(|field| {
                if field.trim().is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        table.push_row(cells);
    }

    Ok(table)
}
