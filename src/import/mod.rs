//! Reading the source spreadsheet into a [`Table`].

mod csv;
mod xlsx;

use crate::core::Table;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Parse the input file, dispatching on its extension.
///
/// This is the one operation that fails hard: anything unparsable surfaces
/// as a single [`AppError::Import`] with no partial output.
pub fn read_table(path: &Path) -> AppResult<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => xlsx::read_workbook(path),
        "csv" => csv::read_csv(path),
        other => Err(AppError::Import(format!(
            "unsupported input extension '{other}' (expected xlsx, xls, ods or csv)"
        ))),
    }
}
