// src/export/json.rs

use crate::core::Table;
use crate::core::engine::BoardCard;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Board cards as pretty-printed JSON.
pub(crate) fn export_cards_json(cards: &[BoardCard], path: &Path) -> AppResult<()> {
    info(format!("Exporting board cards to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(cards)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Updated source table as JSON: one object per row, keyed by column label.
pub(crate) fn export_table_json(table: &Table, path: &Path) -> AppResult<()> {
    info(format!(
        "Exporting updated spreadsheet to JSON: {}",
        path.display()
    ));

    let mut rows = Vec::with_capacity(table.n_rows());
    for r in 0..table.n_rows() {
        let mut obj = Map::new();
        for (column, value) in table.columns().iter().zip(table.row_strings(r)) {
            obj.insert(column.clone(), Value::String(value));
        }
        rows.push(Value::Object(obj));
    }

    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
