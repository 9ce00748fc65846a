use crate::core::Table;
use crate::core::engine::BoardCard;
use crate::errors::{AppError, AppResult};
use crate::export::{model, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Board cards como CSV (cabeçalho via serde).
pub(crate) fn export_cards_csv(cards: &[BoardCard], path: &Path) -> AppResult<()> {
    info(format!("Exporting board cards to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    if cards.is_empty() {
        // serde only emits the header on the first record; keep it anyway
        wtr.write_record(model::card_headers())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for card in cards {
        wtr.serialize(card)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Updated source table as CSV, column order preserved.
pub(crate) fn export_table_csv(table: &Table, path: &Path) -> AppResult<()> {
    info(format!(
        "Exporting updated spreadsheet to CSV: {}",
        path.display()
    ));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(table.columns())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in 0..table.n_rows() {
        wtr.write_record(table.row_strings(row))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
