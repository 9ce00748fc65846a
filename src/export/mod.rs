// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;
mod xlsx;

pub(crate) use fs_utils::ensure_dir;

use crate::core::Table;
use crate::core::engine::BoardCard;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Helper comum para mensagens de conclusão de export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Parse the config-file spelling of a format.
    pub fn from_name(name: &str) -> AppResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}

/// Build `<dir>/<prefix>_<stamp>.<ext>`; the per-run stamp keeps artifact
/// names collision-free across runs.
pub fn artifact_path(dir: &Path, prefix: &str, stamp: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{prefix}_{stamp}.{}", format.as_str()))
}

/// Write the board-import artifact (one row per card).
pub fn write_cards(cards: &[BoardCard], path: &Path, format: ExportFormat) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::export_cards_csv(cards, path),
        ExportFormat::Json => json::export_cards_json(cards, path),
        ExportFormat::Xlsx => xlsx::export_sheet_xlsx(
            &model::card_headers(),
            &model::cards_to_rows(cards),
            path,
            "XLSX (board)",
        ),
    }
}

/// Write the updated-source artifact (the full annotated table).
pub fn write_table(table: &Table, path: &Path, format: ExportFormat) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::export_table_csv(table, path),
        ExportFormat::Json => json::export_table_json(table, path),
        ExportFormat::Xlsx => xlsx::export_sheet_xlsx(
            &model::table_headers(table),
            &model::table_to_rows(table),
            path,
            "XLSX (updated source)",
        ),
    }
}
