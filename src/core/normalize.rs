use crate::core::rules::MARKER_COLUMN;
use crate::core::table::{Cell, Table};

/// Trim and upper-case every column label. Idempotent; a table with zero
/// columns passes through unchanged.
pub fn normalize_columns(table: &mut Table) {
    let normalized = table
        .columns()
        .iter()
        .map(|c| c.trim().to_uppercase())
        .collect();
    table.set_columns(normalized);
}

/// Make sure the marker column exists (new cells default to empty) and sits
/// last, wherever it was found. Idempotent.
pub fn ensure_marker_column(table: &mut Table) {
    if table.column_index(MARKER_COLUMN).is_none() {
        table.add_column(MARKER_COLUMN, Cell::Empty);
    }
    table.move_column_last(MARKER_COLUMN);
}
