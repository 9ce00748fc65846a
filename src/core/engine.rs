//! The classification pass: selects pending rows, derives board cards from
//! the rule tables, and stamps every visited row as processed.

use crate::core::normalize::{ensure_marker_column, normalize_columns};
use crate::core::rules::{
    ANOMALY_RULES, CLOCK_EVENT_COLUMNS, MARKER_COLUMN, MARKER_PROCESSED, NO_CLOCK_CHECKLIST,
    NO_CLOCK_LIST, NO_NAME,
};
use crate::core::table::{Cell, Table};
use crate::core::validity::is_valid_value;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// One card ready for import into the task board.
/// Field names mirror the board template headers.
#[derive(Serialize, Clone, Debug)]
pub struct BoardCard {
    pub list: String,
    #[serde(rename = "Card Name")]
    pub card_name: String,
    pub desc: String,
    pub checklist: String,
    #[serde(rename = "Data")]
    pub date: String,
}

/// Result of one classification pass.
pub struct ClassifyOutcome {
    /// Cards in emission order: input row order, no-clock-in check first
    /// within a row, then the anomaly rules in declared order.
    pub cards: Vec<BoardCard>,
    /// The source table with every visited row now marked processed.
    pub table: Table,
    /// Distinct board lists that received at least one card.
    pub lists_touched: BTreeSet<String>,
    pub rows_total: usize,
    pub rows_pending: usize,
}

/// Classify one spreadsheet.
///
/// Normalization and the marker column are (re)applied first, so any table
/// shape is accepted; both steps are idempotent. Rows already stamped
/// `PROCESSADO` emit nothing and are left untouched, which makes re-running
/// over the same accumulating file an at-most-once operation per row.
pub fn classify_sheet(mut table: Table, run_date: NaiveDate) -> ClassifyOutcome {
    normalize_columns(&mut table);
    ensure_marker_column(&mut table);

    let date_stamp = run_date.format("%Y-%m-%d").to_string();
    let rows_total = table.n_rows();

    let mut cards = Vec::new();
    let mut lists_touched = BTreeSet::new();
    let mut visited: Vec<usize> = Vec::new();

    // read-only pass; marker writes are applied in one batch afterwards
    for row in 0..rows_total {
        if table.cell(row, MARKER_COLUMN).as_trimmed() == MARKER_PROCESSED {
            continue;
        }

        let desc = format!(
            "Matrícula: {}\nLocalização: {}\nDia: {}\n",
            table.cell(row, "MATRÍCULA"),
            table.cell(row, "LOCALIZAÇÃO"),
            table.cell(row, "DIA"),
        );

        let mut card_name = table.cell(row, "NOME").as_trimmed();
        if card_name.is_empty() {
            card_name = NO_NAME.to_string();
        }

        if CLOCK_EVENT_COLUMNS
            .iter()
            .all(|col| !is_valid_value(table.cell(row, col)))
        {
            lists_touched.insert(NO_CLOCK_LIST.to_string());
            cards.push(BoardCard {
                list: NO_CLOCK_LIST.to_string(),
                card_name: card_name.clone(),
                desc: desc.clone(),
                checklist: NO_CLOCK_CHECKLIST.to_string(),
                date: date_stamp.clone(),
            });
        }

        for (column, list) in ANOMALY_RULES {
            let value = table.cell(row, column);
            if is_valid_value(value) {
                lists_touched.insert(list.to_string());
                cards.push(BoardCard {
                    list: list.to_string(),
                    card_name: card_name.clone(),
                    desc: desc.clone(),
                    checklist: value.as_trimmed(),
                    date: date_stamp.clone(),
                });
            }
        }

        // a clean row is still stamped so it is never re-scanned
        visited.push(row);
    }

    let rows_pending = visited.len();
    for row in visited {
        table.set_cell(row, MARKER_COLUMN, Cell::Text(MARKER_PROCESSED.to_string()));
    }

    ClassifyOutcome {
        cards,
        table,
        lists_touched,
        rows_total,
        rows_pending,
    }
}
