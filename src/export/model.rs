// src/export/model.rs

use crate::core::Table;
use crate::core::engine::BoardCard;

/// Headers do artefato de import do board.
pub(crate) fn card_headers() -> Vec<String> {
    ["list", "Card Name", "desc", "checklist", "Data"]
        .iter()
        .map(|h| h.to_string())
        .collect()
}

/// Convert one card to a row of strings (xlsx path).
pub(crate) fn card_to_row(card: &BoardCard) -> Vec<String> {
    vec![
        card.list.clone(),
        card.card_name.clone(),
        card.desc.clone(),
        card.checklist.clone(),
        card.date.clone(),
    ]
}

pub(crate) fn cards_to_rows(cards: &[BoardCard]) -> Vec<Vec<String>> {
    cards.iter().map(card_to_row).collect()
}

pub(crate) fn table_headers(table: &Table) -> Vec<String> {
    table.columns().to_vec()
}

pub(crate) fn table_to_rows(table: &Table) -> Vec<Vec<String>> {
    (0..table.n_rows()).map(|r| table.row_strings(r)).collect()
}
