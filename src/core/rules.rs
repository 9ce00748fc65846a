//! Static rule tables for the classification pass.
//! Column labels are matched after normalization (trimmed, upper-cased);
//! emission order follows the declaration order below.

/// Marker column appended to the source sheet; always kept last.
pub const MARKER_COLUMN: &str = "ID VERIFICACAO";

/// Marker value for rows that have already been classified.
pub const MARKER_PROCESSED: &str = "PROCESSADO";

/// Board list for rows with no clock-in records at all.
pub const NO_CLOCK_LIST: &str = "SEM BATIDA";

/// Fixed checklist text for the no-clock-in card.
pub const NO_CLOCK_CHECKLIST: &str = "Sem registros de batida";

/// Card name fallback when the NOME column is missing or empty.
pub const NO_NAME: &str = "Sem Nome";

/// The nine clock-event columns. A row with no valid value in any of them
/// gets a single `SEM BATIDA` card.
pub const CLOCK_EVENT_COLUMNS: [&str; 9] = [
    "BATIDAS",
    "ENTRADA 1",
    "SAÍDA 1",
    "ENTRADA 2",
    "SAÍDA 2",
    "ENTRADA 3",
    "SAÍDA 3",
    "ENTRADA 4",
    "SAÍDA 4",
];

/// Anomaly columns and the board list each one feeds.
pub const ANOMALY_RULES: [(&str, &str); 8] = [
    ("ATRASO", "ATRASO"),
    ("FALTA", "FALTA"),
    ("BANCO DE HORAS", "BANCO DE HORAS"),
    ("HORA EXTRA 50% (N.A.)", "HORA EXTRA 50%"),
    ("HORA EXTRA 100% (N.A.)", "HORA EXTRA 100%"),
    ("DSR DESCONTADO", "DSR DESCONTADO"),
    ("ADICIONAL NOTURNO", "ADICIONAL NOTURNO"),
    ("EXPEDIENTE", "EXPEDIENTE"),
];
