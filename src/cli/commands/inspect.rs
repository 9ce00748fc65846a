use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::{ensure_marker_column, normalize_columns};
use crate::core::rules::{MARKER_COLUMN, MARKER_PROCESSED};
use crate::errors::AppResult;
use crate::import::read_table;
use std::path::Path;

/// Handle the `inspect` command: a read-only look at a spreadsheet's
/// columns and processing state. Nothing is written.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { file } = cmd {
        let mut table = read_table(Path::new(file))?;
        normalize_columns(&mut table);
        ensure_marker_column(&mut table);

        let total = table.n_rows();
        let processed = (0..total)
            .filter(|&r| table.cell(r, MARKER_COLUMN).as_trimmed() == MARKER_PROCESSED)
            .count();

        println!("File      : {file}");
        println!("Columns   : {}", table.columns().join(" | "));
        println!("Rows      : {total}");
        println!("Pending   : {}", total - processed);
        println!("Processed : {processed}");
    }
    Ok(())
}
