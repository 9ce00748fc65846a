use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::classify_sheet;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::import::read_table;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::date::{parse_date, timestamp_slug, today};
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Handle the `process` command: classify one spreadsheet and write the
/// board-import file plus the updated source file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        file,
        format,
        date,
        dry_run,
    } = cmd
    {
        let run_date = match date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => today(),
        };

        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_name(&cfg.export_format)?,
        };

        info(format!("Processing {file}…"));
        let table = read_table(Path::new(file))?;

        let outcome = classify_sheet(table, run_date);

        println!();
        println!("Rows scanned : {}", outcome.rows_total);
        println!("Rows pending : {}", outcome.rows_pending);
        println!("Cards        : {}", outcome.cards.len());

        if outcome.lists_touched.is_empty() {
            println!("Lists        : (none)");
        } else {
            let lists: Vec<&str> = outcome.lists_touched.iter().map(String::as_str).collect();
            println!("Lists        : {}", lists.join(", "));
        }
        println!();

        if outcome.cards.is_empty() && outcome.rows_pending == 0 && outcome.rows_total > 0 {
            warning("No new cards: every row was already processed.");
        }

        if *dry_run {
            success("Dry run: no files written.");
            return Ok(());
        }

        // artifact write failures must not discard the computed result:
        // report them and keep going so the summary above stands
        let out_dir = expand_tilde(&cfg.save_path);
        let stamp = timestamp_slug();

        if let Err(e) = export::ensure_dir(&out_dir) {
            error(format!("Cannot prepare output directory: {e}"));
            return Ok(());
        }

        let board_path = export::artifact_path(&out_dir, &cfg.board_file_prefix, &stamp, format);
        if let Err(e) = export::write_cards(&outcome.cards, &board_path, format) {
            error(format!("Failed to write board file: {e}"));
        }

        let updated_path =
            export::artifact_path(&out_dir, &cfg.updated_file_prefix, &stamp, format);
        if let Err(e) = export::write_table(&outcome.table, &updated_path, format) {
            error(format!("Failed to write updated spreadsheet: {e}"));
        }
    }
    Ok(())
}
