use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the YAML configuration file with its defaults
pub fn handle(_cli: &Cli) -> AppResult<()> {
    let path = Config::init_all()?;
    let cfg = Config::load()?;

    println!("⚙️  Initializing pontoboard…");
    println!("📄 Config file : {}", path.display());
    println!("📁 Save path   : {}", cfg.save_path);
    println!(
        "🗂️  Artifacts   : {}_<stamp>.{} / {}_<stamp>.{}",
        cfg.board_file_prefix, cfg.export_format, cfg.updated_file_prefix, cfg.export_format
    );

    Ok(())
}
