use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;

/// Handle the `config` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        check,
    } = cmd
    {
        let file = Config::config_file();

        if *path {
            println!("{}", file.display());
        }

        if *print_config {
            if file.exists() {
                print!("{}", fs::read_to_string(&file)?);
            } else {
                warning("No configuration file found; defaults are in effect.");
            }
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration OK.");
            } else {
                for p in problems {
                    warning(format!("Missing or invalid field: {p}"));
                }
            }
        }
    }
    Ok(())
}
