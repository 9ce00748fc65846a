//! pontoboard library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Inspect { .. } => cli::commands::inspect::handle(&cli.command, cfg),
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
    }
}

/// Entry point usado por main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carrega config UMA vez só
    let mut cfg = Config::load()?;

    // 3️⃣ aplica eventual override da pasta de saída da linha de comando
    if let Some(out_dir) = &cli.out {
        cfg.save_path = out_dir.clone();
    }

    // 4️⃣ passa tudo ao dispatcher
    dispatch(&cli, &cfg)
}
