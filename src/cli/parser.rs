use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pontoboard
/// CLI application to classify attendance spreadsheets into board cards
#[derive(Parser)]
#[command(
    name = "pontoboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify attendance spreadsheet anomalies and build task-board import files",
    long_about = None
)]
pub struct Cli {
    /// Override the output directory for generated artifacts
    #[arg(global = true, long = "out")]
    pub out: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Show the columns and processing state of a spreadsheet (read-only)
    Inspect {
        /// Input spreadsheet (xlsx, xls, ods or csv)
        file: String,
    },

    /// Classify a spreadsheet and write the two output artifacts
    Process {
        /// Input spreadsheet (xlsx, xls, ods or csv)
        file: String,

        /// Artifact format (default: from config)
        #[arg(long = "format", value_enum)]
        format: Option<ExportFormat>,

        /// Processing date stamp (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Classify and report, but write no files
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
}
