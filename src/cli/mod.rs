//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// japflix - search a movie catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "japflix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/japflix/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fetch the catalog from this URL
    #[arg(long, global = true, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Read the catalog from a local JSON file instead of the network
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Defaults to `browse`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Effective output format.
    ///
    /// Priority order:
    /// 1. `--output-format` → Explicit format
    /// 2. `--machine` → JSON format (shorthand)
    /// 3. Default → Human format
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if let Some(fmt) = self.output_format {
            return fmt;
        }
        if self.machine {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }

    /// Whether the interactive browser will run.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Browse(_)))
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively search and browse movies (TUI)
    Browse(commands::browse::BrowseArgs),

    /// Search the catalog and print the result list
    Search(commands::search::SearchArgs),

    /// Search the catalog and print the detail panel of one result
    Show(commands::show::ShowArgs),
}
