//! Command-line argument definitions.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Render a directed acyclic graph as an ASCII branch diagram.
#[derive(Parser, Debug)]
#[command(name = "printtree", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PRINTTREE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render two-column `start,end` records
    Pairs(PairsArgs),
    /// Render delimited rows with id, parent and child columns
    Csv(CsvArgs),
    /// Configuration commands
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `printtree pairs`.
#[derive(Args, Debug, Default)]
pub struct PairsArgs {
    /// Input file (reads stdin if omitted)
    pub file: Option<PathBuf>,

    /// Field delimiter (defaults to the configured one)
    #[arg(short, long)]
    pub delimiter: Option<char>,
}

/// Arguments for `printtree csv`. Unset options fall back to the `[csv]`
/// section of the config file.
#[derive(Args, Debug, Default)]
pub struct CsvArgs {
    /// Input file (reads stdin if omitted)
    pub file: Option<PathBuf>,

    /// Leading rows to skip
    #[arg(long)]
    pub header_rows: Option<usize>,

    /// Column holding each row's id
    #[arg(long)]
    pub id_column: Option<usize>,

    /// Column holding the row's parent id
    #[arg(long)]
    pub parent_column: Option<usize>,

    /// Column holding the row's child id
    #[arg(long)]
    pub child_column: Option<usize>,

    /// Field delimiter
    #[arg(short, long)]
    pub delimiter: Option<char>,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path in use
    Path,
}
