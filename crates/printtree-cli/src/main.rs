//! printtree CLI
//!
//! Renders a directed acyclic graph read from delimited text as an ASCII
//! branch diagram.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use printtree_cli::cli::Cli;
use printtree_cli::config::Config;
use printtree_cli::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(cli.verbose, &config.log_level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli, &config, &mut out)?;
    Ok(())
}
