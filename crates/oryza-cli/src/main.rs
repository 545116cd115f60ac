#![forbid(unsafe_code)]

//! Oryza CLI
//!
//! Browse the rice catalogue, place and remove orders, and manage contact
//! details from the terminal.

use anyhow::Result;
use clap::Parser;

use oryza_cli::cli::Cli;
use oryza_cli::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);
    tracing::debug!(command = ?cli.command, "Starting");

    commands::run(&cli)?;
    Ok(())
}
