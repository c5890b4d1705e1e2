//! pnrctl (pnr) - CLI for Swedish personal identity numbers
//!
//! Validates, inspects and reformats personnummer, coordination numbers and
//! interim numbers from the command line.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
