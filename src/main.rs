//! # readme-gen CLI
//!
//! This is the binary entry point for the `readme-gen` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Reporting errors; `anyhow` prints the error chain and exits with status 1.
//!
//! Project discovery, templating and output live in the `readme_gen`
//! library crate; the binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
