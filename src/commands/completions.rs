//! # Completions Command Implementation
//!
//! Prints a completion script for the requested shell, generated from the
//! `clap` definition with `clap_complete`.
//!
//! ```bash
//! readme-gen completions bash > ~/.local/share/bash-completion/completions/readme-gen
//! readme-gen completions zsh > ~/.zfunc/_readme-gen
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command, writing the script to stdout.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout())
}

fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "readme-gen", out);
    Ok(())
}
