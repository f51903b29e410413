//! # CLI Command Implementations
//!
//! Each subcommand of `readme-gen` lives in its own file and contains:
//! - An `Args` struct that defines the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `readme_gen` library.

pub mod completions;
pub mod generate;
pub mod info;
