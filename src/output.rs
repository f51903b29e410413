//! # Output Configuration
//!
//! Controls whether the CLI decorates its messages with colors and emoji.
//!
//! The decision combines the `--color` flag with the usual environment
//! conventions:
//! - `NO_COLOR` (any value) disables decoration (https://no-color.org/)
//! - `CLICOLOR=0` disables decoration
//! - `CLICOLOR_FORCE=1` forces decoration even when stdout is not a TTY
//! - `TERM=dumb` disables decoration
//!
//! `--color=always` and `--color=never` override the environment.

use std::env;

use clap::ValueEnum;
use console::style;

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Always use colors and emoji
    Always,
    /// Never use colors and emoji
    Never,
    /// Decide from the terminal and environment
    #[default]
    Auto,
}

/// Output configuration for controlling colors and emoji.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Pick the emoji or its plain-text alternative.
    pub fn emoji<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// Format a success line, e.g. `✅ Created README.md`.
    pub fn success(&self, message: &str) -> String {
        let marker = self.emoji("✅", "[OK]");
        if self.use_color {
            format!("{} {}", marker, style(message).green())
        } else {
            format!("{} {}", marker, message)
        }
    }

    /// Format a warning line.
    pub fn warning(&self, message: &str) -> String {
        let marker = self.emoji("⚠️ ", "[WARN]");
        if self.use_color {
            format!("{} {}", marker, style(message).yellow())
        } else {
            format!("{} {}", marker, message)
        }
    }

    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}
