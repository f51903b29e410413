//! # Info Command Implementation
//!
//! Displays the project information that `generate` would render: values
//! from `package.json` and the git `origin` remote of the current directory.
//!
//! This command is read-only and never fails on missing metadata; anything
//! that cannot be detected is reported as absent.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use readme_gen::output::OutputConfig;
use readme_gen::project::ProjectInfo;
use readme_gen::template::TemplateContext;

/// Show the project information detected in the current directory
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Project directory to inspect (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Print the information as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the `info` command.
pub fn execute(args: InfoArgs, output: &OutputConfig) -> Result<()> {
    let info = match &args.dir {
        Some(dir) => ProjectInfo::from_dir(dir),
        None => ProjectInfo::collect(),
    };

    if args.json {
        println!("{}", info.to_json()?);
    } else {
        print!("{}", format_info(&info, output));
    }

    Ok(())
}

/// Human-readable listing, one template variable per line.
fn format_info(info: &ProjectInfo, output: &OutputConfig) -> String {
    let context = TemplateContext::from_project(info);
    let width = context.names().map(str::len).max().unwrap_or(0);

    let mut text = format!("{} Project information\n\n", output.emoji("📋", "[INFO]"));
    for name in context.names() {
        let value = context.get(name).unwrap_or("(not detected)");
        text.push_str(&format!("  {:<width$}  {}\n", name, value, width = width));
    }
    text
}
