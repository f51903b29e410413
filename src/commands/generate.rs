//! # Generate Command Implementation
//!
//! This module implements the `generate` subcommand, which renders a template
//! with the detected project information and writes `README.md`.
//!
//! ## Functionality
//!
//! - **Detection**: Reads `package.json` and the git `origin` remote
//! - **Prompts**: Lets the user confirm or edit detected values (skipped with `--yes`
//!   or when not attached to a terminal)
//! - **Templates**: Uses `--template` / `README_GEN_TEMPLATE`, or the built-in template
//! - **Safety**: Refuses to replace an existing README.md without `--force` or confirmation
//! - **Dry Run**: Prints the rendered README instead of writing it

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use log::info;
use std::path::{Path, PathBuf};

use readme_gen::defaults::{DEFAULT_TEMPLATE, README_FILENAME};
use readme_gen::output::OutputConfig;
use readme_gen::project::ProjectInfo;
use readme_gen::readme::{create_readme, create_readme_in, get_template};
use readme_gen::template::{github_profile_url, render, TemplateContext};

/// Variables the user is asked to confirm, with their prompts.
const PROMPTS: &[(&str, &str)] = &[
    ("projectName", "Project name"),
    ("projectVersion", "Project version"),
    ("projectDescription", "Project description"),
    ("authorName", "Author name"),
    ("githubUsername", "GitHub username"),
    ("repositoryUrl", "Repository URL"),
    ("contributingUrl", "Issues page URL"),
];

/// Generate README.md from a template
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Template file to render (defaults to the built-in template)
    #[arg(short, long, value_name = "PATH", env = "README_GEN_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Use detected values without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite an existing README.md without confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Print the rendered README instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Execute the `generate` command.
pub fn execute(args: GenerateArgs, output: &OutputConfig) -> Result<()> {
    let project = match &args.dir {
        Some(dir) => ProjectInfo::from_dir(dir),
        None => ProjectInfo::collect(),
    };
    info!("Detected project information: {:?}", project);

    let template = load_template(args.template.as_deref())?;

    let mut context = TemplateContext::from_project(&project);
    let interactive = !args.yes && console::user_attended();
    if interactive {
        ask_questions(&mut context)?;
    } else if !args.yes {
        info!("Not attached to a terminal, using detected values");
    }

    let readme = render(&template, &context).context("Failed to render template")?;

    if args.dry_run {
        print!("{}", readme);
        return Ok(());
    }

    let readme_path = match &args.dir {
        Some(dir) => dir.join(README_FILENAME),
        None => PathBuf::from(README_FILENAME),
    };

    if readme_path.exists() && !args.force && !confirm_overwrite(interactive, &readme_path)? {
        eprintln!("{}", output.warning("README.md left untouched"));
        return Ok(());
    }

    match &args.dir {
        Some(dir) => create_readme_in(dir, &readme)?,
        None => create_readme(&readme)?,
    }

    println!(
        "{}",
        output.success(&format!("Created {}", readme_path.display()))
    );
    Ok(())
}

fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Using template {}", path.display());
            Ok(get_template(path)?)
        }
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

/// Let the user edit each prompted variable, pre-filled with the detected value.
fn ask_questions(context: &mut TemplateContext) -> Result<()> {
    let theme = ColorfulTheme::default();

    for (name, prompt) in PROMPTS {
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(*prompt)
            .allow_empty(true);
        if let Some(detected) = context.get(name) {
            input = input.default(detected.to_string());
        }

        let answer = input.interact_text()?;
        apply_answer(context, name, &answer);
    }

    Ok(())
}

/// Store a prompt answer. An empty answer unsets the variable.
fn apply_answer(context: &mut TemplateContext, name: &str, answer: &str) {
    let answer = answer.trim();
    let value = (!answer.is_empty()).then(|| answer.to_string());

    // Keep derived variables in step with the answer
    match name {
        "contributingUrl" => context.set("issuesUrl", value.clone()),
        "githubUsername" => context.set(
            "githubProfileUrl",
            value.as_deref().map(github_profile_url),
        ),
        _ => {}
    }
    context.set(name, value);
}

fn confirm_overwrite(interactive: bool, path: &Path) -> Result<bool> {
    if !interactive {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let overwrite = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
        .default(false)
        .interact()?;
    Ok(overwrite)
}
