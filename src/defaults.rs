//! Default values for readme-gen.
//!
//! This module provides centralized file names and the built-in template,
//! ensuring consistency between the library and the command-line tool.

/// File name of the project manifest read from the project directory.
pub const MANIFEST_FILENAME: &str = "package.json";

/// File name of the generated document.
pub const README_FILENAME: &str = "README.md";

/// Marker that identifies a GitHub repository URL.
pub const GITHUB_URL: &str = "https://github.com/";

/// Template used when no `--template` path is supplied.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.md");
