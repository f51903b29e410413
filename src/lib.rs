//! # readme-gen Library
//!
//! This library gathers metadata about a local project and renders it into a
//! `README.md`. It is used by the `readme-gen` command-line tool but can be
//! embedded in other tooling as well.
//!
//! ## Quick Example
//!
//! ```
//! use readme_gen::template::{render, TemplateContext};
//! use readme_gen::project::ProjectInfo;
//!
//! let info = ProjectInfo {
//!     name: Some("my-app".to_string()),
//!     version: Some("1.0.0".to_string()),
//!     ..Default::default()
//! };
//!
//! let context = TemplateContext::from_project(&info);
//! let readme = render("# ${projectName} (${projectVersion})", &context).unwrap();
//! assert_eq!(readme, "# my-app (1.0.0)");
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: Loads `package.json`; a missing or broken
//!   manifest is simply absent.
//! - **Git (`git`)**: Reads the `origin` remote through the system `git`.
//! - **URLs (`url`)**: Cleans repository URLs and recognises GitHub ones.
//! - **Project information (`project`)**: Combines the above into a
//!   [`project::ProjectInfo`].
//! - **Templates (`template`)**: `${...}` placeholder substitution.
//! - **Output (`readme`)**: Reads templates and writes `README.md`.
//!
//! ## Error Policy
//!
//! Expected gaps (no manifest, no remote, missing fields) are represented as
//! `None`. Only template and README I/O, as well as template rendering,
//! return [`error::Error`].

pub mod defaults;
pub mod error;
pub mod git;
pub mod manifest;
pub mod output;
pub mod project;
pub mod readme;
pub mod template;
pub mod url;

#[cfg(test)]
mod url_proptest;
