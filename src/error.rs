//! # Error Handling
//!
//! This module defines the error type for the `readme-gen` library. It uses
//! the `thiserror` library to describe the failures that are surfaced to the
//! caller.
//!
//! Most lookups in this crate never fail: a missing `package.json`, a
//! malformed manifest or a repository without a configured remote simply
//! yield `None`. Only the operations that indicate a usage or environment
//! problem produce an [`Error`]:
//!
//! - Reading the template file.
//! - Rendering a template that references an unknown variable.
//! - Writing `README.md`.
//! - Serializing project information for display.
//!
//! The `Result` type alias is used to return `Result<T, Error>` from
//! functions, making it easy to propagate errors with `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for readme-gen operations
#[derive(Error, Debug)]
pub enum Error {
    /// The template file could not be read.
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The README file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    ReadmeWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error occurred during template processing.
    ///
    /// May include the name of the problematic variable when applicable.
    #[error("Template processing error: {message}{}", variable.as_ref().map(|v| format!(" (variable: {})", v)).unwrap_or_default())]
    Template {
        message: String,
        /// The template variable that caused the error, if applicable
        variable: Option<String>,
    },

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
