//! # Project Information
//!
//! This module gathers the metadata a README is rendered from. It combines
//! the project manifest (`package.json`) with the git remote configuration
//! of the project directory.
//!
//! ## Resolution Order
//!
//! - **Repository URL**: `repository.url` from the manifest, otherwise the
//!   `origin` remote reported by git. Both sources are cleaned with
//!   [`clean_repository_url`].
//! - **Issues URL**: `bugs.url` from the manifest, otherwise the repository
//!   URL with `/issues` appended.
//! - **GitHub username**: the first path segment of a GitHub repository URL.
//! - **Name**: the manifest `name`, otherwise the directory name.
//!
//! None of these lookups fail. Anything that cannot be determined is left as
//! `None`.

use std::env;
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::git;
use crate::manifest::{load_manifest, manifest_field, manifest_str};
use crate::url::{clean_repository_url, github_username_from_repository_url, is_github_repository};

/// Metadata describing a single project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Passed through from the manifest: either a string or an object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    /// Passed through from the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engines: Option<Value>,
}

impl ProjectInfo {
    /// Gather project information for the current working directory.
    ///
    /// Falls back to an empty record if the working directory is unavailable.
    pub fn collect() -> Self {
        match env::current_dir() {
            Ok(dir) => Self::from_dir(&dir),
            Err(e) => {
                debug!("Cannot determine current directory: {}", e);
                Self::default()
            }
        }
    }

    /// Gather project information for the project rooted at `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        let manifest = load_manifest(dir);
        let manifest = manifest.as_ref();

        let repository_url = resolve_repository_url(dir, manifest);
        let contributing_url = resolve_issues_url(dir, manifest);
        let github_username = repository_url
            .as_deref()
            .filter(|url| is_github_repository(url))
            .map(github_username_from_repository_url);

        Self {
            name: detect_project_name(dir, manifest),
            description: manifest_str(manifest, "/description").map(str::to_string),
            version: manifest_str(manifest, "/version").map(str::to_string),
            author: manifest_field(manifest, "/author").cloned(),
            repository_url,
            contributing_url,
            github_username,
            engines: manifest_field(manifest, "/engines").cloned(),
        }
    }

    /// Serialize to pretty JSON, omitting absent fields.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Resolve the repository URL from the manifest, falling back to git.
///
/// A manifest URL that is empty once cleaned counts as absent.
pub fn resolve_repository_url(dir: &Path, manifest: Option<&Value>) -> Option<String> {
    let from_manifest = manifest_str(manifest, "/repository/url")
        .map(clean_repository_url)
        .filter(|url| !url.is_empty());
    if from_manifest.is_some() {
        return from_manifest;
    }

    git::remote_origin_url(dir)
        .map(|url| clean_repository_url(&url))
        .filter(|url| !url.is_empty())
}

/// Resolve the issue tracker URL.
///
/// `bugs.url` is returned verbatim. The fallback derives the URL from the
/// same manifest-then-git chain as [`resolve_repository_url`].
pub fn resolve_issues_url(dir: &Path, manifest: Option<&Value>) -> Option<String> {
    if let Some(url) = manifest_str(manifest, "/bugs/url") {
        return Some(url.to_string());
    }

    resolve_repository_url(dir, manifest).map(|url| format!("{}/issues", url))
}

/// Detect the project name from the manifest or the directory name.
pub fn detect_project_name(dir: &Path, manifest: Option<&Value>) -> Option<String> {
    if let Some(name) = manifest_str(manifest, "/name").filter(|name| !name.is_empty()) {
        return Some(name.to_string());
    }

    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
