//! Shared test utilities for CLI end-to-end tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_manifest(manifests::GITHUB);
//! fixture.command().arg("info").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
}

/// `package.json` snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// A complete manifest pointing at a GitHub repository.
    pub const GITHUB: &str = r#"{
  "name": "app",
  "version": "1.2.3",
  "description": "Does useful things",
  "author": "Bob Builder <bob@example.com> (https://bob.dev)",
  "engines": { "node": ">=18" },
  "repository": { "type": "git", "url": "git+https://github.com/bob/app.git" }
}"#;

    /// A manifest hosted outside GitHub with an explicit issue tracker.
    pub const GITLAB_WITH_BUGS: &str = r#"{
  "name": "lab-app",
  "repository": { "url": "https://gitlab.com/team/lab-app.git" },
  "bugs": { "url": "https://gitlab.com/team/lab-app/-/issues" }
}"#;

    /// Not JSON at all.
    pub const INVALID: &str = "{ this is not json";
}

/// A temporary project directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `package.json` with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file("package.json", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory.
    ///
    /// Colors are disabled and the template environment variable is cleared
    /// so output is stable.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("readme-gen");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("README_GEN_TEMPLATE")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
