//! Template loading and README output.
//!
//! Unlike project discovery, failures here are reported to the caller: a
//! missing template or an unwritable README is a usage problem.

use std::fs;
use std::path::Path;

use log::info;

use crate::defaults::README_FILENAME;
use crate::error::{Error, Result};

/// Read the template at `path` as UTF-8 text.
pub fn get_template(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `README.md` in the current directory.
pub fn create_readme(content: &str) -> Result<()> {
    create_readme_in(Path::new("."), content)
}

/// Write `content` to `README.md` inside `dir`, replacing any existing file.
pub fn create_readme_in(dir: &Path, content: &str) -> Result<()> {
    let path = dir.join(README_FILENAME);
    fs::write(&path, content).map_err(|source| Error::ReadmeWrite {
        path: path.clone(),
        source,
    })?;
    info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
