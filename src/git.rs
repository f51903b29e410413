use std::path::Path;
use std::process::Command;

use log::debug;

/// Read the configured `remote.origin.url` of the repository at `dir`
///
/// This uses the system git command. Any failure (git not installed, not a
/// repository, no origin configured) yields `None`. The raw output is
/// trimmed but not cleaned; see [`crate::url::clean_repository_url`].
pub fn remote_origin_url(dir: &Path) -> Option<String> {
    let output = match Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .current_dir(dir)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            debug!("Could not run git in {}: {}", dir.display(), e);
            return None;
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(
            "git config --get remote.origin.url failed in {} ({}): {}",
            dir.display(),
            output.status,
            stderr.trim()
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let url = stdout.trim();
    if url.is_empty() {
        return None;
    }

    Some(url.to_string())
}
