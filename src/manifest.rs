//! Project manifest (`package.json`) loading.
//!
//! A manifest is optional. Every failure mode (missing file, permission
//! error, invalid JSON) collapses to `None` so callers can treat "no
//! manifest" and "broken manifest" the same way.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::defaults::MANIFEST_FILENAME;

/// Load and parse `package.json` from `dir`.
pub fn load_manifest(dir: &Path) -> Option<Value> {
    let path = dir.join(MANIFEST_FILENAME);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!("No manifest at {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Ignoring unparsable manifest {}: {}", path.display(), e);
            None
        }
    }
}

/// Look up a JSON pointer such as `/repository/url` in a manifest.
///
/// Returns `None` when the manifest is absent, when any segment is missing
/// or when the value found is JSON `null`.
pub fn manifest_field<'a>(manifest: Option<&'a Value>, pointer: &str) -> Option<&'a Value> {
    manifest?.pointer(pointer).filter(|value| !value.is_null())
}

/// Look up a JSON pointer and return it only if it holds a string.
pub fn manifest_str<'a>(manifest: Option<&'a Value>, pointer: &str) -> Option<&'a str> {
    manifest_field(manifest, pointer).and_then(Value::as_str)
}
