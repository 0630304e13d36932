//! JSON document persistence
//!
//! Each collection is serialized to its own file under the data directory
//! (see [`ShopPaths`]). Writes are last-write-wins with no ordering
//! guarantee across collections. A missing file means "not persisted yet"
//! and a corrupt file is treated the same way after a warning, so a bad
//! document can never take the application down.

mod paths;

pub use paths::ShopPaths;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::AppResult;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load a JSON document from `path`
///
/// Returns `Ok(None)` when the file does not exist. A file that exists but
/// cannot be decoded is logged and treated as absent (the caller falls back
/// to its seed value).
pub fn load<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "corrupt document, falling back to defaults");
            Ok(None)
        }
    }
}

/// Serialize `value` as pretty JSON to `path`, creating parent directories
pub fn save<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(path, raw)?;
    Ok(())
}

/// Load a raw string setting, `Ok(None)` when the file does not exist
pub fn load_string(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Persist a raw string setting
pub fn save_string(path: &Path, value: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, value)?;
    Ok(())
}
