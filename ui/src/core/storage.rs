//! Persistence for the language preference.
//!
//! Contract: read once at startup ([`load_language`]), write on every switch
//! ([`save_language`]). The value is the raw locale tag under the fixed key
//! `"language"`. On the web this is `localStorage`; off-wasm a small file in
//! the project data directory stands in so the crate (and its tests) build
//! on the host.

use thiserror::Error;

/// Fixed key the preference is stored under.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed writing preference: {0}")]
    Io(#[from] std::io::Error),
}

/// Last persisted language tag, if any. Read failures are treated as "no
/// preference" rather than errors: the caller falls back to the default.
#[cfg(target_arch = "wasm32")]
pub fn load_language() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(LANGUAGE_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn save_language(tag: &str) -> Result<(), StorageError> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)?;
    storage
        .set_item(LANGUAGE_KEY, tag)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_language() -> Option<String> {
    let path = preference_path()?;
    let tag = std::fs::read_to_string(path).ok()?;
    let tag = tag.trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_language(tag: &str) -> Result<(), StorageError> {
    let path = preference_path().ok_or(StorageError::Unavailable)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, tag)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn preference_path() -> Option<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("it", "YM Formation", "ymf-site")?;
    Some(dirs.data_dir().join(LANGUAGE_KEY))
}
