//! Local persistence for user preferences (theme and language).
//!
//! Web builds keep each preference under its own `localStorage` key so the
//! values stay readable from the browser console. Desktop builds write one
//! JSON document into the platform config directory.

use thiserror::Error;

use crate::settings::Preferences;

pub const THEME_KEY: &str = "keefile-theme";
pub const LANGUAGE_KEY: &str = "keefile-language";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(&'static str),
    #[error("preferences file could not be accessed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences are malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load stored preferences. Missing entries fall back to `Preferences::detect()`.
pub fn load_preferences() -> Result<Preferences, StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()?;
        let mut prefs = Preferences::detect();
        if let Some(theme) = read_item(&storage, THEME_KEY).and_then(|v| crate::settings::Theme::from_slug(&v)) {
            prefs.theme = theme;
        }
        if let Some(lang) = read_item(&storage, LANGUAGE_KEY).and_then(|v| crate::settings::Language::from_tag(&v)) {
            prefs.language = lang;
        }
        Ok(prefs)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        load_from(&preferences_path()?)
    }
}

pub fn save_preferences(prefs: &Preferences) -> Result<(), StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage()?;
        storage
            .set_item(THEME_KEY, prefs.theme.slug())
            .map_err(|_| StorageError::Unavailable("localStorage rejected theme"))?;
        storage
            .set_item(LANGUAGE_KEY, prefs.language.slug())
            .map_err(|_| StorageError::Unavailable("localStorage rejected language"))?;
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        save_to(&preferences_path()?, prefs)
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable("window missing"))?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(StorageError::Unavailable("localStorage disabled"))
}

#[cfg(target_arch = "wasm32")]
fn read_item(storage: &web_sys::Storage, key: &str) -> Option<String> {
    storage.get_item(key).ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn preferences_path() -> Result<std::path::PathBuf, StorageError> {
    let dirs = directories::ProjectDirs::from("com", "Keefile", "Keefile")
        .ok_or(StorageError::Unavailable("no home directory"))?;
    Ok(dirs.config_dir().join("preferences.json"))
}

/// Read preferences from `path`; a missing file yields detected defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_from(path: &std::path::Path) -> Result<Preferences, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::detect()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_to(path: &std::path::Path, prefs: &Preferences) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "preferences saved");
    Ok(())
}
