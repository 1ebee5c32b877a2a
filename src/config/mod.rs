// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's settings file, where the saved locale
//! preference lives between sessions.
//!
//! # Examples
//!
//! ```no_run
//! use locale_bootstrap::config::{self, Settings};
//! use std::path::PathBuf;
//!
//! // Load existing settings
//! let mut settings = config::load().unwrap_or_default();
//!
//! // Remember a locale preference
//! settings.locale = Some("ko".to_string());
//! config::save(&settings).expect("Failed to save settings");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("settings.toml");
//! config::save_to_path(&settings, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.locale, Some("ko".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_LOCALE, LOCALE_STORAGE_KEY, SUPPORTED_LOCALES};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Saved locale preference, read back under [`LOCALE_STORAGE_KEY`].
    #[serde(default)]
    pub locale: Option<String>,
}

/// Path of `settings.toml` inside the resolved config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(defaults::CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Settings> {
    if let Some(path) = default_settings_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Settings::default())
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = default_settings_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
