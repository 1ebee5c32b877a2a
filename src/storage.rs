// SPDX-License-Identifier: MPL-2.0
//! Persistent key/value storage for user preferences.
//!
//! Only reads are defined. Writing a changed preference back is the
//! application's job (see [`crate::config::save`]).

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait PreferenceStore: Send + Sync {
    /// Returns the stored string under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;
}

/// In-memory store, for tests and for embedders that manage persistence
/// themselves.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

/// Reads top-level string keys from a TOML file such as `settings.toml`.
///
/// The file is read on every lookup so edits made by other processes are seen.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let table: toml::Table = toml::from_str(&content)?;
        Ok(table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }
}
