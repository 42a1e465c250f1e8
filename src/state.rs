//! Persisted key/value state.
//!
//! A flat JSON object of strings, stored in
//! `<data_dir>/fluent-patch/state.json`. Only the last version the
//! "what's new" page was shown for lives here today.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::error::StateError;

/// Key under which the last shown version is stored.
pub const VERSION_KEY: &str = concat!(env!("CARGO_PKG_NAME"), ".version");

/// Get the data directory path.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("fluent-patch"))
}

/// File-backed key/value store.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl StateStore {
    /// Default location of the store file.
    pub fn default_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("state.json"))
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StateError> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set `key` and write the whole store back to disk.
    pub fn update(&mut self, key: &str, value: impl Into<String>) -> Result<(), StateError> {
        self.values.insert(key.to_string(), value.into());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        tracing::debug!("Saved state to {:?}", self.path);
        Ok(())
    }
}
