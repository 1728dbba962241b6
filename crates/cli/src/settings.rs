// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project settings loaded from a discovered settings file.
//!
//! [`Settings`] is an in-memory view over exactly one file. Reads go through
//! typed accessors; writes stay in memory until [`Settings::save`].

use std::path::{Path, PathBuf};

use crate::discovery;
use crate::error::{Error, Result};
use crate::ini::{self, Values};
use crate::interp;

/// Keys ending in this suffix hold paths relative to the settings file.
pub const PATH_SUFFIX: &str = "_path";

/// Whether `key` follows the path-key naming convention.
pub fn is_path_key(key: &str) -> bool {
    ini::normalize_key(key).ends_with(PATH_SUFFIX)
}

/// A looked-up value, typed by the path-key convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    /// Value of a `*_path` key, joined onto the settings directory.
    Path(PathBuf),
    Text(String),
}

/// Settings from one settings file.
#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
    values: Values,
}

impl Settings {
    /// Discover `cfg_name` from the current working directory upward and load it.
    pub fn discover(cfg_name: &str) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Self::discover_from(&cwd, cfg_name)
    }

    /// Discover `cfg_name` from `start` upward and load it.
    pub fn discover_from(start: &Path, cfg_name: &str) -> Result<Self> {
        let path = discovery::require_config(start, cfg_name)?;
        Self::load(&path)
    }

    /// Load a settings file at a known location.
    pub fn load(path: &Path) -> Result<Self> {
        let values = ini::read_config_file(path)?;
        tracing::debug!("loaded {} keys from {}", values.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// The settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the settings file; path keys resolve against it.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Stored (uninterpolated) values in file order.
    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(&ini::normalize_key(key))
    }

    /// Interpolated value of `key`.
    pub fn get_string(&self, key: &str) -> Result<String> {
        let key = ini::normalize_key(key);
        let raw = self.values.get(&key).ok_or_else(|| self.missing(&key))?;
        interp::interpolate(&key, raw, &self.values)
    }

    /// Value of `key` as a path relative to [`Settings::root`].
    ///
    /// Absolute values are returned as-is.
    pub fn get_path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.root().join(self.get_string(key)?))
    }

    /// Look up `key`, resolving it as a path when it is a path key.
    pub fn lookup(&self, key: &str) -> Result<Setting> {
        if is_path_key(key) {
            self.get_path(key).map(Setting::Path)
        } else {
            self.get_string(key).map(Setting::Text)
        }
    }

    /// Interpolated value of `key`, or `None` when it is absent or cannot
    /// be interpolated. Never resolves paths.
    pub fn get(&self, key: &str) -> Option<String> {
        if !self.contains(key) {
            return None;
        }
        match self.get_string(key) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("{}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Stored value of `key` without interpolation.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values
            .get(&ini::normalize_key(key))
            .map(String::as_str)
    }

    /// Set `key` in memory. Call [`Settings::save`] to persist.
    ///
    /// The value is stored as it will read back from the file, with each
    /// line trimmed.
    pub fn set(&mut self, key: &str, value: impl ToString) -> Result<()> {
        let key = ini::normalize_key(key);
        ini::validate_key(&key)?;
        let value = ini::normalize_value(&value.to_string());
        interp::validate(&key, &value)?;
        self.values.insert(key, value);
        Ok(())
    }

    /// Remove `key` in memory, returning its stored value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.shift_remove(&ini::normalize_key(key))
    }

    /// All keys with interpolated values, in file order.
    pub fn resolved(&self) -> Result<Values> {
        self.values
            .iter()
            .map(|(key, raw)| Ok((key.clone(), interp::interpolate(key, raw, &self.values)?)))
            .collect()
    }

    /// Overwrite the settings file with the in-memory values.
    pub fn save(&self) -> Result<()> {
        ini::save_config_file(&self.path, &self.values)
    }

    /// Re-read the settings file, discarding unsaved changes.
    pub fn reload(&mut self) -> Result<()> {
        self.values = ini::read_config_file(&self.path)?;
        tracing::debug!("reloaded {}", self.path.display());
        Ok(())
    }

    fn missing(&self, key: &str) -> Error {
        Error::MissingKey {
            key: key.to_string(),
            path: self.path.clone(),
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
