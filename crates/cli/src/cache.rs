// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide settings cache.
//!
//! Loaded settings are shared per canonical file path, so every caller that
//! discovers the same file sees the same in-memory state (including unsaved
//! `set` calls). Entries live until [`SettingsCache::invalidate`],
//! [`SettingsCache::clear`], or are refreshed with [`SettingsCache::reload`].

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::discovery;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Settings handle shared between all users of one settings file.
pub type SharedSettings = Arc<RwLock<Settings>>;

static GLOBAL: LazyLock<SettingsCache> = LazyLock::new(SettingsCache::new);

/// The process-wide cache.
pub fn global() -> &'static SettingsCache {
    &GLOBAL
}

/// Discover `cfg_name` from the current directory and return the cached
/// handle, loading it on first use.
pub fn settings(cfg_name: &str) -> Result<SharedSettings> {
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    global().discover(&cwd, cfg_name)
}

/// Cache of loaded settings keyed by canonical file path.
#[derive(Default)]
pub struct SettingsCache {
    inner: DashMap<PathBuf, SharedSettings>,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover `cfg_name` from `start` upward, then [`Self::get_or_load`].
    pub fn discover(&self, start: &Path, cfg_name: &str) -> Result<SharedSettings> {
        let path = discovery::require_config(start, cfg_name)?;
        self.get_or_load(&path)
    }

    /// Cached handle for the settings file at `path`, loading on a miss.
    pub fn get_or_load(&self, path: &Path) -> Result<SharedSettings> {
        let key = canonical(path)?;
        match self.inner.entry(key) {
            Entry::Occupied(entry) => {
                tracing::debug!("settings cache hit: {}", entry.key().display());
                Ok(Arc::clone(entry.get()))
            }
            Entry::Vacant(entry) => {
                tracing::debug!("settings cache miss: {}", entry.key().display());
                let settings = Settings::load(entry.key())?;
                Ok(Arc::clone(
                    entry.insert(Arc::new(RwLock::new(settings))).value(),
                ))
            }
        }
    }

    /// Re-read the file behind a cached entry in place, so existing handles
    /// see the new contents. Loads it if it was not cached.
    pub fn reload(&self, path: &Path) -> Result<SharedSettings> {
        let key = canonical(path)?;
        let Some(handle) = self.inner.get(&key).map(|e| Arc::clone(e.value())) else {
            return self.get_or_load(&key);
        };
        handle
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .reload()?;
        Ok(handle)
    }

    /// Drop the entry for `path`. Returns whether one was cached.
    ///
    /// Handles already given out keep working but are no longer shared with
    /// later lookups.
    pub fn invalidate(&self, path: &Path) -> bool {
        let key = canonical(path).unwrap_or_else(|_| path.to_path_buf());
        let removed = self.inner.remove(&key).is_some();
        if removed {
            tracing::debug!("settings cache invalidated: {}", key.display());
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        canonical(path).is_ok_and(|key| self.inner.contains_key(&key))
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
