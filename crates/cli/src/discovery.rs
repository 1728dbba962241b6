//! Settings file discovery.
//!
//! Walks from a start directory up to the filesystem root looking for the
//! settings file.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default settings file name.
pub const DEFAULT_CFG_NAME: &str = "settings.ini";

/// Find `cfg_name` in `start_dir` or the nearest ancestor that has one.
pub fn find_config(start_dir: &Path, cfg_name: &str) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let config_path = current.join(cfg_name);
        tracing::trace!("probing {}", config_path.display());
        if config_path.is_file() {
            return Some(config_path);
        }

        // Move up one directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Like [`find_config`], but a miss is an error.
pub fn require_config(start_dir: &Path, cfg_name: &str) -> Result<PathBuf> {
    match find_config(start_dir, cfg_name) {
        Some(path) => {
            tracing::debug!("found {}", path.display());
            Ok(path)
        }
        None => Err(Error::NotFound {
            cfg_name: cfg_name.to_string(),
            start: start_dir.to_path_buf(),
        }),
    }
}

/// Resolve the settings file from an explicit path or by discovery from `cwd`.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path, cfg_name: &str) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            if path.is_file() {
                Ok(path.to_path_buf())
            } else {
                Err(Error::NotFound {
                    cfg_name: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| cfg_name.to_string()),
                    start: path.parent().unwrap_or(cwd).to_path_buf(),
                })
            }
        }
        None => require_config(cwd, cfg_name),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
