// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bootstrap a new settings file.

use std::path::PathBuf;

use crate::discovery::DEFAULT_CFG_NAME;
use crate::error::Result;
use crate::ini::{self, Values};

/// Keys written by [`create_config`], in file order.
pub const INIT_KEYS: &[&str] = &[
    "lib_name",
    "user",
    "branch",
    "git_url",
    "lib_path",
    "nbs_path",
    "doc_path",
    "tst_flags",
    "version",
    "custom_sidebar",
];

/// Optional parameters for [`create_config`].
///
/// `git_url` and `lib_path` may reference other keys with `%(name)s`; they
/// are stored unexpanded and resolved when read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Directory the settings file is written into.
    pub path: PathBuf,
    pub cfg_name: String,
    pub branch: String,
    pub git_url: String,
    pub custom_sidebar: bool,
    pub nbs_path: String,
    pub lib_path: String,
    pub doc_path: String,
    pub tst_flags: String,
    pub version: String,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            cfg_name: DEFAULT_CFG_NAME.to_string(),
            branch: "master".to_string(),
            git_url: "https://github.com/%(user)s/data_lab/tree/%(branch)s/".to_string(),
            custom_sidebar: false,
            nbs_path: "nbs".to_string(),
            lib_path: "%(lib_name)s".to_string(),
            doc_path: "docs".to_string(),
            tst_flags: String::new(),
            version: "0.0.1".to_string(),
        }
    }
}

impl InitOptions {
    /// Target settings file.
    pub fn config_path(&self) -> PathBuf {
        self.path.join(&self.cfg_name)
    }
}

/// Assemble the initial key set.
pub fn init_values(lib_name: &str, user: &str, opts: &InitOptions) -> Values {
    let custom_sidebar = if opts.custom_sidebar { "True" } else { "False" };
    [
        ("lib_name", lib_name),
        ("user", user),
        ("branch", opts.branch.as_str()),
        ("git_url", opts.git_url.as_str()),
        ("lib_path", opts.lib_path.as_str()),
        ("nbs_path", opts.nbs_path.as_str()),
        ("doc_path", opts.doc_path.as_str()),
        ("tst_flags", opts.tst_flags.as_str()),
        ("version", opts.version.as_str()),
        ("custom_sidebar", custom_sidebar),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Write a new settings file for `lib_name`, overwriting any existing one.
///
/// The target directory must already exist. Returns the file written.
pub fn create_config(lib_name: &str, user: &str, opts: &InitOptions) -> Result<PathBuf> {
    let path = opts.config_path();
    ini::save_config_file(&path, &init_values(lib_name, user, opts))?;
    tracing::debug!("created {} for {}", path.display(), lib_name);
    Ok(path)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
