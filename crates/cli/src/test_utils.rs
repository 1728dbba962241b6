//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the nbkit crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Settings written by [`temp_project`].
pub const MINIMAL_SETTINGS: &str = "\
[DEFAULT]
lib_name = mylib
user = alice
branch = master
lib_path = %(lib_name)s
nbs_path = nbs
";

/// Creates a temp directory with a minimal settings.ini.
pub fn temp_project() -> TempDir {
    temp_project_with_settings(MINIMAL_SETTINGS)
}

/// Creates a temp directory with custom settings.ini content.
pub fn temp_project_with_settings(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.ini"), content).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = temp_project();
/// create_tree(tmp.path(), &[
///     ("nbs/00_core.ipynb", "{}"),
///     ("mylib/core.py", ""),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
