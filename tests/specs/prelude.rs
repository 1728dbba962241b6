//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the nbkit binary against temp projects.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the nbkit binary
pub fn nbkit_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nbkit"));
    cmd.env_remove("NBKIT_CONFIG")
        .env_remove("NBKIT_CFG_NAME")
        .env_remove("NBKIT_LOG");
    cmd
}

/// Settings name no ancestor of a temp dir will have.
pub const ABSENT_CFG_NAME: &str = "nbkit-specs-absent-3c1e.ini";

/// Settings used by [`Project::with_settings`].
pub const MINIMAL_SETTINGS: &str = "\
[DEFAULT]
lib_name = mylib
user = alice
branch = master
git_url = https://github.com/%(user)s/data_lab/tree/%(branch)s/
lib_path = %(lib_name)s
nbs_path = nbs
";

/// Temporary project directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project with [`MINIMAL_SETTINGS`] in settings.ini
    pub fn with_settings() -> Self {
        let temp = Self::empty();
        temp.settings(MINIMAL_SETTINGS);
        temp
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write settings.ini
    pub fn settings(&self, content: &str) {
        self.file("settings.ini", content);
    }

    /// Read settings.ini
    pub fn read_settings(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("settings.ini")).unwrap()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Create a directory (and parents) inside the project
    pub fn dir(&self, path: impl AsRef<Path>) -> std::path::PathBuf {
        let full_path = self.dir.path().join(path.as_ref());
        std::fs::create_dir_all(&full_path).unwrap();
        full_path
    }
}
