//! Project settings and test-assertion helpers for a notebook authoring
//! toolchain.
//!
//! - [`settings::Settings`] finds `settings.ini` by walking up from the
//!   working directory and gives typed access to its keys.
//! - [`cache`] shares loaded settings process-wide, keyed by file path.
//! - [`init::create_config`] writes a fresh settings file.
//! - [`check`] holds `check_raises`, `check_is_near` and `check_equals`.

pub mod cache;
pub mod check;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod ini;
pub mod init;
pub mod interp;
pub mod settings;

pub use cache::{SettingsCache, SharedSettings};
pub use check::{CheckFailure, check_equals, check_is_near, check_raises};
pub use error::{Error, ExitCode, Result};
pub use ini::{read_config_file, save_config_file};
pub use init::{InitOptions, create_config};
pub use settings::{Setting, Settings};

#[cfg(test)]
pub mod test_utils;
