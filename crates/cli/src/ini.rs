// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-section INI codec.
//!
//! Settings files hold one `[DEFAULT]` section of `key = value` lines:
//!
//! ```text
//! [DEFAULT]
//! lib_name = mylib
//! git_url = https://github.com/%(user)s/data_lab/tree/%(branch)s/
//! ```
//!
//! Keys are case-insensitive and stored lowercased. `key: value` is also
//! accepted, as are `#`/`;` comment lines and indented continuation lines.
//! Blank lines between continuation lines stay part of the value. Keys from
//! any other section are skipped.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::interp;

/// Name of the only section that is read and written.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Flat key-value mapping in file order.
pub type Values = IndexMap<String, String>;

/// Read and parse a settings file.
pub fn read_config_file(path: &Path) -> Result<Values> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content, path)
}

/// Overwrite `path` with `values` as a `[DEFAULT]` section.
pub fn save_config_file(path: &Path, values: &Values) -> Result<()> {
    for (key, value) in values {
        validate_key(&normalize_key(key))?;
        interp::validate(key, value)?;
    }
    std::fs::write(path, render(values)).map_err(|e| Error::io(path, e))?;
    tracing::debug!("wrote {} keys to {}", values.len(), path.display());
    Ok(())
}

/// Normalize a key the way the parser stores it.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Normalize a value the way it reads back from a file: every line
/// trimmed, trailing blank lines dropped.
pub fn normalize_value(value: &str) -> String {
    let lines: Vec<&str> = value.split('\n').map(str::trim).collect();
    lines.join("\n").trim_end_matches('\n').to_string()
}

/// Reject keys that would not parse back as the same key once written.
///
/// `key` is expected to be normalized already.
pub fn validate_key(key: &str) -> Result<()> {
    let problem = if key.is_empty() {
        "must not be empty"
    } else if key.contains(['\n', '\r']) {
        "must be a single line"
    } else if key.contains(['=', ':']) {
        "must not contain `=` or `:`"
    } else if key.starts_with(['[', '#', ';']) {
        "must not start with `[`, `#` or `;`"
    } else {
        return Ok(());
    };
    Err(Error::Argument(format!("settings key {key:?} {problem}")))
}

enum Section {
    None,
    Default,
    Other(String),
}

/// Parse settings file content. `path` only labels errors.
pub fn parse(content: &str, path: &Path) -> Result<Values> {
    let mut values = Values::new();
    let mut section = Section::None;
    // Key of the value that indented lines continue, with its indent.
    let mut open: Option<(String, usize)> = None;
    // Blank lines seen since the last line of the open value.
    let mut blank_run = 0;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            if open.is_some() {
                blank_run += 1;
            }
            continue;
        }

        let indent = raw.len() - raw.trim_start().len();
        if let Some((key, key_indent)) = &open
            && indent > *key_indent
        {
            if let Section::Default = section
                && let Some(value) = values.get_mut(key)
            {
                for _ in 0..=blank_run {
                    value.push('\n');
                }
                value.push_str(trimmed);
            }
            blank_run = 0;
            continue;
        }
        open = None;
        blank_run = 0;

        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            section = if header == DEFAULT_SECTION {
                Section::Default
            } else {
                tracing::debug!("{}: skipping section [{}]", path.display(), header);
                Section::Other(header.to_string())
            };
            continue;
        }

        let Some(delim) = trimmed.find(['=', ':']) else {
            return Err(parse_error(path, line_no, "expected `key = value`"));
        };
        let key = normalize_key(&trimmed[..delim]);
        let value = trimmed[delim + 1..].trim().to_string();
        if key.is_empty() {
            return Err(parse_error(path, line_no, "empty key"));
        }

        match &section {
            Section::None => {
                return Err(parse_error(
                    path,
                    line_no,
                    "key outside of any section (expected [DEFAULT] first)",
                ));
            }
            Section::Other(name) => {
                tracing::trace!("{}: ignoring [{}] {}", path.display(), name, key);
            }
            Section::Default => {
                if values.contains_key(&key) {
                    return Err(parse_error(
                        path,
                        line_no,
                        &format!("duplicate key `{key}`"),
                    ));
                }
                values.insert(key.clone(), value);
            }
        }
        open = Some((key, indent));
    }

    Ok(values)
}

/// Render `values` as a settings file.
pub fn render(values: &Values) -> String {
    let mut out = format!("[{DEFAULT_SECTION}]\n");
    for (key, value) in values {
        out.push_str(&normalize_key(key));
        out.push_str(" = ");
        out.push_str(&value.replace('\n', "\n\t"));
        out.push('\n');
    }
    out.push('\n');
    out
}

fn parse_error(path: &Path, line: usize, message: &str) -> Error {
    Error::Parse {
        path: path.to_path_buf(),
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
#[path = "ini_tests.rs"]
mod tests;
