// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `%(name)s` value interpolation.
//!
//! Values may reference other keys of the same section. `%%` is a literal
//! percent sign; any other `%` is an error.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Maximum nesting of references before giving up (catches cycles).
pub const MAX_DEPTH: usize = 10;

/// Expand references in `value` against `values`.
///
/// `key` only labels errors.
pub fn interpolate(key: &str, value: &str, values: &IndexMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    expand(key, value, values, 1, &mut out)?;
    Ok(out)
}

/// Reject values that could never be interpolated.
pub fn validate(key: &str, value: &str) -> Result<()> {
    let mut rest = value;
    while let Some(idx) = rest.find('%') {
        let after = &rest[idx + 1..];
        if let Some(tail) = after.strip_prefix('%') {
            rest = tail;
        } else if let Some((_, tail)) = reference(after) {
            rest = tail;
        } else {
            return Err(invalid_syntax(key, &rest[idx..]));
        }
    }
    Ok(())
}

fn expand(
    key: &str,
    value: &str,
    values: &IndexMap<String, String>,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::Interpolation {
            key: key.to_string(),
            message: format!("recursion limit exceeded (more than {MAX_DEPTH} levels)"),
        });
    }

    let mut rest = value;
    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];

        if let Some(tail) = after.strip_prefix('%') {
            out.push('%');
            rest = tail;
            continue;
        }

        let Some((name, tail)) = reference(after) else {
            return Err(invalid_syntax(key, &rest[idx..]));
        };
        let name = name.to_lowercase();
        let Some(target) = values.get(&name) else {
            return Err(Error::Interpolation {
                key: key.to_string(),
                message: format!("no key named `{name}` to substitute"),
            });
        };
        if target.contains('%') {
            expand(key, target, values, depth + 1, out)?;
        } else {
            out.push_str(target);
        }
        rest = tail;
    }
    out.push_str(rest);
    Ok(())
}

/// Match `(name)s` at the start of `s`, returning the name and the remainder.
fn reference(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_prefix('(')?;
    let close = inner.find(')')?;
    let name = &inner[..close];
    if name.is_empty() {
        return None;
    }
    let tail = inner[close + 1..].strip_prefix('s')?;
    Some((name, tail))
}

fn invalid_syntax(key: &str, at: &str) -> Error {
    Error::Interpolation {
        key: key.to_string(),
        message: format!("'%' must be followed by '%' or '(name)s', found: {at:?}"),
    }
}

#[cfg(test)]
#[path = "interp_tests.rs"]
mod tests;
