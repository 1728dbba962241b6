// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expected-failure checks.

use std::any::{Any, type_name};
use std::error::Error;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::CheckFailure;

const DEFAULT_MESSAGE: &str = "Expected to raise, did not.";
const DEFAULT_PANIC_MESSAGE: &str = "Expected to panic, did not.";

/// Check that `f` returns an error of any type.
pub fn check_raises<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<(), CheckFailure>
where
    E: Error + Send + Sync + 'static,
{
    Raises::any().check(f)
}

/// Check that `f` panics.
pub fn check_panics<T>(f: impl FnOnce() -> T) -> Result<(), CheckFailure> {
    Panics::any().check(f)
}

/// Expectation that a block returns a particular kind of error.
///
/// An error matches when it, or any error in its `source()` chain, is the
/// expected type. The matching error is swallowed.
#[derive(Debug, Clone)]
pub struct Raises {
    expected: Option<&'static str>,
    matches: fn(&(dyn Error + 'static)) -> bool,
    message: Option<String>,
}

fn any_error(_: &(dyn Error + 'static)) -> bool {
    true
}

fn is_type<X: Error + 'static>(err: &(dyn Error + 'static)) -> bool {
    err.is::<X>()
}

impl Raises {
    /// Accept any error.
    pub fn any() -> Self {
        Self {
            expected: None,
            matches: any_error,
            message: None,
        }
    }

    /// Accept only errors of type `X` (directly or as a source).
    pub fn of<X: Error + 'static>() -> Self {
        Self {
            expected: Some(short_type_name(type_name::<X>())),
            matches: is_type::<X>,
            message: None,
        }
    }

    /// Message to fail with when `f` does not error.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Run `f` and check how it failed.
    ///
    /// A mismatched error becomes the failure's `source()`.
    pub fn check<T, E>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<(), CheckFailure>
    where
        E: Error + Send + Sync + 'static,
    {
        let err = match f() {
            Ok(_) => {
                let message = self.message.as_deref().unwrap_or(DEFAULT_MESSAGE);
                return Err(CheckFailure::new(message));
            }
            Err(err) => err,
        };

        let mut current: Option<&(dyn Error + 'static)> = Some(&err);
        while let Some(e) = current {
            if (self.matches)(e) {
                return Ok(());
            }
            current = e.source();
        }

        let expected = self.expected.unwrap_or("an error");
        Err(CheckFailure::caused_by(
            format!(
                "Expected to raise {expected}. Instead received {}",
                short_type_name(type_name::<E>())
            ),
            err,
        ))
    }
}

/// Expectation that a block panics, optionally with a message containing
/// some text.
///
/// The panic hook still runs, so expected panics are printed to stderr.
#[derive(Debug, Clone, Default)]
pub struct Panics {
    containing: Option<String>,
    message: Option<String>,
}

impl Panics {
    pub fn any() -> Self {
        Self::default()
    }

    /// Accept only panics whose message contains `text`.
    pub fn containing(text: impl Into<String>) -> Self {
        Self {
            containing: Some(text.into()),
            message: None,
        }
    }

    /// Message to fail with when `f` does not panic.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn check<T>(&self, f: impl FnOnce() -> T) -> Result<(), CheckFailure> {
        let payload = match catch_unwind(AssertUnwindSafe(f)) {
            Ok(_) => {
                let message = self.message.as_deref().unwrap_or(DEFAULT_PANIC_MESSAGE);
                return Err(CheckFailure::new(message));
            }
            Err(payload) => payload,
        };

        let Some(expected) = &self.containing else {
            return Ok(());
        };
        let actual = panic_message(payload.as_ref());
        if actual.contains(expected.as_str()) {
            Ok(())
        } else {
            Err(CheckFailure::new(format!(
                "Expected to panic with {expected:?}. Instead panicked with {actual:?}"
            )))
        }
    }
}

/// `std::num::ParseIntError` -> `ParseIntError`; generic arguments are dropped.
fn short_type_name(full: &'static str) -> &'static str {
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
#[path = "raises_tests.rs"]
mod tests;
