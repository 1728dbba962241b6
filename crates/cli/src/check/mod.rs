// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion helpers for example and test code.
//!
//! Every helper returns `Result<(), CheckFailure>`, so a test body can use
//! `?` or `.unwrap()`:
//!
//! ```
//! use nbkit::check::{Raises, check_equals, check_is_near};
//!
//! check_equals(&[1, 2, 3], &[1.0, 2.0, 3.0]).unwrap();
//! check_is_near(&0.1_f64, &(0.3_f64 - 0.2)).unwrap();
//! Raises::of::<std::num::ParseIntError>()
//!     .check(|| "x".parse::<i32>())
//!     .unwrap();
//! ```

mod near;
mod raises;

pub use near::{ArrayLike, Element, Near, Tolerance, check_equals, check_is_near};
pub use raises::{Panics, Raises, check_panics, check_raises};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failed check.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CheckFailure {
    message: String,
    /// Error that made the check fail, when there was one.
    #[source]
    source: Option<BoxError>,
}

impl CheckFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn caused_by(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
