use std::path::PathBuf;

/// nbkit error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No settings file in the start directory or any ancestor.
    #[error(
        "{cfg_name} not found in {} or any parent directory\n  Use `nbkit init` (or `create_config`) to create one first.",
        .start.display()
    )]
    NotFound { cfg_name: String, start: PathBuf },

    /// Lookup of a key the settings file does not define.
    #[error("key not found: {key} (in {})", .path.display())]
    MissingKey { key: String, path: PathBuf },

    /// Malformed settings file.
    #[error("parse error: {}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Bad `%(name)s` reference or stray `%` in a value.
    #[error("interpolation error in `{key}`: {message}")]
    Interpolation { key: String, message: String },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type using nbkit Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes for the nbkit binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Settings file missing or invalid, unknown key, bad arguments
    ConfigError = 2,
    /// I/O failure or bug
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::NotFound { .. }
            | Error::MissingKey { .. }
            | Error::Parse { .. }
            | Error::Interpolation { .. }
            | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
