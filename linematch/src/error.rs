//! Linematch Error Types
//!
//! This module defines the error enums returned by the loader, the options layer and the
//! verification entry point. Drift itself is not an error of the matcher (the matcher returns a
//! [`MatchOutcome`](crate::types::MatchOutcome)); it only becomes [`VerifyError::Drift`] at the
//! entry point, so callers can tell "could not run the check" apart from "found drift".
//!
//! # Example
//!
//! ```rust
//! use linematch::error::VerifyError;
//!
//! fn exit_code(result: Result<(), VerifyError>) -> i32 {
//!     match result {
//!         Ok(()) => 0,
//!         Err(VerifyError::Drift(_)) => 1,
//!         Err(_) => 2,
//!     }
//! }
//! ```

use crate::report::FailureReport;
use std::path::PathBuf;

/// An artifact could not be read. Always fatal for the run; never retried.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("File unreadable: {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {} ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("File is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),
}

/// Match options could not be loaded or are inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("Failed to read options file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid options JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid option `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Result of [`verify`](crate::verify) when it does not succeed.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("{0}")]
    Drift(Box<FailureReport>),
}

impl VerifyError {
    /// True when the check ran and the documents diverged.
    pub fn is_drift(&self) -> bool {
        matches!(self, VerifyError::Drift(_))
    }
}
