//!
//! File Loader Utility
//!
//! This module loads the two artifacts of a verification run (the versioned reference document
//! and the freshly generated one) into [`LineSequence`]s.
//!
//! # Functionality
//!
//! - Checks that the path exists, is a regular file and does not exceed the size limit.
//! - Reads the content as UTF-8, strips a leading byte-order mark and splits it into lines.
//!
//! # Error Handling
//!
//! Every failure is a [`LoadError`]. The specific cause (path plus OS error) is also logged at
//! `error` level, since a missing generated file usually means the generator step never ran.

use crate::error::LoadError;
use crate::types::LineSequence;
use crate::utilities::line_normalization::strip_bom;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, error};

/// Checks that a file exists, is a file, and does not exceed `max_size` bytes.
fn check_file(path: &Path, max_size: u64) -> Result<(), LoadError> {
    let metadata = fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            error!("File not found: {}", path.display());
            LoadError::NotFound(path.to_path_buf())
        } else {
            error!("File unreadable: {} - {}", path.display(), e);
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if !metadata.is_file() {
        error!("Not a file: {}", path.display());
        return Err(LoadError::NotAFile(path.to_path_buf()));
    }

    if metadata.len() > max_size {
        error!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            max_size
        );
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: max_size,
        });
    }

    Ok(())
}

/// Loads one artifact as a [`LineSequence`].
///
/// # Errors
///
/// Returns [`LoadError`] when the file is missing, not a regular file, larger than `max_size`,
/// unreadable, or not valid UTF-8.
pub fn load_lines(path: &Path, max_size: u64) -> Result<LineSequence, LoadError> {
    check_file(path, max_size)?;

    let bytes = fs::read(path).map_err(|e| {
        error!("Failed to read {}: {}", path.display(), e);
        LoadError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        error!("Invalid UTF-8 in {}: {}", path.display(), e);
        LoadError::InvalidUtf8(path.to_path_buf())
    })?;

    let lines = LineSequence::from_text(strip_bom(&text));
    debug!(path = %path.display(), lines = lines.len(), "loaded artifact");
    Ok(lines)
}
