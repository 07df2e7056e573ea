use crate::classifier::{
    DEFAULT_FAST_FORWARD_DELIMITER, DEFAULT_FAST_FORWARD_MARKER, FastForwardSyntax,
    PatternClassifier,
};
use crate::error::OptionsError;
use crate::report::{DEFAULT_CONTEXT_LINES, DiagnosticReporter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Knobs of one verification run. Every field has a default, so `{}` is a valid options file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchOptions {
    /// Whole-line token meaning "skip to the next anchor".
    #[serde(default = "default_fast_forward_marker")]
    pub fast_forward_marker: String,

    /// Delimiter of the `>> N >>` / `>> comment >>` form. `null` disables it.
    #[serde(default = "default_fast_forward_delimiter")]
    pub fast_forward_delimiter: Option<String>,

    /// Lines of context shown on each side of a failure.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Largest artifact the loader accepts, in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_fast_forward_marker() -> String {
    DEFAULT_FAST_FORWARD_MARKER.to_string()
}

fn default_fast_forward_delimiter() -> Option<String> {
    Some(DEFAULT_FAST_FORWARD_DELIMITER.to_string())
}

fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}

fn default_max_file_size() -> u64 {
    8 * 1024 * 1024 // 8MB
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            fast_forward_marker: default_fast_forward_marker(),
            fast_forward_delimiter: default_fast_forward_delimiter(),
            context_lines: default_context_lines(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl MatchOptions {
    /// Reads options from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] if the file cannot be read, is not valid JSON, or fails
    /// [`validate`](Self::validate).
    pub fn from_json_file(path: &Path) -> Result<Self, OptionsError> {
        let raw = fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options: MatchOptions = serde_json::from_str(&raw)?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects markers that would turn every line, or no line, into a fast-forward.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.fast_forward_marker.is_empty() {
            return Err(OptionsError::Invalid {
                field: "fast_forward_marker",
                message: "must not be empty".to_string(),
            });
        }
        if self.fast_forward_marker.contains('\n') {
            return Err(OptionsError::Invalid {
                field: "fast_forward_marker",
                message: "must be a single line".to_string(),
            });
        }
        if let Some(delim) = &self.fast_forward_delimiter {
            if delim.is_empty() || delim.contains('\n') {
                return Err(OptionsError::Invalid {
                    field: "fast_forward_delimiter",
                    message: "must be a non-empty single-line string or null".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn syntax(&self) -> FastForwardSyntax {
        FastForwardSyntax::new(
            self.fast_forward_marker.clone(),
            self.fast_forward_delimiter.clone(),
        )
    }

    pub fn classifier(&self) -> PatternClassifier {
        PatternClassifier::new(self.syntax())
    }

    pub fn reporter(&self) -> DiagnosticReporter {
        DiagnosticReporter::new(self.context_lines)
    }
}
