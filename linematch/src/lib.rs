//! # Linematch Library
//!
//! This crate checks that a versioned reference document and a freshly generated one still agree,
//! line by line. It is meant to run as a build-time guard: when the generator's output drifts
//! from the committed copy, verification fails with a precise, positional report.
//!
//! ## Key Concepts
//! - **Expected lines** come from the reference document. Each is a literal, a full-line regex
//!   (tried only when the literal comparison fails), or a fast-forward marker that skips lines
//!   whose content legitimately varies.
//! - **SequenceMatcher**: the one-pass, fail-fast alignment of expected against actual lines.
//! - **DiagnosticReporter**: renders the first divergence with line numbers and context.
//! - **VerificationJob**: loader → matcher → reporter for two files on disk.
//!
//! ## Example
//!
//! ```rust
//! use linematch::{verify_text, MatchOptions};
//!
//! let reference = "= Options\n:generated: \\d{4}-\\d{2}-\\d{2}\n>> >>\n";
//! let generated = "= Options\n:generated: 2026-10-18\n| port | 8082\n";
//! assert!(verify_text(reference, generated, &MatchOptions::default()).is_ok());
//! ```

pub mod classifier;
pub mod comparators;
pub mod error;
pub mod matcher;
pub mod options;
pub mod report;
pub mod traits;
pub mod types;
pub mod utilities;

pub use crate::error::{LoadError, OptionsError, VerifyError};
pub use crate::matcher::SequenceMatcher;
pub use crate::options::MatchOptions;
pub use crate::report::{DiagnosticReporter, FailureReport, ReportResponse};
pub use crate::types::{LineSequence, MatchOutcome, MatchSummary};

use crate::utilities::file_loader::load_lines;
use std::path::{Path, PathBuf};
use tracing::info;

/// A verification of one generated document against its versioned reference.
///
/// # Fields
/// - `expected`: path of the reference document (may contain patterns and markers).
/// - `actual`: path of the generated document.
/// - `options`: marker syntax, context size and loader limits.
pub struct VerificationJob {
    expected: PathBuf,
    actual: PathBuf,
    options: MatchOptions,
}

impl VerificationJob {
    /// Create a job with default [`MatchOptions`].
    pub fn new(expected: impl Into<PathBuf>, actual: impl Into<PathBuf>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
            options: MatchOptions::default(),
        }
    }

    /// Replace the match options for this job.
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the verification.
    ///
    /// # Returns
    /// * `Ok(MatchSummary)` when the documents agree.
    /// * `Err(VerifyError::Load)` / `Err(VerifyError::Options)` when the check could not run.
    /// * `Err(VerifyError::Drift)` with the rendered report when the documents diverge.
    ///
    /// # Steps
    /// 1. Validates the options.
    /// 2. Loads both documents (fatal on any read problem).
    /// 3. Aligns them with the [`SequenceMatcher`].
    /// 4. Builds a [`FailureReport`] for the first divergence, if any.
    pub fn run(self) -> Result<MatchSummary, VerifyError> {
        self.options.validate()?;

        let expected = load_lines(&self.expected, self.options.max_file_size)?;
        let actual = load_lines(&self.actual, self.options.max_file_size)?;

        let reporter = self
            .options
            .reporter()
            .with_sources(display_name(&self.expected), display_name(&self.actual));

        let summary = check(&expected, &actual, &self.options, &reporter)?;
        info!(
            expected = %self.expected.display(),
            actual = %self.actual.display(),
            literal = summary.literal_lines,
            pattern = summary.pattern_lines,
            skipped = summary.skipped_lines,
            "documentation is up to date"
        );
        Ok(summary)
    }
}

/// Verifies `actual_path` against `expected_path` with default options.
///
/// # Errors
///
/// [`VerifyError::Load`] if either file cannot be read, [`VerifyError::Drift`] if they diverge.
pub fn verify(
    expected_path: impl AsRef<Path>,
    actual_path: impl AsRef<Path>,
) -> Result<(), VerifyError> {
    VerificationJob::new(expected_path.as_ref(), actual_path.as_ref())
        .run()
        .map(|_| ())
}

/// Verifies in-memory documents. Line endings are normalized as by the loader.
///
/// # Errors
///
/// [`VerifyError::Options`] for invalid options, [`VerifyError::Drift`] on divergence.
pub fn verify_text(
    expected: &str,
    actual: &str,
    options: &MatchOptions,
) -> Result<MatchSummary, VerifyError> {
    options.validate()?;
    check(
        &LineSequence::from_text(expected),
        &LineSequence::from_text(actual),
        options,
        &options.reporter(),
    )
}

/// Aligns two sequences with default options.
pub fn match_lines(expected: &LineSequence, actual: &LineSequence) -> MatchOutcome {
    SequenceMatcher::default().match_lines(expected, actual)
}

fn check(
    expected: &LineSequence,
    actual: &LineSequence,
    options: &MatchOptions,
    reporter: &DiagnosticReporter,
) -> Result<MatchSummary, VerifyError> {
    let matcher = SequenceMatcher::new(options.classifier());
    match matcher.match_lines(expected, actual) {
        MatchOutcome::Success(summary) => Ok(summary),
        MatchOutcome::Failure(failure) => {
            let report = reporter.report(&failure, expected, actual, matcher.classifier());
            Err(VerifyError::Drift(Box::new(report)))
        }
    }
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}
