//! # Drift Report Module
//!
//! This module turns a matcher [`Failure`] into a [`FailureReport`]: 1-based line numbers in both
//! documents, the two offending lines, a window of surrounding context and explanatory notes. The
//! report renders as plain text through [`Display`](std::fmt::Display) and serializes to JSON
//! for machine consumers.
//!
//! ## JSON Output Example
//!
//! Wrapped in a [`ReportResponse`], a failure serializes as:
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Documentation drift detected.",
//!   "data": {
//!     "reason": "line_mismatch",
//!     "expected_line_number": 2,
//!     "actual_line_number": 2,
//!     "expected_text": "y",
//!     "actual_text": "z",
//!     ...
//!   }
//! }
//! ```
//!
//! ## Design Notes
//!
//! - Rendering never fails. Positions past the end of a document print as `<end of file>`.
//! - Notes are computed here rather than in the matcher, which keeps the matcher free of
//!   formatting concerns.

use crate::classifier::PatternClassifier;
use crate::types::{Failure, FailureReason, LineSequence, MatchSummary};
use serde::Serialize;
use std::fmt;

const END_OF_FILE: &str = "<end of file>";

/// Lines of context shown on each side of a failure unless configured otherwise.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

/// One line shown around the failure position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextLine {
    /// 1-based line number.
    pub line_number: usize,
    pub text: String,
    /// True for the line the failure points at.
    pub focus: bool,
}

/// Human- and machine-readable description of the first divergence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    pub reason: FailureReason,
    /// Display name of the reference document.
    pub expected_source: String,
    /// Display name of the generated document.
    pub actual_source: String,
    /// 1-based; one past the last line when the expected document was exhausted.
    pub expected_line_number: usize,
    /// 1-based; one past the last line when the actual document was exhausted.
    pub actual_line_number: usize,
    pub expected_text: Option<String>,
    pub actual_text: Option<String>,
    pub notes: Vec<String>,
    pub expected_context: Vec<ContextLine>,
    pub actual_context: Vec<ContextLine>,
}

/// Builds [`FailureReport`]s.
#[derive(Debug, Clone)]
pub struct DiagnosticReporter {
    context_lines: usize,
    expected_source: String,
    actual_source: String,
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LINES)
    }
}

impl DiagnosticReporter {
    /// `context_lines` is the number of lines shown on each side of the failure position.
    pub fn new(context_lines: usize) -> Self {
        Self {
            context_lines,
            expected_source: "expected".to_string(),
            actual_source: "actual".to_string(),
        }
    }

    /// Names used for the two documents in the rendered message (usually file names).
    pub fn with_sources(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected_source = expected.into();
        self.actual_source = actual.into();
        self
    }

    /// Describes `failure`, which must come from matching `expected` against `actual` with
    /// `classifier`.
    pub fn report(
        &self,
        failure: &Failure,
        expected: &LineSequence,
        actual: &LineSequence,
        classifier: &PatternClassifier,
    ) -> FailureReport {
        let expected_text = expected.get(failure.expected_index).map(str::to_string);
        let actual_text = actual.get(failure.actual_index).map(str::to_string);

        let mut notes = Vec::new();
        match failure.reason {
            FailureReason::LineMismatch => {
                if let Some(err) = expected_text.as_deref().and_then(|t| classifier.pattern_error(t))
                {
                    notes.push(format!(
                        "expected line is not a valid pattern: {}",
                        error_summary(&err.to_string())
                    ));
                }
            }
            FailureReason::ActualExhausted => {
                let missing = expected.len().saturating_sub(failure.expected_index);
                notes.push(format!(
                    "{} expected line(s) left with no actual line to match",
                    missing
                ));
            }
            FailureReason::FastForwardTargetNeverMatched => {
                notes.push(format!(
                    "no actual line from line {} to the end matches expected line {}",
                    failure.actual_index + 1,
                    failure.expected_index + 1
                ));
                if let Some(err) = expected_text.as_deref().and_then(|t| classifier.pattern_error(t))
                {
                    notes.push(format!(
                        "expected line is not a valid pattern: {}",
                        error_summary(&err.to_string())
                    ));
                }
            }
            FailureReason::CountedFastForwardOverrun => {
                notes.push(format!(
                    "only {} actual line(s) left to skip",
                    actual.len().saturating_sub(failure.actual_index)
                ));
            }
            FailureReason::UnmatchedTrailingLines => {
                notes.push(format!(
                    "{} unmatched trailing line(s); end the expected document with a fast-forward marker if they may vary",
                    actual.len().saturating_sub(failure.actual_index)
                ));
            }
        }

        FailureReport {
            reason: failure.reason,
            expected_source: self.expected_source.clone(),
            actual_source: self.actual_source.clone(),
            expected_line_number: failure.expected_index + 1,
            actual_line_number: failure.actual_index + 1,
            expected_text,
            actual_text,
            notes,
            expected_context: context_window(expected, failure.expected_index, self.context_lines),
            actual_context: context_window(actual, failure.actual_index, self.context_lines),
        }
    }
}

/// Lines `[focus - radius, focus + radius]` of `lines`, clamped to the document.
fn context_window(lines: &LineSequence, focus: usize, radius: usize) -> Vec<ContextLine> {
    let start = focus.saturating_sub(radius);
    let end = focus.saturating_add(radius).saturating_add(1).min(lines.len());
    (start..end)
        .filter_map(|i| {
            lines.get(i).map(|text| ContextLine {
                line_number: i + 1,
                text: text.to_string(),
                focus: i == focus,
            })
        })
        .collect()
}

/// Regex errors span several lines (pattern, caret, message); keep the message.
fn error_summary(message: &str) -> &str {
    match message.lines().rev().find(|l| l.starts_with("error:")) {
        Some(line) => line.trim_start_matches("error:").trim(),
        None => message.lines().next().unwrap_or(message),
    }
}

fn write_context(
    f: &mut fmt::Formatter<'_>,
    source: &str,
    context: &[ContextLine],
    focus_line: usize,
) -> fmt::Result {
    writeln!(f, "{}:", source)?;
    for line in context {
        let mark = if line.focus { ">" } else { " " };
        writeln!(f, "  {} {:>5} | {}", mark, line.line_number, line.text)?;
    }
    if !context.iter().any(|l| l.focus) {
        writeln!(f, "  > {:>5} | {}", focus_line, END_OF_FILE)?;
    }
    Ok(())
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "documentation drift: {} ({} vs {})",
            self.reason, self.expected_source, self.actual_source
        )?;
        writeln!(
            f,
            "  expected line {}: {}",
            self.expected_line_number,
            self.expected_text.as_deref().unwrap_or(END_OF_FILE)
        )?;
        writeln!(
            f,
            "  actual line {}:   {}",
            self.actual_line_number,
            self.actual_text.as_deref().unwrap_or(END_OF_FILE)
        )?;
        for note in &self.notes {
            writeln!(f, "  note: {}", note)?;
        }
        writeln!(f)?;
        write_context(
            f,
            &self.expected_source,
            &self.expected_context,
            self.expected_line_number,
        )?;
        write_context(
            f,
            &self.actual_source,
            &self.actual_context,
            self.actual_line_number,
        )
    }
}

/// Payload of a [`ReportResponse`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportData {
    Summary(MatchSummary),
    Failure(Box<FailureReport>),
}

/// The JSON envelope printed by the command line tool.
///
/// - `success`: true when the documents match.
/// - `message`: a one-line human-readable verdict.
/// - `data`: the [`MatchSummary`] on success, the [`FailureReport`] on drift.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    success: bool,
    message: String,
    data: ReportData,
}

impl From<MatchSummary> for ReportResponse {
    fn from(summary: MatchSummary) -> Self {
        ReportResponse {
            success: true,
            message: "Documentation is up to date.".to_string(),
            data: ReportData::Summary(summary),
        }
    }
}

impl From<FailureReport> for ReportResponse {
    fn from(report: FailureReport) -> Self {
        ReportResponse {
            success: false,
            message: "Documentation drift detected.".to_string(),
            data: ReportData::Failure(Box::new(report)),
        }
    }
}
