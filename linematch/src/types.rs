//! # Types Module
//!
//! This module defines the core data structures shared by the classifier, the matcher and the
//! reporter: the immutable [`LineSequence`], the per-line [`ExpectedLine`] classification, the
//! [`MatchCursor`] that walks both sequences, and the terminal [`MatchOutcome`].

use regex::Regex;
use serde::Serialize;
use std::fmt;

/// An ordered, immutable sequence of text lines representing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Wraps already-split lines. No normalization is applied.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Splits `text` on `\n`, `\r\n` and `\r`, the way generated documentation is read from disk.
    ///
    /// A trailing newline does not produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: crate::utilities::line_normalization::split_lines(text),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LineSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// How many actual lines a fast-forward marker may skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastForwardLimit {
    /// Skip until the next expected line matches (or consume everything when trailing).
    Unlimited,
    /// Skip exactly this many actual lines.
    Exactly(usize),
}

/// One expected line, classified relative to the actual line it is compared with.
#[derive(Debug, Clone)]
pub enum ExpectedLine<'e> {
    /// Compared by exact string equality.
    Literal(&'e str),
    /// Compiled full-line regular expression.
    Pattern(&'e str, Regex),
    /// "Skip to the next anchor" marker.
    FastForward(FastForwardLimit),
}

impl ExpectedLine<'_> {
    pub fn is_fast_forward(&self) -> bool {
        matches!(self, ExpectedLine::FastForward(_))
    }
}

/// Positions in the expected and actual sequences. Both only ever move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchCursor {
    pub expected_index: usize,
    pub actual_index: usize,
}

impl MatchCursor {
    pub fn advance_both(&mut self) {
        self.expected_index += 1;
        self.actual_index += 1;
    }
}

/// Why a verification run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    LineMismatch,
    ActualExhausted,
    FastForwardTargetNeverMatched,
    CountedFastForwardOverrun,
    UnmatchedTrailingLines,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureReason::LineMismatch => "line mismatch",
            FailureReason::ActualExhausted => {
                "actual sequence exhausted before expected sequence"
            }
            FailureReason::FastForwardTargetNeverMatched => "fast-forward target never matched",
            FailureReason::CountedFastForwardOverrun => {
                "actual sequence exhausted during counted fast-forward"
            }
            FailureReason::UnmatchedTrailingLines => {
                "actual sequence has unmatched trailing lines"
            }
        };
        f.write_str(text)
    }
}

/// Position and cause of the first divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub expected_index: usize,
    pub actual_index: usize,
    pub reason: FailureReason,
}

/// Counts collected during a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// Expected lines that equalled their actual line.
    pub literal_lines: usize,
    /// Expected lines that matched as a full-line regex.
    pub pattern_lines: usize,
    /// Actual lines passed over by fast-forward markers.
    pub skipped_lines: usize,
}

/// Terminal result of one matcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Success(MatchSummary),
    Failure(Failure),
}

impl MatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MatchOutcome::Success(_))
    }

}
