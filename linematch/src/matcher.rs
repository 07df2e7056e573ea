//! # Sequence Matcher
//!
//! Two-pointer, expected-driven alignment of an expected [`LineSequence`] against an actual one.
//!
//! Each step either consumes an expected line together with an actual line, consumes a
//! fast-forward marker while moving the actual cursor forward, or stops with a [`Failure`]. Both
//! cursors only move forward, so a run takes at most `expected.len() + actual.len()` steps.
//!
//! Fast-forward resolution is greedy-forward and lazy: an unlimited marker stops at the first
//! actual line accepted by the next expected line and never reconsiders a later position. This
//! is a one-pass scanner for documents that are stable apart from known variable regions, not a
//! general alignment solver.

use crate::classifier::PatternClassifier;
use crate::types::{
    ExpectedLine, Failure, FailureReason, FastForwardLimit, LineSequence, MatchCursor,
    MatchOutcome, MatchSummary,
};
use tracing::{debug, trace};

/// Runs the alignment. Holds no per-run state, so one matcher can serve any number of runs.
#[derive(Debug, Default)]
pub struct SequenceMatcher {
    classifier: PatternClassifier,
}

impl SequenceMatcher {
    pub fn new(classifier: PatternClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &PatternClassifier {
        &self.classifier
    }

    /// Aligns `expected` against `actual` and returns the verdict.
    pub fn match_lines(&self, expected: &LineSequence, actual: &LineSequence) -> MatchOutcome {
        let mut cursor = MatchCursor::default();
        let mut summary = MatchSummary::default();

        while let Some(line) = expected.get(cursor.expected_index) {
            match self.classifier.classify(line, actual.get(cursor.actual_index)) {
                ExpectedLine::FastForward(FastForwardLimit::Unlimited) => {
                    let next_index = cursor.expected_index + 1;
                    let Some(next) = expected.get(next_index) else {
                        let rest = actual.len() - cursor.actual_index;
                        debug!(
                            expected_line = cursor.expected_index + 1,
                            skipped = rest,
                            "trailing fast-forward consumes remaining actual lines"
                        );
                        summary.skipped_lines += rest;
                        return MatchOutcome::Success(summary);
                    };

                    if self.classifier.fast_forward(next).is_some() {
                        cursor.expected_index = next_index;
                        continue;
                    }

                    let start = cursor.actual_index;
                    match self.seek(next, actual, start) {
                        Some(found) => {
                            debug!(
                                expected_line = next_index + 1,
                                actual_line = found + 1,
                                skipped = found - start,
                                "fast-forward realigned"
                            );
                            summary.skipped_lines += found - start;
                            cursor.actual_index = found;
                            cursor.expected_index = next_index;
                        }
                        None => {
                            return fail(next_index, start, FailureReason::FastForwardTargetNeverMatched);
                        }
                    }
                }
                ExpectedLine::FastForward(FastForwardLimit::Exactly(count)) => {
                    let remaining = actual.len() - cursor.actual_index;
                    if remaining < count {
                        return fail(
                            cursor.expected_index,
                            cursor.actual_index,
                            FailureReason::CountedFastForwardOverrun,
                        );
                    }
                    trace!(expected_line = cursor.expected_index + 1, count, "counted fast-forward");
                    summary.skipped_lines += count;
                    cursor.actual_index += count;
                    cursor.expected_index += 1;
                }
                ExpectedLine::Literal(text) => {
                    let Some(actual_line) = actual.get(cursor.actual_index) else {
                        return fail(
                            cursor.expected_index,
                            cursor.actual_index,
                            FailureReason::ActualExhausted,
                        );
                    };
                    if text != actual_line {
                        return fail(
                            cursor.expected_index,
                            cursor.actual_index,
                            FailureReason::LineMismatch,
                        );
                    }
                    summary.literal_lines += 1;
                    cursor.advance_both();
                }
                ExpectedLine::Pattern(_, re) => {
                    let Some(actual_line) = actual.get(cursor.actual_index) else {
                        return fail(
                            cursor.expected_index,
                            cursor.actual_index,
                            FailureReason::ActualExhausted,
                        );
                    };
                    if !re.is_match(actual_line) {
                        return fail(
                            cursor.expected_index,
                            cursor.actual_index,
                            FailureReason::LineMismatch,
                        );
                    }
                    summary.pattern_lines += 1;
                    cursor.advance_both();
                }
            }
        }

        if cursor.actual_index < actual.len() {
            return fail(
                cursor.expected_index,
                cursor.actual_index,
                FailureReason::UnmatchedTrailingLines,
            );
        }

        MatchOutcome::Success(summary)
    }

    /// First index at or after `from` whose actual line satisfies `target`.
    fn seek(&self, target: &str, actual: &LineSequence, from: usize) -> Option<usize> {
        (from..actual.len()).find(|&i| {
            actual
                .get(i)
                .is_some_and(|line| self.classifier.resolve(target, line).is_some())
        })
    }
}

fn fail(expected_index: usize, actual_index: usize, reason: FailureReason) -> MatchOutcome {
    debug!(
        expected_line = expected_index + 1,
        actual_line = actual_index + 1,
        %reason,
        "match failed"
    );
    MatchOutcome::Failure(Failure {
        expected_index,
        actual_index,
        reason,
    })
}
