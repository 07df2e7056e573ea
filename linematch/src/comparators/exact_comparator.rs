//! A comparator that accepts an actual line only when it is character-for-character identical to
//! the expected line.
//!
//! This is the first tier of the literal-first/regex-fallback rule: documentation lines are
//! overwhelmingly literal, and a line containing `.`, `*` or `(` must still match itself even if
//! it would also be a syntactically valid regex.

use crate::traits::comparator::LineComparator;

/// Exact string equality. No trimming, no case folding.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactComparator;

impl LineComparator for ExactComparator {
    fn compare(&self, expected: &str, actual: &str) -> bool {
        expected == actual
    }
}
