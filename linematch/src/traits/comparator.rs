/// LineComparator is a strategy trait for deciding whether one expected line accepts one actual
/// line. The classifier chains implementations in order, so a cheaper, stricter comparator can
/// short-circuit a more permissive one.
pub trait LineComparator {
    /// Returns true when `actual` satisfies `expected`.
    ///
    /// - `expected`: the raw text of the line from the reference document.
    /// - `actual`: the raw text of the line from the generated document.
    fn compare(&self, expected: &str, actual: &str) -> bool;
}
