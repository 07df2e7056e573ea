//! # Pattern Classifier
//!
//! Decides what an expected line means: a fast-forward marker, a literal, or a full-line regex.
//!
//! Fast-forward detection looks only at the expected line. Literal vs pattern is resolved
//! relative to the actual line it is compared with, literal first: the regex tier is consulted
//! only after exact equality has failed, so a documentation line that happens to be a valid regex
//! still matches itself.
//!
//! Fast-forward markers come in two forms:
//!
//! - the configured exact token (default `>> >>`), always unlimited;
//! - the delimited form `<delim> ... <delim>` (default delimiter `>>`). If the trimmed text
//!   between the delimiters is an integer `N` the marker skips exactly `N` lines
//!   (`>> 3 >>`); anything else is a comment and the marker is unlimited
//!   (`>> timestamps vary >>`).

use crate::comparators::exact_comparator::ExactComparator;
use crate::comparators::regex_comparator::RegexComparator;
use crate::traits::comparator::LineComparator;
use crate::types::{ExpectedLine, FastForwardLimit};

pub const DEFAULT_FAST_FORWARD_MARKER: &str = ">> >>";
pub const DEFAULT_FAST_FORWARD_DELIMITER: &str = ">>";

/// Recognizes fast-forward marker lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastForwardSyntax {
    marker: String,
    delimiter: Option<String>,
}

impl Default for FastForwardSyntax {
    fn default() -> Self {
        Self {
            marker: DEFAULT_FAST_FORWARD_MARKER.to_string(),
            delimiter: Some(DEFAULT_FAST_FORWARD_DELIMITER.to_string()),
        }
    }
}

impl FastForwardSyntax {
    /// `marker` must be non-empty; a `delimiter` of `None` disables the delimited form.
    pub fn new(marker: impl Into<String>, delimiter: Option<String>) -> Self {
        Self {
            marker: marker.into(),
            delimiter,
        }
    }

    /// Returns the skip limit when `line` is a fast-forward marker.
    pub fn parse(&self, line: &str) -> Option<FastForwardLimit> {
        if line == self.marker {
            return Some(FastForwardLimit::Unlimited);
        }

        let delim = self.delimiter.as_deref().filter(|d| !d.is_empty())?;
        if line.len() < 2 * delim.len() || !line.starts_with(delim) || !line.ends_with(delim) {
            return None;
        }

        let inner = line[delim.len()..line.len() - delim.len()].trim();
        match inner.parse::<usize>() {
            Ok(count) => Some(FastForwardLimit::Exactly(count)),
            Err(_) => Some(FastForwardLimit::Unlimited),
        }
    }
}

/// Which comparator tier accepted a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Literal,
    Pattern,
}

/// Classifies expected lines and resolves them against actual lines.
#[derive(Debug, Default)]
pub struct PatternClassifier {
    syntax: FastForwardSyntax,
    exact: ExactComparator,
    regex: RegexComparator,
}

impl PatternClassifier {
    pub fn new(syntax: FastForwardSyntax) -> Self {
        Self {
            syntax,
            exact: ExactComparator,
            regex: RegexComparator::new(),
        }
    }

    /// Returns the skip limit when `expected` is a fast-forward marker.
    pub fn fast_forward(&self, expected: &str) -> Option<FastForwardLimit> {
        self.syntax.parse(expected)
    }

    /// Classifies `expected` relative to the actual line at the cursor (`None` once the actual
    /// sequence is exhausted).
    ///
    /// A line equal to `actual` is a `Literal`. Otherwise a line that compiles is a `Pattern`,
    /// and one that does not is a `Literal` that will fail to match.
    pub fn classify<'e>(&self, expected: &'e str, actual: Option<&str>) -> ExpectedLine<'e> {
        if let Some(limit) = self.fast_forward(expected) {
            return ExpectedLine::FastForward(limit);
        }
        if actual.is_some_and(|a| self.exact.compare(expected, a)) {
            return ExpectedLine::Literal(expected);
        }
        match self.regex.compile(expected) {
            Ok(re) => ExpectedLine::Pattern(expected, re),
            Err(_) => ExpectedLine::Literal(expected),
        }
    }

    /// Literal-first/regex-fallback comparison of one expected line against one actual line.
    pub fn resolve(&self, expected: &str, actual: &str) -> Option<Resolution> {
        if self.exact.compare(expected, actual) {
            Some(Resolution::Literal)
        } else if self.regex.compare(expected, actual) {
            Some(Resolution::Pattern)
        } else {
            None
        }
    }

    /// The compile error for `expected`, when it is neither a marker nor a valid pattern.
    pub fn pattern_error(&self, expected: &str) -> Option<regex::Error> {
        if self.fast_forward(expected).is_some() {
            return None;
        }
        self.regex.compile(expected).err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> PatternClassifier {
        PatternClassifier::default()
    }

    #[test]
    fn test_default_marker_is_unlimited() {
        assert_eq!(
            classifier().fast_forward(">> >>"),
            Some(FastForwardLimit::Unlimited)
        );
    }

    #[test]
    fn test_counted_marker() {
        assert_eq!(
            classifier().fast_forward(">> 3 >>"),
            Some(FastForwardLimit::Exactly(3))
        );
        assert_eq!(
            classifier().fast_forward(">>0>>"),
            Some(FastForwardLimit::Exactly(0))
        );
    }

    #[test]
    fn test_comment_marker_is_unlimited() {
        assert_eq!(
            classifier().fast_forward(">> timestamps vary >>"),
            Some(FastForwardLimit::Unlimited)
        );
        assert_eq!(
            classifier().fast_forward(">> -2 >>"),
            Some(FastForwardLimit::Unlimited)
        );
    }

    #[test]
    fn test_short_or_one_sided_lines_are_not_markers() {
        let c = classifier();
        assert_eq!(c.fast_forward(">>>"), None);
        assert_eq!(c.fast_forward(">> text"), None);
        assert_eq!(c.fast_forward("text >>"), None);
        assert_eq!(c.fast_forward(" >> >>"), None);
    }

    #[test]
    fn test_custom_marker_without_delimiter() {
        let c = PatternClassifier::new(FastForwardSyntax::new("@@SKIP@@", None));
        assert_eq!(c.fast_forward("@@SKIP@@"), Some(FastForwardLimit::Unlimited));
        assert_eq!(c.fast_forward(">> >>"), None);
        assert_eq!(c.fast_forward(">> 2 >>"), None);
    }

    #[test]
    fn test_custom_delimiter() {
        let c = PatternClassifier::new(FastForwardSyntax::new("...", Some("~~".to_string())));
        assert_eq!(c.fast_forward("..."), Some(FastForwardLimit::Unlimited));
        assert_eq!(c.fast_forward("~~ 4 ~~"), Some(FastForwardLimit::Exactly(4)));
    }

    #[test]
    fn test_classify_literal_first() {
        let c = classifier();
        // Valid regex that would not match itself ("a.b+" matches "axb", "a.bb", not "a.b+").
        match c.classify("a.b+", Some("a.b+")) {
            ExpectedLine::Literal(text) => assert_eq!(text, "a.b+"),
            other => panic!("expected Literal, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_pattern_fallback() {
        match classifier().classify(r"v1\.2\.\d+", Some("v1.2.45")) {
            ExpectedLine::Pattern(text, re) => {
                assert_eq!(text, r"v1\.2\.\d+");
                assert!(re.is_match("v1.2.45"));
            }
            other => panic!("expected Pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_invalid_pattern_is_literal() {
        match classifier().classify("[unclosed", Some("x")) {
            ExpectedLine::Literal(text) => assert_eq!(text, "[unclosed"),
            other => panic!("expected Literal, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_marker_ignores_actual() {
        assert!(classifier().classify(">> >>", Some(">> >>")).is_fast_forward());
    }

    #[test]
    fn test_resolve_tiers() {
        let c = classifier();
        assert_eq!(c.resolve("a*", "a*"), Some(Resolution::Literal));
        assert_eq!(c.resolve("a*", "aaa"), Some(Resolution::Pattern));
        assert_eq!(c.resolve("a*", "b"), None);
        assert_eq!(c.resolve("(", "x"), None);
    }

    #[test]
    fn test_pattern_error() {
        let c = classifier();
        assert!(c.pattern_error("(unclosed").is_some());
        assert!(c.pattern_error("plain text").is_none());
        assert!(c.pattern_error(">> >>").is_none());
    }
}
