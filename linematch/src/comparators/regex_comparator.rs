//! A comparator that treats the expected line as a regular expression which must match the whole
//! actual line.
//!
//! The pattern is anchored at both ends, so `v1\.2\.\d+` accepts `v1.2.45` but not
//! `v1.2.45-rc1`. A line that does not compile never matches; compile errors are kept so the
//! reporter can explain them.

use crate::traits::comparator::LineComparator;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;

/// Full-line regex comparator with a per-instance cache of compiled patterns.
///
/// Fast-forward scans compare the same expected line against many actual lines; the cache keeps
/// that to one compilation per distinct pattern.
#[derive(Debug, Default)]
pub struct RegexComparator {
    cache: RefCell<HashMap<String, Result<Regex, regex::Error>>>,
}

impl RegexComparator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `pattern` anchored as `^(?:pattern)$`, reusing an earlier compilation if any.
    pub fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        self.cache
            .borrow_mut()
            .entry(pattern.to_string())
            .or_insert_with(|| Regex::new(&format!("^(?:{pattern})$")))
            .clone()
    }
}

impl LineComparator for RegexComparator {
    fn compare(&self, expected: &str, actual: &str) -> bool {
        match self.compile(expected) {
            Ok(re) => re.is_match(actual),
            Err(_) => false,
        }
    }
}
