//! # Comparators
//!
//! The per-line comparison strategies chained by the
//! [`PatternClassifier`](crate::classifier::PatternClassifier). Both implement
//! [`LineComparator`](crate::traits::comparator::LineComparator).
//!
//! The available comparators are:
//! - [`exact_comparator`]: exact string equality, always tried first.
//! - [`regex_comparator`]: full-line regular expression, tried only when equality fails.

pub mod exact_comparator;
pub mod regex_comparator;
