//!
//! Traits Module
//!
//! This module contains the extension points of the matcher.
//!
//! - [`comparator`]: Defines the per-line comparison strategy used by the classifier.

pub mod comparator;
