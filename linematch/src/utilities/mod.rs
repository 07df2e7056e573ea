//! # Utilities
//!
//! Helpers shared by the loader and the data model:
//! - [`file_loader`]: reads an artifact from disk into a [`LineSequence`](crate::types::LineSequence).
//! - [`line_normalization`]: line splitting and byte-order-mark handling.

pub mod file_loader;
pub mod line_normalization;
