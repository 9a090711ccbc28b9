//! Utility functions for URL processing and input cleanup.
//!
//! - [`url_normalizer`] - URL normalization for platform matching
//! - [`sanitize`] - Invisible character stripping and platform key cleanup

pub mod sanitize;
pub mod url_normalizer;
