//! Common utilities module
//!
//! Shared error type used by decoding, flattening and comparison.

pub mod error;

pub use error::{ComparisonError, Result};
