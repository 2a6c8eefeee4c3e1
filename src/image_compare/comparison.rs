//! Comparison orchestration module
//!
//! Decodes two images, checks their dimensions, flattens them and computes
//! the standard deviation of their sample differences.

mod runner;
mod timing;
pub mod types;


pub use runner::ImageComparator;
pub use timing::{ComparisonTimings, StepTiming, Timer};
pub use types::{ComparisonConfig, ComparisonConfigBuilder, ComparisonReport};
