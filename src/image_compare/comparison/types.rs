//! Comparison configuration and report types

use crate::image_compare::comparison::timing::ComparisonTimings;
use crate::image_compare::statistics::{AccumulationStart, DifferenceSummary};

/// Configuration for an image comparison
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Where difference accumulation starts
    pub accumulation: AccumulationStart,
    /// Number of leading left-image samples kept in the report
    pub preview_len: usize,
    /// Decode both inputs on separate threads
    pub concurrent_decode: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            accumulation: AccumulationStart::FirstSample,
            preview_len: 4,
            concurrent_decode: true,
        }
    }
}

impl ComparisonConfig {
    pub fn builder() -> ComparisonConfigBuilder {
        ComparisonConfigBuilder::default()
    }
}

/// Builder for ComparisonConfig
#[derive(Default)]
pub struct ComparisonConfigBuilder {
    accumulation: Option<AccumulationStart>,
    preview_len: Option<usize>,
    concurrent_decode: Option<bool>,
}

impl ComparisonConfigBuilder {
    pub fn accumulation(mut self, accumulation: AccumulationStart) -> Self {
        self.accumulation = Some(accumulation);
        self
    }

    pub fn preview_len(mut self, len: usize) -> Self {
        self.preview_len = Some(len);
        self
    }

    pub fn concurrent_decode(mut self, enable: bool) -> Self {
        self.concurrent_decode = Some(enable);
        self
    }

    pub fn build(self) -> ComparisonConfig {
        let default = ComparisonConfig::default();
        ComparisonConfig {
            accumulation: self.accumulation.unwrap_or(default.accumulation),
            preview_len: self.preview_len.unwrap_or(default.preview_len),
            concurrent_decode: self.concurrent_decode.unwrap_or(default.concurrent_decode),
        }
    }
}

/// Outcome of comparing two images
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub width: usize,
    pub height: usize,
    /// Flattened sample count of the left image
    pub sample_count: usize,
    /// First `preview_len` samples of the left image
    pub leading_samples: Vec<u8>,
    pub summary: DifferenceSummary,
    pub timings: ComparisonTimings,
}

impl ComparisonReport {
    /// Standard deviation of the sample differences
    pub fn std_dev(&self) -> f64 {
        self.summary.std_dev()
    }
}
