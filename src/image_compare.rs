//! Image comparison module
//!
//! Measures how far two equally sized images are apart as the population
//! standard deviation of their per-channel sample differences. Decoding,
//! flattening, the statistic and the orchestration live in separate modules.

pub mod common;
pub mod comparison;
pub mod decode;
pub mod samples;
pub mod statistics;

pub use common::{
    ComparisonError,
    Result,
};

pub use decode::{
    AutoDecoder,
    DecodedImage,
    ImageDecoder,
    PngDecoder,
    TiffDecoder,
};

pub use samples::{
    SampleSequence,
    flatten,
};

pub use statistics::{
    AccumulationStart,
    DifferenceSummary,
    population_std_dev_of_differences,
    summarize_differences,
};

pub use comparison::{
    ComparisonConfig,
    ComparisonConfigBuilder,
    ComparisonReport,
    ImageComparator,
};
