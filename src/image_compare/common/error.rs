use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid pixel buffer: expected {expected} bytes, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },

    #[error(
        "Image dimensions differ: left is {left_width}x{left_height}, right is {right_width}x{right_height}"
    )]
    DimensionMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },

    #[error("Sample sequences differ in length: left={left}, right={right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Not enough samples to compute a variance")]
    InsufficientSamples,
}

pub type Result<T> = std::result::Result<T, ComparisonError>;
