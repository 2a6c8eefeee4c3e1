//! Decoded image types

use crate::image_compare::common::error::{ComparisonError, Result};

/// Number of bytes per RGBA pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Decoded 8-bit RGBA image, row-major.
///
/// Construction validates that the buffer holds exactly `width * height * 4`
/// bytes, so everything downstream can index it without checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ComparisonError::InvalidDimensions(width, height));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(RGBA_CHANNELS))
            .ok_or(ComparisonError::InvalidDimensions(width, height))?;
        if pixels.len() != expected {
            return Err(ComparisonError::InvalidBuffer {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width of the image in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the image in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// RGBA bytes, `[R, G, B, A, R, G, B, A, ...]`
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}
