//! Flattening of decoded RGBA images into RGB sample sequences.

use crate::image_compare::decode::types::{DecodedImage, RGBA_CHANNELS};

/// Color samples kept per pixel (alpha is dropped).
pub const RGB_CHANNELS: usize = 3;

/// Ordered R, G, B samples of an image, row-major, alpha excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSequence(Vec<u8>);

impl SampleSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// First `n` samples, or all of them if the sequence is shorter.
    pub fn head(&self, n: usize) -> &[u8] {
        &self.0[..n.min(self.0.len())]
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for SampleSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Flatten an RGBA image into `width * height * 3` samples.
///
/// Pixels are visited row by row; each contributes R, G, B in that order.
pub fn flatten(image: &DecodedImage) -> SampleSequence {
    let mut samples = Vec::with_capacity(image.width() * image.height() * RGB_CHANNELS);
    for pixel in image.pixels().chunks_exact(RGBA_CHANNELS) {
        samples.extend_from_slice(&pixel[..RGB_CHANNELS]);
    }
    SampleSequence(samples)
}
