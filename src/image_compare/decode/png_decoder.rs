//! PNG decoder backed by the `image` crate.

use tracing::debug;
use crate::image_compare::common::error::{ComparisonError, Result};
use crate::image_compare::decode::decoder::ImageDecoder;
use crate::image_compare::decode::types::DecodedImage;

/// Decodes PNG files of any bit depth or color type into 8-bit RGBA.
///
/// Grayscale and RGB inputs get an opaque alpha channel; 16-bit inputs are
/// scaled down to 8 bits by `image`.
pub struct PngDecoder;

impl ImageDecoder for PngDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedImage> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let rgba = image::load_from_memory_with_format(data, image::ImageFormat::Png)
            .map_err(|e| ComparisonError::DecodeError(e.to_string()))?
            .to_rgba8();

        let width = rgba.width() as usize;
        let height = rgba.height() as usize;

        debug!("Decoded PNG: {}x{}", width, height);

        DecodedImage::new(width, height, rgba.into_raw())
    }
}
