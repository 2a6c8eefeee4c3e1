//! TIFF decoder backed by the `tiff` crate.

use std::io::Cursor;

use tracing::debug;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use crate::image_compare::common::error::{ComparisonError, Result};
use crate::image_compare::decode::decoder::ImageDecoder;
use crate::image_compare::decode::types::{DecodedImage, RGBA_CHANNELS};

/// Decodes 8-bit Gray, GrayA, RGB and RGBA TIFF files into RGBA.
///
/// Only the first image of a multi-page file is read.
pub struct TiffDecoder;

impl ImageDecoder for TiffDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedImage> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| ComparisonError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ComparisonError::DecodeError(e.to_string()))?;
        let color_type = decoder
            .colortype()
            .map_err(|e| ComparisonError::DecodeError(e.to_string()))?;

        let channels = match color_type {
            ColorType::Gray(8) => 1,
            ColorType::GrayA(8) => 2,
            ColorType::RGB(8) => 3,
            ColorType::RGBA(8) => 4,
            other => {
                return Err(ComparisonError::UnsupportedFormat(format!(
                    "TIFF color type {:?}",
                    other
                )));
            }
        };

        let samples = match decoder
            .read_image()
            .map_err(|e| ComparisonError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(values) => values,
            _ => {
                return Err(ComparisonError::UnsupportedFormat(
                    "TIFF sample format other than u8".to_string(),
                ));
            }
        };

        debug!("Decoded TIFF: {}x{} {:?}", width, height, color_type);

        let pixels = expand_to_rgba(&samples, channels);
        DecodedImage::new(width as usize, height as usize, pixels)
    }
}

fn expand_to_rgba(samples: &[u8], channels: usize) -> Vec<u8> {
    if channels == RGBA_CHANNELS {
        return samples.to_vec();
    }

    let mut rgba = Vec::with_capacity(samples.len() / channels * RGBA_CHANNELS);
    for px in samples.chunks_exact(channels) {
        let pixel = match *px {
            [g] => [g, g, g, u8::MAX],
            [g, a] => [g, g, g, a],
            [r, g, b] => [r, g, b, u8::MAX],
            _ => unreachable!("channel count is 1, 2 or 3"),
        };
        rgba.extend_from_slice(&pixel);
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiff::encoder::{TiffEncoder, colortype};

    fn encode_rgb(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer)).unwrap();
        encoder
            .write_image::<colortype::RGB8>(width, height, data)
            .unwrap();
        buffer
    }

    #[test]
    fn test_rgb_tiff_gets_opaque_alpha() {
        let encoded = encode_rgb(2, 1, &[1, 2, 3, 4, 5, 6]);
        let image = TiffDecoder.decode(&encoded).unwrap();

        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.pixels(), &[1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_gray_tiff_replicates_channel() {
        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer)).unwrap();
        encoder
            .write_image::<colortype::Gray8>(1, 1, &[42])
            .unwrap();

        let image = TiffDecoder.decode(&buffer).unwrap();
        assert_eq!(image.pixels(), &[42, 42, 42, 255]);
    }

    #[test]
    fn test_16bit_tiff_is_unsupported() {
        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer)).unwrap();
        encoder
            .write_image::<colortype::Gray16>(1, 1, &[1000])
            .unwrap();

        let result = TiffDecoder.decode(&buffer);
        assert!(matches!(result, Err(ComparisonError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let result = TiffDecoder.decode(b"II*\0not really a tiff");
        assert!(matches!(result, Err(ComparisonError::DecodeError(_))));
    }
}
