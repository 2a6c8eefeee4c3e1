use tracing::debug;
use crate::image_compare::common::error::{ComparisonError, Result};
use crate::image_compare::decode::decoder::ImageDecoder;
use crate::image_compare::decode::png_decoder::PngDecoder;
use crate::image_compare::decode::tiff_decoder::TiffDecoder;
use crate::image_compare::decode::types::DecodedImage;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const TIFF_LE_SIGNATURE: &[u8] = b"II*\0";
const TIFF_BE_SIGNATURE: &[u8] = b"MM\0*";

/// Dispatches to `PngDecoder` or `TiffDecoder` based on the leading magic bytes.
pub struct AutoDecoder;

impl ImageDecoder for AutoDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedImage> {
        if data.starts_with(PNG_SIGNATURE) {
            debug!("Detected PNG signature");
            PngDecoder.decode(data)
        } else if data.starts_with(TIFF_LE_SIGNATURE) || data.starts_with(TIFF_BE_SIGNATURE) {
            debug!("Detected TIFF signature");
            TiffDecoder.decode(data)
        } else {
            Err(ComparisonError::UnsupportedFormat(
                "unrecognized file signature".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_dispatches_png() {
        let mut encoded = Vec::new();
        image::RgbaImage::from_raw(1, 1, vec![10, 20, 30, 40])
            .unwrap()
            .write_to(&mut Cursor::new(&mut encoded), image::ImageOutputFormat::Png)
            .unwrap();

        let image = AutoDecoder.decode(&encoded).unwrap();
        assert_eq!(image.pixels(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_rejects_unknown_signature() {
        let result = AutoDecoder.decode(b"GIF89a");
        assert!(matches!(result, Err(ComparisonError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_empty_input() {
        let result = AutoDecoder.decode(&[]);
        assert!(matches!(result, Err(ComparisonError::UnsupportedFormat(_))));
    }
}
