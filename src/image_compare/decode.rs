//! Image decoding module
//!
//! Turns encoded image files into RGBA pixel buffers. PNG goes through the
//! `image` crate, TIFF through the `tiff` crate, and `AutoDecoder` picks
//! between them from the file signature.

mod auto_decoder;
mod decoder;
mod png_decoder;
mod tiff_decoder;
pub mod types;

pub use auto_decoder::AutoDecoder;
pub use decoder::ImageDecoder;
pub use png_decoder::PngDecoder;
pub use tiff_decoder::TiffDecoder;
pub use types::DecodedImage;
