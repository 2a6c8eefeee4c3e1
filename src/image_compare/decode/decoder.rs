use crate::image_compare::common::error::Result;
use crate::image_compare::decode::types::DecodedImage;

pub trait ImageDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedImage>;
}
