pub mod image_compare;
pub mod logger;
