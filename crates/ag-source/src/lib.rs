//! Image sources for asciigen: file/bytes decoding and grayscale resampling.

pub mod image;
pub mod resize;
