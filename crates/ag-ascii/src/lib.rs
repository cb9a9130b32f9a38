//! Image → character grid quantization engine for asciigen.
//!
//! Pipeline: brightness, contrast, grayscale, target height, resampling,
//! palette truncation, glyph mapping. See [`quantizer::quantize`].

pub mod adjust;
pub mod dimensions;
pub mod grayscale;
pub mod luminance;
pub mod quantizer;

pub use quantizer::quantize;
