use std::borrow::Cow;

use ag_core::config::QuantizationConfig;
use ag_core::frame::{CharacterGrid, RasterImage};
use ag_core::CoreError;
use ag_source::resize::resize_luma;

use crate::adjust::{apply_brightness, apply_contrast};
use crate::dimensions::target_height;
use crate::grayscale::to_luma;
use crate::luminance::{GlyphLut, map_frame};

/// Convert an image into a character grid.
///
/// Steps: brightness then contrast on the color image, grayscale reduction,
/// row count from the aspect ratio, resampling to `target_width × height`,
/// palette truncation by richness, glyph mapping.
///
/// Pure: `image` is only read, identical inputs give identical grids.
///
/// # Errors
/// - [`CoreError::InvalidInput`] for a zero-size image or a zero target width.
/// - [`CoreError::InvalidConfiguration`] for negative or non-finite
///   brightness/contrast. Richness is clamped to [1, 10] instead.
///
/// # Example
/// ```
/// use ag_core::config::QuantizationConfig;
/// use ag_core::frame::RasterImage;
/// use ag_ascii::quantize;
///
/// let img = RasterImage::from_fn(200, 100, |_, _| (255, 255, 255));
/// let config = QuantizationConfig {
///     target_width: 100,
///     palette: ".:#".to_string(),
///     richness: 10,
///     ..QuantizationConfig::default()
/// };
/// let grid = quantize(&img, &config).unwrap();
/// assert_eq!((grid.width(), grid.height()), (100, 28));
/// assert!(grid.cells().iter().all(|&c| c == '#'));
/// ```
pub fn quantize(
    image: &RasterImage,
    config: &QuantizationConfig,
) -> Result<CharacterGrid, CoreError> {
    if image.is_empty() {
        return Err(CoreError::invalid_dimensions(image.width, image.height));
    }
    config.validate()?;

    let image = preprocess(image, config.brightness, config.contrast);
    let gray = to_luma(&image);

    // Espace testé sur la palette fournie, avant le repli sur la rampe par défaut.
    let has_space = config.palette.contains(' ');
    let width = config.target_width;
    let height = target_height(
        gray.width,
        gray.height,
        width,
        config.maintain_aspect,
        has_space,
    );
    log::debug!(
        "quantize: {}×{} → {width}×{height} (aspect={}, espace={has_space})",
        gray.width,
        gray.height,
        config.maintain_aspect
    );

    let resized = resize_luma(&gray, width, height, config.resample)
        .map_err(|e| CoreError::InvalidInput(format!("{e:#}")))?;

    let palette = config.palette().truncate(config.effective_richness());
    log::trace!("palette effective : {} glyphes", palette.len());

    map_frame(&resized, &GlyphLut::new(&palette))
}

/// Brightness then contrast, skipping neutral factors.
#[allow(clippy::float_cmp)]
fn preprocess(image: &RasterImage, brightness: f32, contrast: f32) -> Cow<'_, RasterImage> {
    let mut out = Cow::Borrowed(image);
    if brightness != 1.0 {
        out = Cow::Owned(apply_brightness(&out, brightness));
    }
    if contrast != 1.0 {
        out = Cow::Owned(apply_contrast(&out, contrast));
    }
    out
}
