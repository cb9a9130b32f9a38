//! Exposure-style adjustments on the color image, before desaturation.

use ag_core::frame::RasterImage;

/// Gris moyen autour duquel le contraste s'étend ou se contracte.
pub const MID_GRAY: f32 = 128.0;

/// Scale every color channel by `factor`, clamped to [0, 255].
///
/// The same factor is applied to R, G and B so hue is preserved. Alpha is
/// copied unchanged. Returns a new image; `image` is not touched.
///
/// # Example
/// ```
/// use ag_core::frame::RasterImage;
/// use ag_ascii::adjust::apply_brightness;
/// let img = RasterImage::from_fn(1, 1, |_, _| (100, 50, 200));
/// let out = apply_brightness(&img, 1.5);
/// assert_eq!(out.pixel(0, 0), (150, 75, 255, 255));
/// ```
#[must_use]
pub fn apply_brightness(image: &RasterImage, factor: f32) -> RasterImage {
    map_channels(image, |c| scale(c, factor))
}

/// Stretch every color channel around [`MID_GRAY`] by `factor`, clamped to [0, 255].
///
/// # Example
/// ```
/// use ag_core::frame::RasterImage;
/// use ag_ascii::adjust::apply_contrast;
/// let img = RasterImage::from_fn(1, 1, |_, _| (28, 128, 178));
/// let out = apply_contrast(&img, 2.0);
/// assert_eq!(out.pixel(0, 0), (0, 128, 228, 255));
/// ```
#[must_use]
pub fn apply_contrast(image: &RasterImage, factor: f32) -> RasterImage {
    map_channels(image, |c| stretch(c, factor))
}

#[inline]
fn scale(channel: u8, factor: f32) -> u8 {
    (f32::from(channel) * factor).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn stretch(channel: u8, factor: f32) -> u8 {
    ((f32::from(channel) - MID_GRAY) * factor + MID_GRAY)
        .round()
        .clamp(0.0, 255.0) as u8
}

fn map_channels(image: &RasterImage, f: impl Fn(u8) -> u8) -> RasterImage {
    let mut out = image.clone();
    for px in out.data.chunks_exact_mut(4) {
        px[0] = f(px[0]);
        px[1] = f(px[1]);
        px[2] = f(px[2]);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn solid(r: u8, g: u8, b: u8) -> RasterImage {
        RasterImage::from_fn(2, 2, |_, _| (r, g, b))
    }

    #[test]
    fn neutral_factors_are_identity() {
        let img = RasterImage::from_fn(16, 16, |x, y| ((x * 16) as u8, (y * 16) as u8, 77));
        assert_eq!(apply_brightness(&img, 1.0), img);
        assert_eq!(apply_contrast(&img, 1.0), img);
    }

    #[test]
    fn brightness_clamps_to_white() {
        let out = apply_brightness(&solid(200, 100, 10), 2.0);
        assert_eq!(out.pixel(1, 1), (255, 200, 20, 255));
    }

    #[test]
    fn zero_brightness_is_black() {
        let out = apply_brightness(&solid(200, 100, 10), 0.0);
        assert_eq!(out.pixel(0, 0), (0, 0, 0, 255));
    }

    #[test]
    fn brightness_keeps_channel_ratios() {
        let out = apply_brightness(&solid(40, 80, 120), 0.5);
        assert_eq!(out.pixel(0, 0), (20, 40, 60, 255));
    }

    #[test]
    fn contrast_compresses_towards_mid_gray() {
        let out = apply_contrast(&solid(0, 128, 255), 0.5);
        assert_eq!(out.pixel(0, 0), (64, 128, 192, 255));
    }

    #[test]
    fn contrast_zero_is_flat_gray() {
        let out = apply_contrast(&solid(3, 250, 90), 0.0);
        assert_eq!(out.pixel(0, 0), (128, 128, 128, 255));
    }

    #[test]
    fn alpha_is_untouched() {
        let img = RasterImage::from_rgba(1, 1, vec![100, 100, 100, 7]).unwrap();
        assert_eq!(apply_brightness(&img, 2.0).pixel(0, 0).3, 7);
        assert_eq!(apply_contrast(&img, 2.0).pixel(0, 0).3, 7);
    }

    #[test]
    fn source_image_is_not_mutated() {
        let img = solid(10, 20, 30);
        let before = img.clone();
        let _ = apply_brightness(&img, 1.8);
        let _ = apply_contrast(&img, 1.8);
        assert_eq!(img, before);
    }
}
