use ag_core::frame::{LumaFrame, RasterImage};

/// Luminance perceptuelle BT.601 arrondie : `0.299 R + 0.587 G + 0.114 B`.
///
/// Integer math, coefficients scaled by 1000 (299 + 587 + 114 = 1000).
///
/// # Example
/// ```
/// use ag_ascii::grayscale::luma;
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(255, 0, 0), 76);
/// ```
#[inline]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b) + 500) / 1000) as u8
}

/// Reduce an RGBA image to one luminance channel. Alpha is ignored.
///
/// # Example
/// ```
/// use ag_core::frame::RasterImage;
/// use ag_ascii::grayscale::to_luma;
/// let img = RasterImage::from_fn(2, 1, |x, _| if x == 0 { (0, 0, 0) } else { (255, 255, 255) });
/// assert_eq!(to_luma(&img).data, vec![0, 255]);
/// ```
#[must_use]
pub fn to_luma(image: &RasterImage) -> LumaFrame {
    let data = image
        .data
        .chunks_exact(4)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect();
    LumaFrame {
        data,
        width: image.width,
        height: image.height,
    }
}
