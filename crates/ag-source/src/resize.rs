use ag_core::config::ResampleFilter;
use ag_core::frame::LumaFrame;
use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize, pour des buffers `U8`.
///
/// # Example
/// ```
/// use ag_source::resize::Resizer;
/// use ag_core::config::ResampleFilter;
/// let r = Resizer::new(ResampleFilter::Box);
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a resizer using `filter`.
    #[must_use]
    pub fn new(filter: ResampleFilter) -> Self {
        let alg = match filter {
            ResampleFilter::Box => ResizeAlg::Convolution(FilterType::Box),
            ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResampleFilter::Nearest => ResizeAlg::Nearest,
        };
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(alg),
        }
    }

    /// Resize `src` to `width × height`. Same-size input is copied through.
    ///
    /// # Errors
    /// Returns an error if a dimension is zero or the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use ag_source::resize::Resizer;
    /// use ag_core::config::ResampleFilter;
    /// use ag_core::frame::LumaFrame;
    /// let mut r = Resizer::new(ResampleFilter::Bilinear);
    /// let dst = r.resize(&LumaFrame::new(100, 100), 50, 25).unwrap();
    /// assert_eq!((dst.width, dst.height), (50, 25));
    /// ```
    pub fn resize(&mut self, src: &LumaFrame, width: u32, height: u32) -> Result<LumaFrame> {
        if src.width == width && src.height == height {
            return Ok(src.clone());
        }

        // Copie forcée : fast_image_resize veut posséder (ou &mut) la source.
        let src_image = Image::from_vec_u8(src.width, src.height, src.data.clone(), PixelType::U8)
            .context("Invalid source dimensions")?;

        let mut dst_image = Image::new(width, height, PixelType::U8);

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(LumaFrame {
            data: dst_image.into_vec(),
            width,
            height,
        })
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new(ResampleFilter::default())
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use ag_source::resize::resize_luma;
/// use ag_core::config::ResampleFilter;
/// use ag_core::frame::LumaFrame;
/// let dst = resize_luma(&LumaFrame::new(10, 10), 5, 5, ResampleFilter::Box).unwrap();
/// assert_eq!(dst.data.len(), 25);
/// ```
pub fn resize_luma(
    src: &LumaFrame,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<LumaFrame> {
    Resizer::new(filter).resize(src, width, height)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> LumaFrame {
        let mut frame = LumaFrame::new(width, height);
        for y in 0..height {
            for x in 0..width {
                frame.data[(y * width + x) as usize] = (x * 255 / (width - 1)) as u8;
            }
        }
        frame
    }

    #[test]
    fn same_size_is_identity() {
        let src = gradient(8, 4);
        let dst = resize_luma(&src, 8, 4, ResampleFilter::Box).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn uniform_image_stays_uniform() {
        let mut src = LumaFrame::new(40, 30);
        src.data.fill(200);
        for filter in [
            ResampleFilter::Box,
            ResampleFilter::Bilinear,
            ResampleFilter::Nearest,
        ] {
            let dst = resize_luma(&src, 7, 3, filter).unwrap();
            assert!(
                dst.data.iter().all(|&v| v.abs_diff(200) <= 1),
                "{filter:?}: {:?}",
                dst.data
            );
        }
    }

    #[test]
    fn downscaled_gradient_stays_monotonic() {
        let src = gradient(256, 16);
        for filter in [
            ResampleFilter::Box,
            ResampleFilter::Bilinear,
            ResampleFilter::Nearest,
        ] {
            let dst = resize_luma(&src, 37, 5, filter).unwrap();
            for y in 0..dst.height {
                for x in 1..dst.width {
                    assert!(
                        dst.get(x, y) >= dst.get(x - 1, y),
                        "{filter:?} non monotone en ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn upscaling_is_supported() {
        let src = gradient(4, 2);
        let dst = resize_luma(&src, 16, 8, ResampleFilter::Bilinear).unwrap();
        assert_eq!(dst.data.len(), 128);
    }
}
