use std::path::Path;

use ag_core::frame::RasterImage;
use anyhow::{Context, Result, bail};

/// Décode une image depuis le disque (PNG, JPEG, BMP, GIF).
///
/// # Errors
/// Returns an error if the file cannot be read or decoded, or if the decoded
/// image has a zero dimension.
///
/// # Example
/// ```no_run
/// use ag_source::image::load_image;
/// use std::path::Path;
/// let img = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<RasterImage> {
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let raster = into_raster(&img)?;
    log::debug!(
        "{} chargée : {}×{}",
        path.display(),
        raster.width,
        raster.height
    );
    Ok(raster)
}

/// Décode une image envoyée en mémoire. Le format est deviné depuis le contenu.
///
/// # Errors
/// Returns an error if the bytes are not a supported image.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage> {
    let img = image::load_from_memory(bytes).context("Image non décodable")?;
    into_raster(&img)
}

fn into_raster(img: &image::DynamicImage) -> Result<RasterImage> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        bail!("Image vide ({width}×{height})");
    }
    Ok(RasterImage::from_rgba(width, height, rgba.into_raw())?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn load_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let raster = load_image(&path).unwrap();
        assert_eq!((raster.width, raster.height), (3, 2));
        assert_eq!(raster.pixel(2, 1), (10, 20, 30, 255));
    }

    #[test]
    fn decode_rgb_bytes_adds_opaque_alpha() {
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([200, 100, 50])))
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();

        let raster = decode_image(buf.get_ref()).unwrap();
        assert_eq!(raster.pixel(0, 0), (200, 100, 50, 255));
    }

    #[test]
    fn missing_file_error_names_path() {
        let err = load_image(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/photo.png"));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(decode_image(b"definitely not a png").is_err());
    }
}
