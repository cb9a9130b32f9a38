//! Row count of the output grid.

/// Les cellules de police monospace sont plus hautes que larges.
pub const ROW_COMPRESSION: f64 = 0.55;

/// Divisor applied to the raw height when the palette holds a literal space.
pub const SPACE_PALETTE_DIVISOR: f64 = 0.5;

/// Number of rows for a grid `target_width` glyphs wide.
///
/// - `maintain_aspect`: `round(target_width / aspect * 0.55)`, where the raw
///   height `target_width / aspect` is first divided by 0.5 when
///   `palette_has_space` is set.
/// - otherwise: `round(target_width / aspect)`.
///
/// Always at least 1. Callers guarantee non-zero image dimensions.
///
/// # Example
/// ```
/// use ag_ascii::dimensions::target_height;
/// assert_eq!(target_height(200, 100, 100, true, false), 28);
/// assert_eq!(target_height(200, 100, 100, true, true), 55);
/// assert_eq!(target_height(200, 100, 100, false, true), 50);
/// ```
#[must_use]
pub fn target_height(
    img_width: u32,
    img_height: u32,
    target_width: u32,
    maintain_aspect: bool,
    palette_has_space: bool,
) -> u32 {
    debug_assert!(img_width > 0 && img_height > 0, "image vide");
    let aspect = f64::from(img_width) / f64::from(img_height);
    let raw = f64::from(target_width) / aspect;

    let height = if maintain_aspect {
        let raw = if palette_has_space {
            raw / SPACE_PALETTE_DIVISOR
        } else {
            raw
        };
        (raw * ROW_COMPRESSION).round()
    } else {
        raw.round()
    };

    (height as u32).max(1)
}
