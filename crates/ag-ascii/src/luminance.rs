use ag_core::charset::Palette;
use ag_core::frame::{CharacterGrid, LumaFrame};
use ag_core::CoreError;

/// Index of the glyph for luminance `v` in a palette of `len` glyphs.
///
/// `floor(v / 256 * len)`, clamped to `len - 1`. Black maps to index 0,
/// white to the last index.
///
/// # Example
/// ```
/// use ag_ascii::luminance::glyph_index;
/// assert_eq!(glyph_index(0, 10), 0);
/// assert_eq!(glyph_index(128, 10), 5);
/// assert_eq!(glyph_index(255, 10), 9);
/// ```
#[inline]
#[must_use]
pub fn glyph_index(v: u8, len: usize) -> usize {
    debug_assert!(len > 0, "palette vide");
    (usize::from(v) * len / 256).min(len - 1)
}

/// Lookup table mapping luminance [0..255] → glyph.
///
/// Pre-computed once per palette for O(1) per-pixel cost.
///
/// # Example
/// ```
/// use ag_core::charset::Palette;
/// use ag_ascii::luminance::GlyphLut;
/// let lut = GlyphLut::new(&Palette::new(" .:#@"));
/// assert_eq!(lut.map(0), ' ');
/// assert_eq!(lut.map(255), '@');
/// ```
pub struct GlyphLut {
    lut: [char; 256],
}

impl GlyphLut {
    /// Build the table for `palette` (already truncated).
    #[must_use]
    pub fn new(palette: &Palette) -> Self {
        let glyphs = palette.glyphs();
        let mut lut = [' '; 256];
        for (v, slot) in lut.iter_mut().enumerate() {
            *slot = glyphs[glyph_index(v as u8, glyphs.len())];
        }
        Self { lut }
    }

    /// Map a luminance value to its glyph.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}

/// Map every pixel of an already resampled frame to a glyph.
///
/// # Errors
/// Propagates [`CoreError::InvalidInput`] from the grid assembly if the frame
/// buffer does not match its dimensions.
///
/// # Example
/// ```
/// use ag_core::charset::Palette;
/// use ag_core::frame::LumaFrame;
/// use ag_ascii::luminance::{GlyphLut, map_frame};
/// let frame = LumaFrame { data: vec![0, 255, 255, 0], width: 2, height: 2 };
/// let grid = map_frame(&frame, &GlyphLut::new(&Palette::new(".#"))).unwrap();
/// assert_eq!(grid.to_string(), ".#\n#.");
/// ```
pub fn map_frame(frame: &LumaFrame, lut: &GlyphLut) -> Result<CharacterGrid, CoreError> {
    let cells = frame.data.iter().map(|&v| lut.map(v)).collect();
    CharacterGrid::from_cells(frame.width, frame.height, cells)
}
