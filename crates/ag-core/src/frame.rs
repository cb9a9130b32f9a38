use std::fmt;

use crate::error::CoreError;

/// Image source en RGBA row-major, 4 bytes par pixel. L'alpha est ignoré.
///
/// # Example
/// ```
/// use ag_core::frame::RasterImage;
/// let img = RasterImage::new(10, 10);
/// assert_eq!(img.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RasterImage {
    /// Crée une image noire (alpha 0) aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::RasterImage;
    /// let img = RasterImage::new(100, 50);
    /// assert_eq!(img.width, 100);
    /// assert_eq!(img.height, 50);
    /// assert_eq!(img.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] if `data.len() != width * height * 4`.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::RasterImage;
    /// assert!(RasterImage::from_rgba(1, 1, vec![1, 2, 3, 255]).is_ok());
    /// assert!(RasterImage::from_rgba(2, 1, vec![1, 2, 3, 255]).is_err());
    /// ```
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CoreError::InvalidInput(format!(
                "buffer RGBA de {} octets, {expected} attendus pour {width}×{height}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build an opaque image from a per-pixel `(x, y) -> (r, g, b)` function.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::RasterImage;
    /// let img = RasterImage::from_fn(4, 1, |x, _| { let v = (x * 80) as u8; (v, v, v) });
    /// assert_eq!(img.pixel(3, 0), (240, 240, 240, 255));
    /// ```
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> (u8, u8, u8)) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = f(x, y);
                data.extend_from_slice(&[r, g, b, 255]);
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// `true` if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Image en niveaux de gris, un octet par pixel, row-major.
///
/// # Example
/// ```
/// use ag_core::frame::LumaFrame;
/// let luma = LumaFrame::new(3, 2);
/// assert_eq!(luma.data.len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LumaFrame {
    /// Luminance values in [0, 255].
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl LumaFrame {
    /// Crée un buffer noir aux dimensions données.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Luminance at (x, y).
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }
}

/// Grille de sortie : `height` lignes de `width` glyphes, row-major.
///
/// Immutable once built. `Display` joins the rows with `\n`, without a
/// trailing newline.
///
/// # Example
/// ```
/// use ag_core::frame::CharacterGrid;
/// let grid = CharacterGrid::from_cells(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
/// assert_eq!(grid.to_string(), "ab\ncd");
/// assert_eq!(grid.get(1, 1), 'd');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterGrid {
    cells: Vec<char>,
    width: u32,
    height: u32,
}

impl CharacterGrid {
    /// Assemble a grid from row-major cells.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] if `cells.len() != width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<char>) -> Result<Self, CoreError> {
        if cells.len() != width as usize * height as usize {
            return Err(CoreError::InvalidInput(format!(
                "{} cellules pour une grille {width}×{height}",
                cells.len()
            )));
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Width in glyphs.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Glyph at (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) is outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// One row of glyphs.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    #[must_use]
    pub fn row(&self, y: u32) -> &[char] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact panics on 0; a zero-width grid has no rows to show anyway.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Flatten to text, rows joined with `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CharacterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
