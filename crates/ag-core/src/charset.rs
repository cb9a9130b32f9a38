/// 10 caractères — compact, bon contraste. Also the fallback for empty palettes.
pub const CHARSET_COMPACT: &str = " .:-=+*#%@";

/// 70 caractères — Paul Bourke extended, default of the image settings.
pub const CHARSET_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Deux emojis, blanc puis noir.
pub const CHARSET_EMOJI: &str = "🤍🖤";

/// Default of the free-form palette input.
pub const CHARSET_CUSTOM: &str = ".,:;!*#@";

/// Ordered, never-empty glyph sequence used by the quantizer.
///
/// A glyph is one Unicode scalar value. Index 0 is what black pixels map to,
/// the last glyph is what white pixels map to.
///
/// # Example
/// ```
/// use ag_core::charset::Palette;
/// let p = Palette::new(".:#");
/// assert_eq!(p.len(), 3);
/// assert_eq!(p.first(), '.');
/// assert_eq!(p.last(), '#');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Palette {
    /// Build a palette from a string. An empty string yields [`CHARSET_COMPACT`].
    ///
    /// # Example
    /// ```
    /// use ag_core::charset::{Palette, CHARSET_COMPACT};
    /// assert_eq!(Palette::new(""), Palette::new(CHARSET_COMPACT));
    /// ```
    #[must_use]
    pub fn new(glyphs: &str) -> Self {
        let source = if glyphs.is_empty() {
            CHARSET_COMPACT
        } else {
            glyphs
        };
        Self {
            glyphs: source.chars().collect(),
        }
    }

    /// Number of glyphs, always >= 1.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Glyphs in mapping order.
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Glyph for black.
    #[must_use]
    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    /// Glyph for white.
    #[must_use]
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    /// `true` si la palette contient un espace littéral.
    #[must_use]
    pub fn contains_space(&self) -> bool {
        self.glyphs.contains(&' ')
    }

    /// Keep the first `max(1, floor(len * richness / 10))` glyphs.
    ///
    /// `richness` is clamped to [1, 10]. Lower richness drops glyphs from the
    /// end of the palette, never from the start.
    ///
    /// # Example
    /// ```
    /// use ag_core::charset::Palette;
    /// let p = Palette::new(" .:-=+*#%@");
    /// assert_eq!(p.truncate(10), p);
    /// assert_eq!(p.truncate(7).len(), 7);
    /// assert_eq!(p.truncate(1).glyphs(), &[' ']);
    /// ```
    #[must_use]
    pub fn truncate(&self, richness: u8) -> Self {
        let richness = usize::from(richness.clamp(1, 10));
        let effective = (self.glyphs.len() * richness / 10).max(1);
        Self {
            glyphs: self.glyphs[..effective].to_vec(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(CHARSET_COMPACT)
    }
}
