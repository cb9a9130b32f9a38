use std::collections::BTreeSet;

use crate::error::CoreError;

/// Rend du texte en grandes lettres faites de glyphes répétés.
///
/// Implémenté par : `FigletRenderer` (ag-text).
///
/// # Example
/// ```
/// use ag_core::traits::TextRenderer;
/// use ag_core::CoreError;
///
/// struct Shout;
/// impl TextRenderer for Shout {
///     fn render(&self, text: &str, _font: &str, _width: u32) -> Result<String, CoreError> {
///         Ok(text.to_uppercase())
///     }
/// }
/// assert_eq!(Shout.render("hi", "standard", 80).unwrap(), "HI");
/// ```
pub trait TextRenderer {
    /// Render `text` with the font `font_name`, wrapping so that no line
    /// exceeds `width` columns when the words allow it.
    ///
    /// # Errors
    /// [`CoreError::UnknownFont`] for a font outside the catalog,
    /// [`CoreError::InvalidInput`] for empty text,
    /// [`CoreError::Render`] for backend failures.
    fn render(&self, text: &str, font_name: &str, width: u32) -> Result<String, CoreError>;
}

/// Découverte des polices disponibles.
///
/// # Example
/// ```
/// use ag_core::traits::FontCatalog;
/// use std::collections::BTreeSet;
///
/// struct Fixed;
/// impl FontCatalog for Fixed {
///     fn list_fonts(&self) -> BTreeSet<String> {
///         BTreeSet::from(["standard".to_string()])
///     }
/// }
/// assert!(Fixed.list_fonts().contains("standard"));
/// ```
pub trait FontCatalog {
    /// Names of every font the renderer accepts, sorted.
    fn list_fonts(&self) -> BTreeSet<String>;
}
