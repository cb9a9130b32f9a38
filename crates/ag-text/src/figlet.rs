//! FIGlet-backed [`TextRenderer`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use ag_core::CoreError;
use ag_core::traits::{FontCatalog, TextRenderer};
use figlet_rs::FIGfont;

use crate::catalog::{STANDARD_FONT, scan_fonts_dir};
use crate::wrap::render_wrapped;

/// Block-letter renderer over `figlet-rs`.
///
/// The `standard` font is embedded. Additional fonts are read from
/// `<fonts_dir>/<name>.flf` on each call, so fonts dropped in the directory
/// become available without restarting.
///
/// # Example
/// ```
/// use ag_core::traits::TextRenderer;
/// use ag_text::FigletRenderer;
/// let art = FigletRenderer::new().render("Hi", "standard", 80).unwrap();
/// assert!(art.lines().count() > 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FigletRenderer {
    fonts_dir: Option<PathBuf>,
}

impl FigletRenderer {
    /// Renderer limited to the embedded standard font.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that also looks up fonts in `dir`.
    #[must_use]
    pub fn with_fonts_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts_dir: Some(dir.into()),
        }
    }

    /// Dossier de polices configuré, s'il y en a un.
    #[must_use]
    pub fn fonts_dir(&self) -> Option<&Path> {
        self.fonts_dir.as_deref()
    }

    fn load_font(&self, name: &str) -> Result<FIGfont, CoreError> {
        if name.eq_ignore_ascii_case(STANDARD_FONT) {
            return FIGfont::standard().map_err(CoreError::Render);
        }
        let path = self
            .fonts_dir
            .as_deref()
            .and_then(|dir| scan_fonts_dir(dir).remove(name))
            .ok_or_else(|| CoreError::UnknownFont {
                name: name.to_string(),
            })?;
        log::debug!("Chargement de la police {}", path.display());
        FIGfont::from_file(&path.to_string_lossy())
            .map_err(|e| CoreError::Render(format!("{}: {e}", path.display())))
    }
}

impl TextRenderer for FigletRenderer {
    fn render(&self, text: &str, font_name: &str, width: u32) -> Result<String, CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::InvalidInput("texte vide".to_string()));
        }
        let font = self.load_font(font_name)?;
        render_wrapped(text, width, |chunk| {
            font.convert(chunk)
                .map(|figure| figure.to_string())
                .ok_or_else(|| CoreError::Render(format!("aucun glyphe pour « {chunk} »")))
        })
    }
}

impl FontCatalog for FigletRenderer {
    fn list_fonts(&self) -> BTreeSet<String> {
        let mut fonts: BTreeSet<String> = self
            .fonts_dir
            .as_deref()
            .map(|dir| scan_fonts_dir(dir).into_keys().collect())
            .unwrap_or_default();
        fonts.insert(STANDARD_FONT.to_string());
        fonts
    }
}
