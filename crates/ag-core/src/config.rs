use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{CHARSET_STANDARD, Palette};
use crate::error::CoreError;

/// Bornes des réglages exposés à l'utilisateur.
pub const IMAGE_WIDTH_RANGE: (u32, u32) = (30, 200);
/// Text art width bounds.
pub const TEXT_WIDTH_RANGE: (u32, u32) = (40, 120);
/// Brightness and contrast factor bounds.
pub const FACTOR_RANGE: (f32, f32) = (0.5, 2.0);
/// Richness bounds.
pub const RICHNESS_RANGE: (u8, u8) = (1, 10);

/// Resampling algorithm used to bring the grayscale image to grid size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ResampleFilter {
    /// Moyenne de zone. Default.
    #[default]
    Box,
    /// Bilinear convolution.
    Bilinear,
    /// Nearest neighbour, no filtering.
    Nearest,
}

/// Immutable per-call configuration of the image quantizer.
///
/// # Example
/// ```
/// use ag_core::config::QuantizationConfig;
/// let config = QuantizationConfig::default();
/// assert_eq!(config.target_width, 100);
/// assert_eq!(config.richness, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuantizationConfig {
    /// Largeur de la grille en caractères.
    pub target_width: u32,
    /// Glyphes, du premier (pixels noirs) au dernier (pixels blancs).
    /// Empty means the compact ten-glyph ramp.
    pub palette: String,
    /// Multiplicative brightness factor, 1.0 = neutral.
    pub brightness: f32,
    /// Multiplicative contrast factor around mid-gray, 1.0 = neutral.
    pub contrast: f32,
    /// Derive the row count from the image aspect ratio with glyph-cell correction.
    pub maintain_aspect: bool,
    /// Palette truncation level in [1, 10]. Clamped, never rejected.
    pub richness: u8,
    /// Resampling algorithm.
    #[serde(default)]
    pub resample: ResampleFilter,
}

impl Default for QuantizationConfig {
    fn default() -> Self {
        Self {
            target_width: 100,
            palette: CHARSET_STANDARD.to_string(),
            brightness: 1.0,
            contrast: 1.0,
            maintain_aspect: true,
            richness: 7,
            resample: ResampleFilter::Box,
        }
    }
}

impl QuantizationConfig {
    /// Check the fields the quantizer cannot clamp on its own.
    ///
    /// # Errors
    /// - [`CoreError::InvalidInput`] if `target_width` is zero.
    /// - [`CoreError::InvalidConfiguration`] if brightness or contrast is
    ///   negative or not finite.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.target_width == 0 {
            return Err(CoreError::InvalidInput(
                "la largeur cible doit être > 0".to_string(),
            ));
        }
        check_factor("brightness", self.brightness)?;
        check_factor("contrast", self.contrast)?;
        Ok(())
    }

    /// Richness ramenée dans [1, 10].
    #[must_use]
    pub fn effective_richness(&self) -> u8 {
        let clamped = self.richness.clamp(RICHNESS_RANGE.0, RICHNESS_RANGE.1);
        if clamped != self.richness {
            log::warn!("richness {} hors de [1, 10], ramenée à {clamped}", self.richness);
        }
        clamped
    }

    /// Resolved palette (empty string → default ramp).
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(&self.palette)
    }
}

fn check_factor(name: &str, value: f32) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::InvalidConfiguration(format!(
            "{name} doit être un réel positif, reçu {value}"
        )));
    }
    Ok(())
}

/// Réglages du rendu texte.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextConfig {
    /// Font name, as listed by the font catalog.
    pub font: String,
    /// Maximum line width in columns.
    pub width: u32,
    /// Directory scanned for extra `.flf` fonts.
    pub fonts_dir: Option<PathBuf>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: "standard".to_string(),
            width: 80,
            fonts_dir: None,
        }
    }
}

/// Configuration complète de l'application.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Image art settings.
    pub image: QuantizationConfig,
    /// Text art settings.
    pub text: TextConfig,
}

impl AppConfig {
    /// Clamp all numeric fields to the ranges exposed to users.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        let img = &mut self.image;
        img.target_width = img
            .target_width
            .clamp(IMAGE_WIDTH_RANGE.0, IMAGE_WIDTH_RANGE.1);
        img.brightness = clamp_factor(img.brightness);
        img.contrast = clamp_factor(img.contrast);
        img.richness = img.richness.clamp(RICHNESS_RANGE.0, RICHNESS_RANGE.1);
        self.text.width = self
            .text
            .width
            .clamp(TEXT_WIDTH_RANGE.0, TEXT_WIDTH_RANGE.1);
    }
}

fn clamp_factor(value: f32) -> f32 {
    if value.is_nan() {
        1.0
    } else {
        value.clamp(FACTOR_RANGE.0, FACTOR_RANGE.1)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    image: Option<ImageSection>,
    text: Option<TextSection>,
}

/// Image section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct ImageSection {
    width: Option<u32>,
    palette: Option<String>,
    brightness: Option<f32>,
    contrast: Option<f32>,
    maintain_aspect: Option<bool>,
    richness: Option<u8>,
    resample: Option<ResampleFilter>,
}

/// Text section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct TextSection {
    font: Option<String>,
    width: Option<u32>,
    fonts_dir: Option<PathBuf>,
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use ag_core::config::parse_config;
/// let config = parse_config("[image]\nrichness = 3\n").unwrap();
/// assert_eq!(config.image.richness, 3);
/// assert_eq!(config.image.target_width, 100);
/// ```
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = AppConfig::default();

    if let Some(s) = file.image {
        let img = &mut config.image;
        if let Some(v) = s.width {
            img.target_width = v;
        }
        if let Some(v) = s.palette {
            img.palette = v;
        }
        if let Some(v) = s.brightness {
            img.brightness = v;
        }
        if let Some(v) = s.contrast {
            img.contrast = v;
        }
        if let Some(v) = s.maintain_aspect {
            img.maintain_aspect = v;
        }
        if let Some(v) = s.richness {
            img.richness = v;
        }
        if let Some(v) = s.resample {
            img.resample = v;
        }
    }

    if let Some(s) = file.text {
        if let Some(v) = s.font {
            config.text.font = v;
        }
        if let Some(v) = s.width {
            config.text.width = v;
        }
        if s.fonts_dir.is_some() {
            config.text.fonts_dir = s.fonts_dir;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ag_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("asciigen.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn validate_rejects_zero_width() {
        let config = QuantizationConfig {
            target_width: 0,
            ..QuantizationConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn validate_rejects_negative_and_nan_factors() {
        let neg = QuantizationConfig {
            brightness: -0.1,
            ..QuantizationConfig::default()
        };
        assert!(matches!(
            neg.validate(),
            Err(CoreError::InvalidConfiguration(_))
        ));
        let nan = QuantizationConfig {
            contrast: f32::NAN,
            ..QuantizationConfig::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(CoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_factor_is_allowed() {
        let config = QuantizationConfig {
            brightness: 0.0,
            contrast: 0.0,
            ..QuantizationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn effective_richness_clamps() {
        let mut config = QuantizationConfig::default();
        config.richness = 0;
        assert_eq!(config.effective_richness(), 1);
        config.richness = 11;
        assert_eq!(config.effective_richness(), 10);
        config.richness = 4;
        assert_eq!(config.effective_richness(), 4);
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_sections_override_only_given_keys() {
        let config = parse_config(
            r#"
            [image]
            palette = ".:#"
            maintain_aspect = false
            resample = "Bilinear"

            [text]
            font = "slant"
            "#,
        )
        .unwrap();
        assert_eq!(config.image.palette, ".:#");
        assert!(!config.image.maintain_aspect);
        assert_eq!(config.image.resample, ResampleFilter::Bilinear);
        assert_eq!(config.image.brightness, 1.0);
        assert_eq!(config.text.font, "slant");
        assert_eq!(config.text.width, 80);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse_config(
            "[image]\nwidth = 5000\nbrightness = 9.0\nrichness = 0\n[text]\nwidth = 1\n",
        )
        .unwrap();
        assert_eq!(config.image.target_width, 200);
        assert_eq!(config.image.brightness, 2.0);
        assert_eq!(config.image.richness, 1);
        assert_eq!(config.text.width, 40);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("[image\nwidth = ").is_err());
        assert!(parse_config("[image]\nwidth = \"wide\"\n").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[image]\nwidth = 64").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.image.target_width, 64);
    }

    #[test]
    fn load_config_missing_file_names_path() {
        let err = load_config(Path::new("/nonexistent/asciigen.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/asciigen.toml"));
    }
}
