use crate::charset::CHARSET_COMPACT;
use crate::config::QuantizationConfig;

/// Named style bundle applied over a base configuration.
///
/// Only the fields a preset sets are overridden; width, aspect handling and
/// resampling always come from the base.
///
/// # Example
/// ```
/// use ag_core::config::QuantizationConfig;
/// use ag_core::preset::ConfigPreset;
/// let config = ConfigPreset::RETRO.apply(QuantizationConfig::default());
/// assert_eq!(config.palette, " .:-=+*#%@");
/// assert_eq!(config.richness, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigPreset {
    /// Nom CLI du preset.
    pub name: &'static str,
    /// Palette override.
    pub palette: Option<&'static str>,
    /// Brightness override.
    pub brightness: Option<f32>,
    /// Contrast override.
    pub contrast: Option<f32>,
    /// Richness override.
    pub richness: Option<u8>,
}

impl ConfigPreset {
    /// Aucun override.
    pub const CUSTOM: Self = Self {
        name: "custom",
        palette: None,
        brightness: None,
        contrast: None,
        richness: None,
    };

    /// Emoji palette, brighter and softer.
    pub const KID_FRIENDLY: Self = Self {
        name: "kid-friendly",
        palette: Some("👶👧👦🎉🎈✨🌈💖"),
        brightness: Some(1.5),
        contrast: Some(0.8),
        richness: Some(5),
    };

    /// Noir et blanc rétro, rampe compacte.
    pub const RETRO: Self = Self {
        name: "retro",
        palette: Some(CHARSET_COMPACT),
        brightness: Some(0.8),
        contrast: Some(1.2),
        richness: Some(8),
    };

    /// Every built-in preset.
    pub const ALL: [Self; 3] = [Self::CUSTOM, Self::KID_FRIENDLY, Self::RETRO];

    /// Look a preset up by name (case-insensitive).
    ///
    /// # Example
    /// ```
    /// use ag_core::preset::ConfigPreset;
    /// assert_eq!(ConfigPreset::by_name("Kid-Friendly"), Some(ConfigPreset::KID_FRIENDLY));
    /// assert_eq!(ConfigPreset::by_name("vaporwave"), None);
    /// ```
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Return `base` with this preset's overrides applied.
    #[must_use]
    pub fn apply(&self, mut base: QuantizationConfig) -> QuantizationConfig {
        if let Some(v) = self.palette {
            base.palette = v.to_string();
        }
        if let Some(v) = self.brightness {
            base.brightness = v;
        }
        if let Some(v) = self.contrast {
            base.contrast = v;
        }
        if let Some(v) = self.richness {
            base.richness = v;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_preset_is_identity() {
        let base = QuantizationConfig {
            target_width: 42,
            brightness: 1.3,
            ..QuantizationConfig::default()
        };
        assert_eq!(ConfigPreset::CUSTOM.apply(base.clone()), base);
    }

    #[test]
    fn kid_friendly_overrides_style_only() {
        let base = QuantizationConfig {
            target_width: 64,
            maintain_aspect: false,
            ..QuantizationConfig::default()
        };
        let config = ConfigPreset::KID_FRIENDLY.apply(base);
        assert_eq!(config.target_width, 64);
        assert!(!config.maintain_aspect);
        assert_eq!(config.palette.chars().count(), 8);
        assert_eq!(config.brightness, 1.5);
        assert_eq!(config.contrast, 0.8);
        assert_eq!(config.richness, 5);
    }

    #[test]
    fn preset_names_are_unique() {
        for (i, a) in ConfigPreset::ALL.iter().enumerate() {
            for b in &ConfigPreset::ALL[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
