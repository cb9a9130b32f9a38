use std::path::PathBuf;

use ag_core::charset::{CHARSET_COMPACT, CHARSET_CUSTOM, CHARSET_EMOJI, CHARSET_STANDARD};
use ag_core::config::{
    FACTOR_RANGE, IMAGE_WIDTH_RANGE, QuantizationConfig, RICHNESS_RANGE, ResampleFilter,
    TEXT_WIDTH_RANGE, TextConfig,
};
use ag_core::preset::ConfigPreset;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// asciigen : images et texte en art de caractères.
#[derive(Parser, Debug)]
#[command(name = "asciigen", version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML. Défaut : asciigen.toml s'il existe.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convertir une ou plusieurs images en grille de caractères.
    Image(ImageArgs),
    /// Rendre du texte en grandes lettres FIGlet.
    Text(TextArgs),
    /// Lister les polices disponibles.
    Fonts {
        /// Dossier contenant des polices `*.flf`.
        #[arg(long)]
        fonts_dir: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Images source (PNG, JPEG, BMP, GIF).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Largeur de la grille, en caractères.
    #[arg(short, long, value_parser = clap::value_parser!(u32)
        .range(i64::from(IMAGE_WIDTH_RANGE.0)..=i64::from(IMAGE_WIDTH_RANGE.1)))]
    pub width: Option<u32>,

    /// Palette explicite, du plus sombre au plus clair.
    #[arg(long, conflicts_with = "charset")]
    pub palette: Option<String>,

    /// Palette intégrée.
    #[arg(long, value_enum)]
    pub charset: Option<Charset>,

    /// Facteur de luminosité (1.0 = neutre).
    #[arg(long, value_parser = parse_factor)]
    pub brightness: Option<f32>,

    /// Facteur de contraste (1.0 = neutre).
    #[arg(long, value_parser = parse_factor)]
    pub contrast: Option<f32>,

    /// Nombre de dixièmes de la palette conservés.
    #[arg(long, value_parser = clap::value_parser!(u8)
        .range(i64::from(RICHNESS_RANGE.0)..=i64::from(RICHNESS_RANGE.1)))]
    pub richness: Option<u8>,

    /// Ne pas compenser la hauteur des cellules de police.
    #[arg(long)]
    pub no_aspect: bool,

    /// Preset de style : custom, kid-friendly, retro.
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<ConfigPreset>,

    /// Filtre de rééchantillonnage.
    #[arg(long, value_enum)]
    pub filter: Option<Filter>,

    /// Fichier ou dossier de sortie. Obligatoirement un dossier pour plusieurs images.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TextArgs {
    /// Texte à rendre.
    pub text: String,

    /// Nom de police (voir `asciigen fonts`).
    #[arg(long)]
    pub font: Option<String>,

    /// Largeur maximale, en colonnes.
    #[arg(short, long, value_parser = clap::value_parser!(u32)
        .range(i64::from(TEXT_WIDTH_RANGE.0)..=i64::from(TEXT_WIDTH_RANGE.1)))]
    pub width: Option<u32>,

    /// Dossier contenant des polices `*.flf`.
    #[arg(long)]
    pub fonts_dir: Option<PathBuf>,

    /// Fichier ou dossier de sortie.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Palettes intégrées sélectionnables en ligne de commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Charset {
    Ascii,
    Emoji,
    Custom,
    Compact,
}

impl Charset {
    /// Glyphes de la palette.
    #[must_use]
    pub fn glyphs(self) -> &'static str {
        match self {
            Self::Ascii => CHARSET_STANDARD,
            Self::Emoji => CHARSET_EMOJI,
            Self::Custom => CHARSET_CUSTOM,
            Self::Compact => CHARSET_COMPACT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    Box,
    Bilinear,
    Nearest,
}

impl From<Filter> for ResampleFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Box => ResampleFilter::Box,
            Filter::Bilinear => ResampleFilter::Bilinear,
            Filter::Nearest => ResampleFilter::Nearest,
        }
    }
}

impl ImageArgs {
    /// Apply the preset, then every explicit flag, over `base`.
    #[must_use]
    pub fn apply(&self, base: QuantizationConfig) -> QuantizationConfig {
        let mut config = match self.preset {
            Some(preset) => preset.apply(base),
            None => base,
        };
        if let Some(width) = self.width {
            config.target_width = width;
        }
        if let Some(ref palette) = self.palette {
            config.palette.clone_from(palette);
        } else if let Some(charset) = self.charset {
            config.palette = charset.glyphs().to_string();
        }
        if let Some(v) = self.brightness {
            config.brightness = v;
        }
        if let Some(v) = self.contrast {
            config.contrast = v;
        }
        if let Some(v) = self.richness {
            config.richness = v;
        }
        if self.no_aspect {
            config.maintain_aspect = false;
        }
        if let Some(filter) = self.filter {
            config.resample = filter.into();
        }
        config
    }
}

impl TextArgs {
    /// Explicit flags over `base`.
    #[must_use]
    pub fn apply(&self, mut base: TextConfig) -> TextConfig {
        if let Some(ref font) = self.font {
            base.font.clone_from(font);
        }
        if let Some(width) = self.width {
            base.width = width;
        }
        if let Some(ref dir) = self.fonts_dir {
            base.fonts_dir = Some(dir.clone());
        }
        base
    }
}

fn parse_factor(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("« {s} » n'est pas un nombre"))?;
    let (lo, hi) = FACTOR_RANGE;
    if !(lo..=hi).contains(&value) {
        return Err(format!("{value} hors de [{lo}, {hi}]"));
    }
    Ok(value)
}

fn parse_preset(s: &str) -> Result<ConfigPreset, String> {
    ConfigPreset::by_name(s).ok_or_else(|| {
        let names: Vec<&str> = ConfigPreset::ALL.iter().map(|p| p.name).collect();
        format!("preset inconnu « {s} » (disponibles : {})", names.join(", "))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn image_args(argv: &[&str]) -> ImageArgs {
        let mut full = vec!["asciigen", "image"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Image(args) => args,
            other => panic!("attendu image, reçu {other:?}"),
        }
    }

    #[test]
    fn image_flags_override_defaults() {
        let args = image_args(&[
            "a.png",
            "--width",
            "60",
            "--charset",
            "compact",
            "--brightness",
            "1.5",
            "--richness",
            "3",
            "--no-aspect",
            "--filter",
            "nearest",
        ]);
        let config = args.apply(QuantizationConfig::default());
        assert_eq!(config.target_width, 60);
        assert_eq!(config.palette, CHARSET_COMPACT);
        assert!((config.brightness - 1.5).abs() < f32::EPSILON);
        assert!((config.contrast - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.richness, 3);
        assert!(!config.maintain_aspect);
        assert_eq!(config.resample, ResampleFilter::Nearest);
    }

    #[test]
    fn flags_win_over_preset() {
        let args = image_args(&["a.png", "--preset", "retro", "--richness", "10"]);
        let config = args.apply(QuantizationConfig::default());
        assert_eq!(config.palette, CHARSET_COMPACT);
        assert!((config.brightness - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.richness, 10);
    }

    #[test]
    fn several_files_are_accepted() {
        let args = image_args(&["a.png", "b.jpg", "c.gif"]);
        assert_eq!(args.files.len(), 3);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for argv in [
            vec!["asciigen", "image", "a.png", "--width", "29"],
            vec!["asciigen", "image", "a.png", "--width", "201"],
            vec!["asciigen", "image", "a.png", "--brightness", "2.5"],
            vec!["asciigen", "image", "a.png", "--contrast", "0.1"],
            vec!["asciigen", "image", "a.png", "--richness", "0"],
            vec!["asciigen", "image", "a.png", "--preset", "vaporwave"],
            vec!["asciigen", "text", "hi", "--width", "20"],
        ] {
            assert!(Cli::try_parse_from(argv.iter().copied()).is_err(), "{argv:?}");
        }
    }

    #[test]
    fn palette_conflicts_with_charset() {
        let argv = ["asciigen", "image", "a.png", "--palette", "ab", "--charset", "emoji"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn image_requires_a_file() {
        assert!(Cli::try_parse_from(["asciigen", "image"]).is_err());
    }

    #[test]
    fn text_flags_override_config() {
        let cli = Cli::try_parse_from([
            "asciigen",
            "text",
            "Bonjour",
            "--font",
            "slant",
            "--width",
            "100",
            "--fonts-dir",
            "fonts",
        ])
        .unwrap();
        let Command::Text(args) = cli.command else {
            panic!("attendu text");
        };
        assert_eq!(args.text, "Bonjour");
        let config = args.apply(TextConfig::default());
        assert_eq!(config.font, "slant");
        assert_eq!(config.width, 100);
        assert_eq!(config.fonts_dir, Some(PathBuf::from("fonts")));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["asciigen", "fonts", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Fonts { fonts_dir: None }));
    }

    #[test]
    fn charset_glyphs() {
        assert_eq!(Charset::Ascii.glyphs(), CHARSET_STANDARD);
        assert_eq!(Charset::Emoji.glyphs(), CHARSET_EMOJI);
        assert_eq!(Charset::Custom.glyphs(), CHARSET_CUSTOM);
    }
}
