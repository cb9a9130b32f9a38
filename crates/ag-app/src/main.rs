use std::io::Write;
use std::path::{Path, PathBuf};

use ag_core::config::{AppConfig, QuantizationConfig, TextConfig, load_config};
use ag_core::traits::{FontCatalog, TextRenderer};
use ag_text::FigletRenderer;
use anyhow::{Context, Result};
use clap::Parser;

pub mod batch;
pub mod cli;
pub mod export;

use cli::{Cli, Command, ImageArgs, TextArgs};

/// Fichier de config lu s'il existe et que `--config` est absent.
const DEFAULT_CONFIG_FILE: &str = "asciigen.toml";

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config (défauts → TOML)
    let config = resolve_config(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;

    // 4. Preset et flags sont appliqués par chaque commande
    match cli.command {
        Command::Image(ref args) => run_image(args, config.image),
        Command::Text(ref args) => run_text(args, config.text),
        Command::Fonts { ref fonts_dir } => {
            let dir = fonts_dir.clone().or(config.text.fonts_dir);
            run_fonts(&renderer_for(dir))
        }
    }
}

/// Explicit `--config` must exist; the fallback file is optional.
fn resolve_config(explicit: Option<&Path>, fallback: &Path) -> Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if fallback.is_file() => load_config(fallback),
        None => {
            log::debug!(
                "Pas de {} : utilisation des défauts.",
                fallback.display()
            );
            Ok(AppConfig::default())
        }
    }
}

fn renderer_for(fonts_dir: Option<PathBuf>) -> FigletRenderer {
    match fonts_dir {
        Some(dir) => FigletRenderer::with_fonts_dir(dir),
        None => FigletRenderer::new(),
    }
}

fn run_image(args: &ImageArgs, base: QuantizationConfig) -> Result<()> {
    let config = args.apply(base);
    config.validate()?;
    log::info!(
        "Largeur {} · richesse {} · luminosité {} · contraste {}",
        config.target_width,
        config.richness,
        config.brightness,
        config.contrast
    );

    let results = batch::quantize_files(&args.files, &config);

    let mut arts: Vec<(&Path, String)> = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (path, result) in args.files.iter().zip(results) {
        match result {
            Ok(grid) => arts.push((path.as_path(), grid.to_string())),
            Err(e) => {
                log::error!("{e:#}");
                failures += 1;
            }
        }
    }

    match args.output.as_deref() {
        None => {
            let joined: Vec<&str> = arts.iter().map(|(_, art)| art.as_str()).collect();
            if !joined.is_empty() {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", joined.join("\n\n"))?;
            }
        }
        Some(out) if args.files.len() > 1 => {
            if out.exists() && !out.is_dir() {
                anyhow::bail!(
                    "--output doit être un dossier pour plusieurs images : {}",
                    out.display()
                );
            }
            std::fs::create_dir_all(out)
                .with_context(|| format!("Création impossible : {}", out.display()))?;
            for (path, art) in &arts {
                export::write_art(out, &export::art_file_name(path), art)?;
            }
        }
        Some(out) => {
            for (_, art) in &arts {
                export::write_art(out, export::IMAGE_ART_FILE, art)?;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} image(s) sur {} en échec", args.files.len());
    }
    Ok(())
}

fn run_text(args: &TextArgs, base: TextConfig) -> Result<()> {
    let config = args.apply(base);
    let renderer = renderer_for(config.fonts_dir);
    let art = renderer.render(&args.text, &config.font, config.width)?;

    match args.output.as_deref() {
        Some(out) => {
            export::write_art(out, export::TEXT_ART_FILE, &art)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{art}")?;
        }
    }
    Ok(())
}

fn run_fonts(catalog: &impl FontCatalog) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for name in catalog.list_fonts() {
        writeln!(stdout, "{name}")?;
    }
    Ok(())
}
