//! Quantization of several image files in parallel.

use std::path::{Path, PathBuf};

use ag_ascii::quantize;
use ag_core::config::QuantizationConfig;
use ag_core::frame::CharacterGrid;
use ag_source::image::load_image;
use anyhow::{Context, Result};
use rayon::prelude::*;

/// Decode and quantize one file.
///
/// # Errors
/// Decode failures and quantizer errors, with the path as context.
pub fn quantize_file(path: &Path, config: &QuantizationConfig) -> Result<CharacterGrid> {
    let image = load_image(path)?;
    let grid = quantize(&image, config)
        .with_context(|| format!("Quantification impossible : {}", path.display()))?;
    log::debug!(
        "{} → {}×{} caractères",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// Quantize every file with the same configuration.
///
/// One result per input, in input order. A failing file does not stop the
/// others.
#[must_use]
pub fn quantize_files(
    files: &[PathBuf],
    config: &QuantizationConfig,
) -> Vec<Result<CharacterGrid>> {
    log::info!("Quantification de {} image(s)", files.len());
    files
        .par_iter()
        .map(|path| quantize_file(path, config))
        .collect()
}
