//! Discovery of FIGlet fonts on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Police toujours disponible, embarquée dans le moteur FIGlet.
pub const STANDARD_FONT: &str = "standard";

/// Extension des fichiers de police FIGlet.
pub const FONT_EXTENSION: &str = "flf";

/// Scan `dir` for `*.flf` files, keyed by file stem.
///
/// Non-recursive. An unreadable directory yields an empty map and a warning;
/// the embedded standard font stays usable either way.
#[must_use]
pub fn scan_fonts_dir(dir: &Path) -> BTreeMap<String, PathBuf> {
    let mut fonts = BTreeMap::new();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Dossier de polices illisible {}: {e}", dir.display());
            return fonts;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let is_font = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FONT_EXTENSION));
        if !is_font || !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            fonts.insert(stem.to_string(), path.clone());
        }
    }
    log::debug!("{} police(s) trouvée(s) dans {}", fonts.len(), dir.display());
    fonts
}
