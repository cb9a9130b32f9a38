//! Plain-text export of generated art.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Nom par défaut d'une grille exportée.
pub const IMAGE_ART_FILE: &str = "image_art.txt";

/// Nom par défaut d'un rendu texte exporté.
pub const TEXT_ART_FILE: &str = "text_art.txt";

/// Type MIME des fichiers produits.
pub const MIME_TYPE: &str = "text/plain";

/// Write `art` as UTF-8 text with a trailing newline.
///
/// When `target` is an existing directory, `default_name` is appended to it.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_art(target: &Path, default_name: &str, art: &str) -> Result<PathBuf> {
    let path = if target.is_dir() {
        target.join(default_name)
    } else {
        target.to_path_buf()
    };

    let mut content = String::with_capacity(art.len() + 1);
    content.push_str(art);
    if !content.ends_with('\n') {
        content.push('\n');
    }
    std::fs::write(&path, content)
        .with_context(|| format!("Écriture impossible : {}", path.display()))?;

    log::info!("Art exporté ({MIME_TYPE}) vers {}", path.display());
    Ok(path)
}

/// `<stem>_art.txt` for one source image of a batch.
#[must_use]
pub fn art_file_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    format!("{stem}_art.txt")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn directory_gets_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_art(dir.path(), IMAGE_ART_FILE, "@@\n..").unwrap();
        assert_eq!(path, dir.path().join(IMAGE_ART_FILE));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "@@\n..\n");
    }

    #[test]
    fn explicit_file_is_used_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("banner.txt");
        let path = write_art(&target, TEXT_ART_FILE, "hi\n").unwrap();
        assert_eq!(path, target);
        // Pas de double saut de ligne.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi\n");
    }

    #[test]
    fn unicode_is_written_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_art(dir.path(), IMAGE_ART_FILE, "🤍🖤").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), "🤍🖤\n".as_bytes());
    }

    #[test]
    fn missing_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("absent").join("out.txt");
        assert!(write_art(&target, IMAGE_ART_FILE, "x").is_err());
    }

    #[test]
    fn batch_names_follow_stem() {
        assert_eq!(art_file_name(Path::new("photos/chat.png")), "chat_art.txt");
        assert_eq!(art_file_name(Path::new("/")), "image_art.txt");
    }
}
