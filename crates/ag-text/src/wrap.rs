//! Greedy word packing for block-letter rendering.

use ag_core::CoreError;

/// Largeur d'un bloc rendu, en colonnes.
///
/// # Example
/// ```
/// use ag_text::wrap::block_width;
/// assert_eq!(block_width("ab\nabcd\n"), 4);
/// ```
#[must_use]
pub fn block_width(block: &str) -> usize {
    block.lines().map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Render `text` line by line, packing words so each rendered block stays
/// within `width` columns.
///
/// A word that is wider than `width` on its own still gets a block of its
/// own. Explicit newlines in `text` always start a new block; blank input
/// lines are skipped. Blocks are joined with `\n`, trailing newlines removed.
///
/// # Errors
/// [`CoreError::InvalidInput`] if `text` has no visible characters, or any
/// error returned by `render`.
///
/// # Example
/// ```
/// use ag_text::wrap::render_wrapped;
/// // Fake font: every character becomes two columns, one row.
/// let render = |s: &str| Ok(s.chars().map(|c| format!("{c}{c}")).collect::<String>());
/// assert_eq!(render_wrapped("ab cd", 6, render).unwrap(), "aabb\nccdd");
/// assert_eq!(render_wrapped("ab cd", 10, render).unwrap(), "aabb  ccdd");
/// ```
pub fn render_wrapped<F>(text: &str, width: u32, render: F) -> Result<String, CoreError>
where
    F: Fn(&str) -> Result<String, CoreError>,
{
    if text.trim().is_empty() {
        return Err(CoreError::InvalidInput("texte vide".to_string()));
    }
    let width = width as usize;
    let mut blocks: Vec<String> = Vec::new();

    for line in text.lines() {
        let mut current: Option<(String, String)> = None;
        for word in line.split_whitespace() {
            let candidate = match &current {
                Some((words, _)) => format!("{words} {word}"),
                None => word.to_string(),
            };
            let rendered = render(&candidate)?;

            current = match current.take() {
                Some((_, block)) if block_width(&rendered) > width => {
                    log::trace!("retour à la ligne avant « {word} »");
                    blocks.push(block);
                    Some((word.to_string(), render(word)?))
                }
                _ => Some((candidate, rendered)),
            };
        }
        if let Some((_, block)) = current {
            blocks.push(block);
        }
    }

    Ok(blocks
        .iter()
        .map(|b| b.trim_end_matches('\n'))
        .collect::<Vec<_>>()
        .join("\n"))
}
