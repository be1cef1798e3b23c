//! Chord sheet pipeline
//!
//! normalise spacing → transpose (if asked) → lay out each non-blank line.
//! The output order is the source line order.

use crate::models::{ChordHighlight, RenderedLine, SheetSettings};
use crate::transposition::transpose_document;
use crate::utils::normalise_spacing;
use super::line_layout::layout_line;

/// Lay out every non-blank line of already-prepared text
pub fn process_song_text(text: &str, highlight: ChordHighlight) -> Vec<RenderedLine> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| layout_line(line).render(highlight))
        .collect()
}

/// Prepare raw chord sheet text for display.
///
/// `None` settings means no transposition, per-chord spelling inference and
/// span-highlighted chords.
pub fn prepare_document(raw_text: &str, settings: Option<SheetSettings>) -> Vec<RenderedLine> {
    let settings = settings.unwrap_or_default();

    let mut text = normalise_spacing(raw_text);
    if settings.transpose_steps != 0 {
        text = transpose_document(&text, settings.transpose_steps, settings.effective_preference());
    }

    let lines = process_song_text(&text, settings.highlight);
    log::debug!(
        "prepared {} lines (steps={}, highlight={:?})",
        lines.len(),
        settings.transpose_steps,
        settings.highlight
    );
    lines
}
