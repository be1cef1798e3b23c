//! Plain-text export and layout metrics

use crate::models::RenderedLine;

/// Padding the browser view adds to the longest line when sizing columns
pub const DEFAULT_COLUMN_PADDING: usize = 5;

/// Render lines as preformatted text: chord layer above lyric layer.
///
/// Empty layers are skipped, so chord-only and lyric-only lines take one row.
/// Expects lines rendered with `ChordHighlight::None`.
pub fn render_text(lines: &[RenderedLine]) -> String {
    let mut rows: Vec<&str> = Vec::with_capacity(lines.len() * 2);
    for line in lines {
        if !line.chord_layer.is_empty() {
            rows.push(&line.chord_layer);
        }
        if !line.lyric_layer.is_empty() {
            rows.push(&line.lyric_layer);
        }
    }
    rows.join("\n")
}

/// Width in characters of a sheet column: the widest layer plus padding.
///
/// Measure plain (unhighlighted) lines; markup would inflate the count.
pub fn column_width(lines: &[RenderedLine], extra_padding: usize) -> usize {
    lines.iter().map(RenderedLine::width).max().unwrap_or(0) + extra_padding
}
