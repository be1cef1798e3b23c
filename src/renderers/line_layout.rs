//! Chord/lyric alignment
//!
//! Splits one source line with inline `[Chord]` markers into a chord layer and
//! a lyric layer. The lyric layer is the column grid: each chord is placed at
//! the lyric column where its marker appeared, after runs of spaces have been
//! collapsed to one.
//!
//! The scan keeps two cursors. The lyric cursor advances once per emitted lyric
//! character; chords take no lyric width. The chord cursor only ever moves
//! forward: padding is added up to the lyric column and never removed, so a
//! chord wider than the gap to the next one pushes the next one right instead
//! of overlapping it.

use serde::{Deserialize, Serialize};

use crate::models::{ChordHighlight, PlacedChord, RenderedLine};
use crate::parse::is_section_header;
use super::highlight::render_chord_layer;

/// Result of laying out one source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LineLayout {
    /// Section header, kept verbatim (trimmed)
    Section { header: String },
    /// Chords positioned above the lyric
    Aligned {
        chords: Vec<PlacedChord>,
        lyric: String,
    },
}

impl LineLayout {
    /// Render to a chord/lyric pair with the given chord decoration
    pub fn render(&self, highlight: ChordHighlight) -> RenderedLine {
        match self {
            LineLayout::Section { header } => RenderedLine::section_header(header.clone()),
            LineLayout::Aligned { chords, lyric } => {
                RenderedLine::new(render_chord_layer(chords, highlight), lyric.clone())
            }
        }
    }

    pub fn chords(&self) -> &[PlacedChord] {
        match self {
            LineLayout::Section { .. } => &[],
            LineLayout::Aligned { chords, .. } => chords,
        }
    }
}

/// Two-cursor alignment state
#[derive(Debug, Default)]
struct Aligner {
    chords: Vec<PlacedChord>,
    /// Rendered width of the chord layer so far
    chord_width: usize,
    lyric: String,
    /// Column of the next lyric character
    lyric_column: usize,
    last_was_space: bool,
}

impl Aligner {
    /// Place a chord at the current lyric column, or right after the previous
    /// chord if that one already runs past it.
    fn place_chord(&mut self, token: &str) {
        let column = self.chord_width.max(self.lyric_column);
        let placed = PlacedChord {
            column,
            token: token.to_string(),
        };
        self.chord_width = column + placed.width();
        self.chords.push(placed);
    }

    fn push_lyric(&mut self, ch: char) {
        if ch == ' ' {
            if self.last_was_space {
                return;
            }
            self.last_was_space = true;
        } else {
            self.last_was_space = false;
        }
        self.lyric.push(ch);
        self.lyric_column += 1;
    }

    fn finish(self) -> LineLayout {
        let lyric_len = self.lyric.trim_end().len();
        let mut lyric = self.lyric;
        lyric.truncate(lyric_len);
        LineLayout::Aligned {
            chords: self.chords,
            lyric,
        }
    }
}

/// Lay out one source line
pub fn layout_line(line: &str) -> LineLayout {
    if is_section_header(line) {
        return LineLayout::Section {
            header: line.trim().to_string(),
        };
    }

    let mut aligner = Aligner::default();
    let mut pos = 0;

    while let Some(ch) = line[pos..].chars().next() {
        if ch == '[' {
            if let Some(len) = line[pos + 1..].find(']') {
                let token_end = pos + 1 + len;
                aligner.place_chord(&line[pos + 1..token_end]);
                pos = token_end + 1;
                continue;
            }
        }
        aligner.push_lyric(ch);
        pos += ch.len_utf8();
    }

    aligner.finish()
}

/// Split a line into plain (chord layer, lyric layer).
///
/// Section headers come back as `(header, "")`.
pub fn split_chord_lyric_line(line: &str) -> (String, String) {
    let rendered = layout_line(line).render(ChordHighlight::None);
    (rendered.chord_layer, rendered.lyric_layer)
}
