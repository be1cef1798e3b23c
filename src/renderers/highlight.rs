//! Chord decoration for HTML output
//!
//! Works from the positions recorded by the layout pass; nothing is rescanned.
//! Only tokens that parse as chords are wrapped. Other bracket annotations
//! (`[Repeat x2]`, `[N.C.]`) and padding are escaped and left unwrapped.

use crate::models::{ChordHighlight, PlacedChord};
use crate::parse::{is_chord, scan_chord_tokens};
use crate::utils::escape_html;

fn is_wrappable(token: &str) -> bool {
    token == token.trim() && is_chord(token)
}

fn wrap(token: &str, highlight: ChordHighlight) -> String {
    match highlight {
        ChordHighlight::None => token.to_string(),
        ChordHighlight::Span => format!(r#"<span class="chord">{}</span>"#, token),
        ChordHighlight::SpanWithData => format!(
            r#"<span class="chord" data-chord="[{}]">{}</span>"#,
            token, token
        ),
    }
}

/// Build the chord layer from placed chords.
///
/// With `ChordHighlight::None` this is the plain aligned text.
pub fn render_chord_layer(chords: &[PlacedChord], highlight: ChordHighlight) -> String {
    let mut out = String::new();
    let mut width = 0;

    for chord in chords {
        if chord.column > width {
            out.push_str(&" ".repeat(chord.column - width));
        }

        match highlight {
            ChordHighlight::None => out.push_str(&chord.token),
            _ if is_wrappable(&chord.token) => out.push_str(&wrap(&chord.token, highlight)),
            _ => out.push_str(&escape_html(&chord.token)),
        }
        width = chord.column.max(width) + chord.width();
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Wrap every bracketed chord in free text, brackets included.
///
/// Text outside the chords is escaped when a span mode is requested.
pub fn highlight_chords(text: &str, highlight: ChordHighlight) -> String {
    if highlight == ChordHighlight::None {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for token in scan_chord_tokens(text) {
        out.push_str(&escape_html(&text[last..token.start]));
        let bracketed = token.bracketed(text);
        out.push_str(&match highlight {
            ChordHighlight::SpanWithData => format!(
                r#"<span class="chord" data-chord="{}">{}</span>"#,
                bracketed, bracketed
            ),
            _ => format!(r#"<span class="chord">{}</span>"#, bracketed),
        });
        last = token.end;
    }
    out.push_str(&escape_html(&text[last..]));
    out
}
