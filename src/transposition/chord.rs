//! Chord transposition
//!
//! Root and bass move independently by the same interval and share one
//! spelling preference. The quality suffix is carried through untouched.

use crate::models::{BassNote, Chord, KeyPreference};
use super::pitch::transpose_pitch;

/// Transpose a parsed chord.
///
/// With no explicit preference the chord's own root decides (Bb → flats,
/// D → sharps), so one document can mix spellings.
pub fn transpose_parsed(chord: &Chord, steps: i32, prefer: Option<KeyPreference>) -> String {
    let prefer = prefer.unwrap_or_else(|| chord.root.preference());

    let mut out = transpose_pitch(&chord.root.to_string(), steps, prefer);
    out.push_str(&chord.quality);

    if let Some(BassNote { note, octave }) = &chord.bass {
        out.push('/');
        out.push_str(&transpose_pitch(&note.to_string(), steps, prefer));
        out.push_str(octave);
    }
    out
}

/// Transpose a chord token, bare or bracketed.
///
/// Bracketed input comes back bracketed. A token outside the chord grammar is
/// returned exactly as given.
pub fn transpose_chord(token: &str, steps: i32, prefer: Option<KeyPreference>) -> String {
    let chord = match Chord::parse(token) {
        Ok(chord) => chord,
        Err(e) => {
            log::trace!("'{}' is not a chord ({}), leaving as-is", token, e);
            return token.to_string();
        }
    };

    let transposed = transpose_parsed(&chord, steps, prefer);
    if token.trim_start().starts_with('[') {
        format!("[{}]", transposed)
    } else {
        transposed
    }
}
