//! Whole-document transposition
//!
//! Every bracketed chord is replaced in place. Text between chords is copied
//! verbatim; line lengths may change, alignment is redone later by the line
//! renderer.

use crate::models::{Chord, KeyPreference};
use crate::parse::scan_chord_tokens;
use super::chord::transpose_parsed;

/// Transpose every `[Chord]` in `text` by `steps` semitones
pub fn transpose_document(text: &str, steps: i32, prefer: Option<KeyPreference>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0usize;

    for token in scan_chord_tokens(text) {
        out.push_str(&text[last..token.start]);
        match Chord::parse(token.inner) {
            Ok(chord) => {
                out.push('[');
                out.push_str(&transpose_parsed(&chord, steps, prefer));
                out.push(']');
                count += 1;
            }
            Err(_) => out.push_str(token.bracketed(text)),
        }
        last = token.end;
    }
    out.push_str(&text[last..]);

    log::debug!("transposed {} chords by {} semitones", count, steps);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_chords_keeps_text() {
        let text = "[C]Amazing [G/B]grace\n[Repeat x2] [F]";
        assert_eq!(
            transpose_document(text, 2, None),
            "[D]Amazing [A/C#]grace\n[Repeat x2] [G]"
        );
    }

    #[test]
    fn test_no_chords_is_identity() {
        let text = "just words\n\n  and [brackets";
        assert_eq!(transpose_document(text, 5, None), text);
    }

    #[test]
    fn test_round_trip_under_fixed_preference() {
        let text = "[Am]There is a [C]house in [D]New Or[F]leans\n[Am]They call the [C]Rising [E7]Sun";
        for prefer in [KeyPreference::Sharp, KeyPreference::Flat] {
            let canonical = transpose_document(text, 0, Some(prefer));
            for steps in -11..=11 {
                let there = transpose_document(&canonical, steps, Some(prefer));
                let back = transpose_document(&there, -steps, Some(prefer));
                assert_eq!(back, canonical, "steps={} prefer={}", steps, prefer);
            }
        }
    }

    #[test]
    fn test_zero_steps_only_respells() {
        assert_eq!(
            transpose_document("[Db] [C#]", 0, Some(KeyPreference::Sharp)),
            "[C#] [C#]"
        );
    }
}
