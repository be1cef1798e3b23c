/// Pitch-name transposition
///
/// Format: (pitch name, semitones, preference) → pitch name in that spelling
///
/// Example:
///   ("C#", 1, flat)   → "D"
///   ("C", -1, sharp)  → "B"
///   ("Db", 0, sharp)  → "C#"
///   ("H", 3, sharp)   → "H"     (unknown names pass through)

use crate::models::{KeyPreference, Pitch};

/// Transpose a pitch name by `steps` semitones, spelled per `prefer`.
///
/// Empty or unknown names are returned unchanged.
pub fn transpose_pitch(pitch: &str, steps: i32, prefer: KeyPreference) -> String {
    if pitch.is_empty() {
        return String::new();
    }

    match Pitch::resolve(pitch, prefer) {
        Some(p) => p.transpose(steps).spelling(prefer).to_string(),
        None => {
            log::debug!("unknown pitch '{}' left untransposed", pitch);
            pitch.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FLAT_SPELLINGS, SHARP_SPELLINGS};

    #[test]
    fn test_known_values() {
        assert_eq!(transpose_pitch("C#", 1, KeyPreference::Flat), "D");
        assert_eq!(transpose_pitch("C", -1, KeyPreference::Sharp), "B");
        assert_eq!(transpose_pitch("A", 3, KeyPreference::Sharp), "C");
        assert_eq!(transpose_pitch("A", 1, KeyPreference::Flat), "Bb");
        assert_eq!(transpose_pitch("A", 1, KeyPreference::Sharp), "A#");
        assert_eq!(transpose_pitch("Db", 0, KeyPreference::Sharp), "C#");
        assert_eq!(transpose_pitch("E#", 0, KeyPreference::Sharp), "F");
    }

    #[test]
    fn test_empty_and_unknown_pass_through() {
        assert_eq!(transpose_pitch("", 5, KeyPreference::Sharp), "");
        assert_eq!(transpose_pitch("H", 5, KeyPreference::Sharp), "H");
        assert_eq!(transpose_pitch("X#", -2, KeyPreference::Flat), "X#");
    }

    #[test]
    fn test_octave_wrap() {
        for prefer in [KeyPreference::Sharp, KeyPreference::Flat] {
            for name in crate::models::pitch::spellings(prefer) {
                assert_eq!(transpose_pitch(name, 12, prefer), *name);
                assert_eq!(transpose_pitch(name, -12, prefer), *name);
                assert_eq!(transpose_pitch(name, 120, prefer), *name);
            }
        }
    }

    #[test]
    fn test_inverse_round_trip_within_spelling() {
        for (prefer, set) in [
            (KeyPreference::Sharp, SHARP_SPELLINGS),
            (KeyPreference::Flat, FLAT_SPELLINGS),
        ] {
            for name in set {
                for steps in -30..=30 {
                    let there = transpose_pitch(name, steps, prefer);
                    assert_eq!(transpose_pitch(&there, -steps, prefer), name);
                }
            }
        }
    }
}
