/// Chromatic pitch classes and their two spellings
///
/// A pitch class is an integer 0-11 (C = 0). It can be displayed with
/// either the sharp-preferring set or the flat-preferring set:
///
///   index:  0  1   2  3   4  5  6   7  8   9  10  11
///   sharp:  C  C#  D  D#  E  F  F#  G  G#  A  A#  B
///   flat:   C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
///
/// Spellings outside both sets (B#, E#, Cb, Fb) are reached through the
/// enharmonic table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::key_preference::KeyPreference;

/// Number of pitch classes in the chromatic scale
pub const SEMITONES: i32 = 12;

/// Sharp-preferring spellings, indexed by pitch class
pub const SHARP_SPELLINGS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferring spellings, indexed by pitch class
pub const FLAT_SPELLINGS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Accidental spelling → opposite-accidental spelling
static ENHARMONICS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("B#", "C"),
        ("E#", "F"),
        ("Cb", "B"),
        ("Fb", "E"),
        ("Db", "C#"),
        ("Eb", "D#"),
        ("Gb", "F#"),
        ("Ab", "G#"),
        ("Bb", "A#"),
        ("C#", "Db"),
        ("D#", "Eb"),
        ("F#", "Gb"),
        ("G#", "Ab"),
        ("A#", "Bb"),
    ])
});

/// Look up the opposite-accidental spelling of a pitch name
pub fn enharmonic(name: &str) -> Option<&'static str> {
    ENHARMONICS.get(name).copied()
}

/// Spelling set for a preference
pub fn spellings(prefer: KeyPreference) -> &'static [&'static str; 12] {
    match prefer {
        KeyPreference::Sharp => &SHARP_SPELLINGS,
        KeyPreference::Flat => &FLAT_SPELLINGS,
    }
}

/// A pitch class, 0 (C) through 11 (B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pitch(u8);

impl Pitch {
    /// Build a pitch class from any integer, wrapping modulo 12
    pub fn from_index(index: i32) -> Self {
        Pitch(index.rem_euclid(SEMITONES) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Resolve a pitch name against the spelling set of `prefer`.
    ///
    /// A name absent from the active set is first normalised through the
    /// enharmonic table. Returns `None` for anything still unknown.
    pub fn resolve(name: &str, prefer: KeyPreference) -> Option<Self> {
        let set = spellings(prefer);
        let name = name.trim();

        let position = set.iter().position(|s| *s == name).or_else(|| {
            let alternate = enharmonic(name)?;
            set.iter().position(|s| *s == alternate)
        })?;

        Some(Pitch(position as u8))
    }

    /// Resolve a pitch name in either spelling set
    pub fn from_name(name: &str) -> Option<Self> {
        Self::resolve(name, KeyPreference::Sharp)
            .or_else(|| Self::resolve(name, KeyPreference::Flat))
    }

    /// Shift by `steps` semitones; negative steps wrap downwards
    pub fn transpose(self, steps: i32) -> Self {
        Pitch::from_index(self.0 as i32 + steps.rem_euclid(SEMITONES))
    }

    pub fn spelling(self, prefer: KeyPreference) -> &'static str {
        spellings(prefer)[self.0 as usize]
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelling(KeyPreference::Sharp))
    }
}
