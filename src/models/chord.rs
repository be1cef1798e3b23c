//! Chord value types
//!
//! A chord is `root + quality + optional /bass`. The quality is an opaque
//! suffix ("m7", "sus4", "add9", "m7b5") that transposition never looks into.
//! Chords are plain values, built fresh for each occurrence in the text.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::key_preference::KeyPreference;
use super::pitch::Pitch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A pitch as written: letter A-G plus optional single accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    pub letter: char,
    pub accidental: Option<Accidental>,
}

impl NoteName {
    pub fn new(letter: char, accidental: Option<Accidental>) -> Self {
        Self { letter, accidental }
    }

    /// Pitch class of this spelling. Every letter/accidental pair resolves,
    /// the odd ones (Cb, Fb, B#, E#) through the enharmonic table.
    pub fn pitch(&self) -> Option<Pitch> {
        Pitch::from_name(&self.to_string())
    }

    /// Spelling preference implied by this note when read as a key
    pub fn preference(&self) -> KeyPreference {
        KeyPreference::from_key(&self.to_string())
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(acc) = self.accidental {
            write!(f, "{}", acc.symbol())?;
        }
        Ok(())
    }
}

/// Bass note after the slash, with any trailing octave digits kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BassNote {
    pub note: NoteName,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub octave: String,
}

impl fmt::Display for BassNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

/// A successfully parsed chord
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub root: NoteName,
    pub quality: String,
    pub bass: Option<BassNote>,
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// The (root, quality, bass) triple as strings.
///
/// All three are empty when the token could not be parsed; callers treat an
/// empty root as "pass the original text through".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChord {
    pub root: String,
    pub quality: String,
    pub bass: String,
}

impl ParsedChord {
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl From<&Chord> for ParsedChord {
    fn from(chord: &Chord) -> Self {
        Self {
            root: chord.root.to_string(),
            quality: chord.quality.clone(),
            bass: chord.bass.as_ref().map(|b| b.to_string()).unwrap_or_default(),
        }
    }
}
