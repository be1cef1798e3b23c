//! Models module for the chord sheet engine
//!
//! Pitch classes, spelling preferences, chords and rendered lines.
//! Everything here is a plain value type.

pub mod pitch;
pub mod key_preference;
pub mod chord;
pub mod rendered_line;
pub mod settings;

// Re-export commonly used types
pub use pitch::{Pitch, FLAT_SPELLINGS, SHARP_SPELLINGS};
pub use key_preference::{KeyPreference, PreferenceParseError};
pub use chord::{Accidental, BassNote, Chord, NoteName, ParsedChord};
pub use rendered_line::{PlacedChord, RenderedLine};
pub use settings::{ChordHighlight, SheetSettings, SheetSettingsBuilder};
