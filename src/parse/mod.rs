//! Parsing module for the chord sheet engine
//!
//! Chord grammar, bracketed-token scanning and section header detection.

pub mod errors;
pub mod chord;
pub mod tokens;
pub mod section;

// Re-export commonly used types
pub use errors::{ChordParseError, ChordParseResult};
pub use chord::{is_chord, parse_chord, strip_brackets};
pub use tokens::{extract_bracketed_chords, scan_chord_tokens, BracketedChords, ChordToken};
pub use section::is_section_header;
