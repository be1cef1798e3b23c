//! Transposition of pitches, chords and whole chord sheets
//!
//! All arithmetic is modulo 12; negative steps wrap downwards.

pub mod pitch;
pub mod chord;
pub mod document;

pub use pitch::transpose_pitch;
pub use chord::{transpose_chord, transpose_parsed};
pub use document::transpose_document;
