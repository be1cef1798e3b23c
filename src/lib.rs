//! Chord Sheet WASM Module
//!
//! Parses inline chord markup (`[C]Hello [G]world`), transposes chords and
//! lays out each line as a chord layer above a lyric layer, with every chord
//! above the lyric column it annotated.
//!
//! Every operation is a pure function of its input text and parameters;
//! nothing is cached between calls.

pub mod models;
pub mod parse;
pub mod transposition;
pub mod renderers;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use parse::{extract_bracketed_chords, parse_chord, ChordParseError};
pub use transposition::{transpose_chord, transpose_document, transpose_pitch};
pub use renderers::{prepare_document, split_chord_lyric_line, LineLayout};
pub use utils::normalise_spacing;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Chord sheet WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed by the host, keeping it");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
