//! Renderers for chord sheets
//!
//! - `line_layout`: chord/lyric alignment of a single line
//! - `highlight`: HTML decoration of chord tokens
//! - `sheet`: the whole-document pipeline
//! - `text`: plain-text export and column metrics

pub mod line_layout;
pub mod highlight;
pub mod sheet;
pub mod text;

pub use line_layout::{layout_line, split_chord_lyric_line, LineLayout};
pub use highlight::{highlight_chords, render_chord_layer};
pub use sheet::{prepare_document, process_song_text};
pub use text::{column_width, render_text, DEFAULT_COLUMN_PADDING};
