//! Output of the line renderer

use serde::{Deserialize, Serialize};

/// One chord placed in the chord layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedChord {
    /// Column (in chars) where the token starts in the chord layer
    pub column: usize,
    /// Token text without brackets
    pub token: String,
}

impl PlacedChord {
    pub fn width(&self) -> usize {
        self.token.chars().count()
    }

    /// Original bracketed form of the token
    pub fn bracketed(&self) -> String {
        format!("[{}]", self.token)
    }
}

/// A chord line and the lyric line beneath it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedLine {
    pub chord_layer: String,
    pub lyric_layer: String,
    /// Section headers carry the verbatim header in `chord_layer`
    #[serde(default)]
    pub section: bool,
}

impl RenderedLine {
    pub fn new(chord_layer: impl Into<String>, lyric_layer: impl Into<String>) -> Self {
        Self {
            chord_layer: chord_layer.into(),
            lyric_layer: lyric_layer.into(),
            section: false,
        }
    }

    pub fn section_header(header: impl Into<String>) -> Self {
        Self {
            chord_layer: header.into(),
            lyric_layer: String::new(),
            section: true,
        }
    }

    /// Widest of the two layers, in chars
    pub fn width(&self) -> usize {
        self.chord_layer
            .chars()
            .count()
            .max(self.lyric_layer.chars().count())
    }

    pub fn as_pair(&self) -> (&str, &str) {
        (&self.chord_layer, &self.lyric_layer)
    }
}
