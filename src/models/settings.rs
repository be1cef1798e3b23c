//! Rendering settings for a chord sheet

use serde::{Deserialize, Serialize};

use super::key_preference::KeyPreference;

/// How chord tokens in the chord layer are decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordHighlight {
    /// Plain text
    None,
    /// `<span class="chord">C</span>`
    #[default]
    Span,
    /// As `Span`, plus `data-chord="[C]"` for client-side transposition
    SpanWithData,
}

/// Settings for `prepare_document`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetSettings {
    /// Semitone offset, any sign or magnitude
    pub transpose_steps: i32,

    /// Explicit spelling preference for transposed chords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer: Option<KeyPreference>,

    /// Key signature of the song (e.g. "D major"), used when `prefer` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    pub highlight: ChordHighlight,
}

impl SheetSettings {
    pub fn builder() -> SheetSettingsBuilder {
        SheetSettingsBuilder::default()
    }

    /// Preference applied to every chord, if any.
    ///
    /// An explicit preference wins over the key signature. `None` means each
    /// chord infers its own from its root.
    pub fn effective_preference(&self) -> Option<KeyPreference> {
        self.prefer
            .or_else(|| self.key.as_deref().map(KeyPreference::from_key))
    }
}

/// Builder for SheetSettings
#[derive(Debug, Default)]
pub struct SheetSettingsBuilder {
    settings: SheetSettings,
}

impl SheetSettingsBuilder {
    pub fn transpose_steps(mut self, steps: i32) -> Self {
        self.settings.transpose_steps = steps;
        self
    }

    pub fn prefer(mut self, prefer: Option<KeyPreference>) -> Self {
        self.settings.prefer = prefer;
        self
    }

    pub fn key<S: Into<String>>(mut self, key: S) -> Self {
        self.settings.key = Some(key.into());
        self
    }

    pub fn highlight(mut self, highlight: ChordHighlight) -> Self {
        self.settings.highlight = highlight;
        self
    }

    pub fn build(self) -> SheetSettings {
        self.settings
    }
}
