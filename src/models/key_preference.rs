/// Sharp or flat spelling preference
///
/// Derived from a key signature (or a chord root) through a fixed table:
/// seven sharp keys, seven flat keys. Anything else prefers sharps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SHARP_KEYS: [&str; 7] = ["G", "D", "A", "E", "B", "F#", "C#"];
const FLAT_KEYS: [&str; 7] = ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPreference {
    #[default]
    Sharp,
    Flat,
}

/// A preference string that is neither "sharp" nor "flat"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid key preference: '{0}'. Expected 'sharp' or 'flat'")]
pub struct PreferenceParseError(pub String);

impl KeyPreference {
    /// Preference implied by a key signature such as "D major" or "Bb".
    ///
    /// Only the leading token up to the first space is compared.
    pub fn from_key(key: &str) -> Self {
        let root = key.split_whitespace().next().unwrap_or("");

        if FLAT_KEYS.contains(&root) {
            KeyPreference::Flat
        } else {
            if !root.is_empty() && !SHARP_KEYS.contains(&root) && root != "C" {
                log::trace!("key '{}' not in preference table, using sharps", key);
            }
            KeyPreference::Sharp
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyPreference::Sharp => "sharp",
            KeyPreference::Flat => "flat",
        }
    }
}

impl fmt::Display for KeyPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KeyPreference {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sharp" | "#" | "♯" => Ok(KeyPreference::Sharp),
            "flat" | "b" | "♭" => Ok(KeyPreference::Flat),
            _ => Err(PreferenceParseError(s.to_string())),
        }
    }
}
