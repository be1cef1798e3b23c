//! Chord grammar failures
//!
//! Every way a token can fail the chord grammar is listed here. Positions are
//! byte offsets into the token body (after bracket stripping).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    /// Nothing left after trimming and bracket stripping
    #[error("Empty chord token")]
    Empty,

    /// Only one of the surrounding brackets is present
    #[error("Unbalanced brackets in chord token '{0}'")]
    UnbalancedBrackets(String),

    /// First character is not a note letter A-G
    #[error("Expected root note A-G, found '{found}'")]
    MissingRoot { found: char },

    /// `add` not followed by digits
    #[error("Expected digits after 'add' at position {position}")]
    IncompleteAdd { position: usize },

    /// `#` or `b` alteration not followed by digits
    #[error("Expected digits after alteration '{accidental}' at position {position}")]
    IncompleteAlteration { accidental: char, position: usize },

    /// `/` not followed by a note letter
    #[error("Expected bass note after '/' at position {position}")]
    InvalidBass { position: usize },

    /// Text left over after a complete chord
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
}

pub type ChordParseResult<T> = Result<T, ChordParseError>;
