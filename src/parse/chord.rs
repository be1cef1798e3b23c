//! Hand-written chord scanner
//!
//! Grammar:
//!
//! ```text
//! chord      := root quality? extension bass?
//! root       := [A-G] ('#' | 'b')?
//! quality    := 'maj' | 'min' | 'sus' | 'dim' | 'aug' | 'm'
//! extension  := digit* ('add' digit+)? (('#' | 'b') digit+)*
//! bass       := '/' [A-G] ('#' | 'b')? digit*
//! ```
//!
//! Quality keywords are tried longest first and the root accidental is taken
//! greedily, so the scanner never backtracks. The returned quality string is
//! the quality keyword followed by the extension text, verbatim.

use std::str::FromStr;

use crate::models::{Accidental, BassNote, Chord, NoteName, ParsedChord};
use super::errors::{ChordParseError, ChordParseResult};

/// Quality keywords, longest first
const QUALITIES: [&str; 6] = ["maj", "min", "sus", "dim", "aug", "m"];

/// Strip one pair of surrounding square brackets, if both are present
pub fn strip_brackets(token: &str) -> &str {
    let token = token.trim();
    token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(token)
}

/// Cursor over a chord body
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.src[self.pos..].starts_with(keyword) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    fn eat_digits(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn note_name(&mut self) -> Option<NoteName> {
        let letter = self.peek().filter(|&c| matches!(c, 'A'..='G'))?;
        self.bump();
        let accidental = self.peek().and_then(Accidental::from_char);
        if accidental.is_some() {
            self.bump();
        }
        Some(NoteName::new(letter, accidental))
    }

    fn quality(&mut self) -> &'a str {
        let start = self.pos;
        for keyword in QUALITIES {
            if self.eat_keyword(keyword) {
                break;
            }
        }
        &self.src[start..self.pos]
    }

    fn extension(&mut self) -> ChordParseResult<&'a str> {
        let start = self.pos;
        self.eat_digits();

        if self.eat_keyword("add") {
            let position = self.pos;
            if self.eat_digits().is_empty() {
                return Err(ChordParseError::IncompleteAdd { position });
            }
        }

        while let Some(accidental) = self.peek().filter(|&c| matches!(c, '#' | 'b')) {
            let position = self.pos;
            self.bump();
            if self.eat_digits().is_empty() {
                return Err(ChordParseError::IncompleteAlteration { accidental, position });
            }
        }

        Ok(&self.src[start..self.pos])
    }

    fn bass(&mut self) -> ChordParseResult<Option<BassNote>> {
        if self.peek() != Some('/') {
            return Ok(None);
        }
        self.bump();
        let position = self.pos;
        let note = self
            .note_name()
            .ok_or(ChordParseError::InvalidBass { position })?;
        let octave = self.eat_digits().to_string();
        Ok(Some(BassNote { note, octave }))
    }

    fn finish(&self) -> ChordParseResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(found) => Err(ChordParseError::UnexpectedCharacter {
                found,
                position: self.pos,
            }),
        }
    }
}

impl Chord {
    /// Parse a chord token, bare (`Cmaj7/E`) or bracketed (`[Cmaj7/E]`)
    pub fn parse(token: &str) -> ChordParseResult<Chord> {
        let trimmed = token.trim();
        let body = strip_brackets(trimmed);
        if body.len() == trimmed.len() && (trimmed.starts_with('[') || trimmed.ends_with(']')) {
            return Err(ChordParseError::UnbalancedBrackets(trimmed.to_string()));
        }
        if body.is_empty() {
            return Err(ChordParseError::Empty);
        }

        let mut scanner = Scanner::new(body);
        let root = match scanner.note_name() {
            Some(root) => root,
            None => {
                let found = scanner.peek().unwrap_or(' ');
                return Err(ChordParseError::MissingRoot { found });
            }
        };
        let quality = scanner.quality();
        let extension = scanner.extension()?;
        let bass = scanner.bass()?;
        scanner.finish()?;

        Ok(Chord {
            root,
            quality: format!("{}{}", quality, extension),
            bass,
        })
    }
}

impl FromStr for Chord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}

/// Parse a chord token into its (root, quality, bass) strings.
///
/// Never fails: a token outside the grammar yields an empty triple.
pub fn parse_chord(token: &str) -> ParsedChord {
    match Chord::parse(token) {
        Ok(chord) => ParsedChord::from(&chord),
        Err(e) => {
            log::trace!("chord token '{}' passed through: {}", token, e);
            ParsedChord::default()
        }
    }
}

/// True if the token (bare or bracketed) matches the chord grammar
pub fn is_chord(token: &str) -> bool {
    Chord::parse(token).is_ok()
}
