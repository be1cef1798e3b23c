//! Bracketed chord token scanner
//!
//! Finds `[Chord]` occurrences in free text. Only bracket pairs whose body
//! matches the chord grammar count; `[Repeat x2]` or a stray `[` is ordinary
//! text. A token never spans a line break or contains another `[`.

use serde::Serialize;

use super::chord::is_chord;

/// A bracketed chord found in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordToken<'a> {
    /// Byte offset of the opening bracket
    pub start: usize,
    /// Byte offset one past the closing bracket
    pub end: usize,
    /// Chord text between the brackets
    pub inner: &'a str,
}

impl<'a> ChordToken<'a> {
    /// Full token including brackets
    pub fn bracketed<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}

/// Iterator over bracketed chords, left to right
pub struct BracketedChords<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> BracketedChords<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for BracketedChords<'a> {
    type Item = ChordToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(offset) = self.text[self.pos..].find('[') {
            let open = self.pos + offset;
            let body_start = open + 1;
            let rest = &self.text[body_start..];

            match rest.find(|c: char| matches!(c, ']' | '[' | '\n')) {
                Some(len) if rest[len..].starts_with(']') => {
                    let inner = &rest[..len];
                    let end = body_start + len + 1;
                    if inner == inner.trim() && is_chord(inner) {
                        self.pos = end;
                        return Some(ChordToken { start: open, end, inner });
                    }
                    self.pos = body_start;
                }
                Some(_) => self.pos = body_start,
                None => {
                    self.pos = self.text.len();
                    return None;
                }
            }
        }
        self.pos = self.text.len();
        None
    }
}

/// Every bracketed chord in `text`, in order
pub fn scan_chord_tokens(text: &str) -> BracketedChords<'_> {
    BracketedChords::new(text)
}

/// Text of every bracketed chord in `text`, without brackets
pub fn extract_bracketed_chords(text: &str) -> Vec<String> {
    scan_chord_tokens(text)
        .map(|token| token.inner.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        let text = "[C]Amazing [G/B]grace, how [Am7]sweet";
        assert_eq!(extract_bracketed_chords(text), vec!["C", "G/B", "Am7"]);
    }

    #[test]
    fn test_offsets_cover_brackets() {
        let text = "la [Dm] la";
        let token = scan_chord_tokens(text).next().unwrap();
        assert_eq!(token.start, 3);
        assert_eq!(token.end, 7);
        assert_eq!(token.bracketed(text), "[Dm]");
        assert_eq!(token.inner, "Dm");
    }

    #[test]
    fn test_skips_non_chord_brackets() {
        let text = "[Repeat x2] [C] [ D ] [x]";
        assert_eq!(extract_bracketed_chords(text), vec!["C"]);
    }

    #[test]
    fn test_nested_open_bracket_restarts() {
        assert_eq!(extract_bracketed_chords("[[C]"), vec!["C"]);
        assert_eq!(extract_bracketed_chords("[a[E7]b"), vec!["E7"]);
    }

    #[test]
    fn test_does_not_cross_lines() {
        assert!(extract_bracketed_chords("[C\n]").is_empty());
        assert_eq!(extract_bracketed_chords("[C\n[F]"), vec!["F"]);
    }

    #[test]
    fn test_unclosed_bracket() {
        assert!(extract_bracketed_chords("no chords [here").is_empty());
        assert!(extract_bracketed_chords("").is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        let text = "Ça [Em]va très [A]bien ♪";
        assert_eq!(extract_bracketed_chords(text), vec!["Em", "A"]);
    }
}
