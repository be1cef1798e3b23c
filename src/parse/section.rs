//! Section header recognition
//!
//! A line is a section header when its first word, with a trailing colon
//! removed and compared case-insensitively, is one of the section keywords.
//! "Pre Chorus" is two words, so the first two words are also checked.

const SECTION_KEYWORDS: [&str; 10] = [
    "intro",
    "verse",
    "melody",
    "prechorus",
    "pre-chorus",
    "pre chorus",
    "chorus",
    "interlude",
    "outro",
    "bridge",
];

fn is_keyword(word: &str) -> bool {
    let word = word.trim_end_matches(':').to_lowercase();
    SECTION_KEYWORDS.contains(&word.as_str())
}

/// True if `line` starts with a section keyword ("Verse 2:", "chorus", ...)
pub fn is_section_header(line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return false;
    };
    if is_keyword(first) {
        return true;
    }
    match words.next() {
        Some(second) => is_keyword(&format!("{} {}", first, second)),
        None => false,
    }
}
