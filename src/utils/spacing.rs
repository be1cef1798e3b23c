//! Whitespace canonicalisation for chord sheet text
//!
//! - Trailing whitespace is removed from every line
//! - Runs of blank lines collapse to a single blank line
//! - Blank lines at the start and end of the document are dropped
//! - Line endings become `\n`
//!
//! Applying it twice gives the same result as applying it once.

/// Canonicalise spacing of a whole document
pub fn normalise_spacing(text: &str) -> String {
    let mut cleaned: Vec<&str> = Vec::new();

    for line in text.lines() {
        let stripped = line.trim_end();
        let previous_blank = cleaned.last().map_or(true, |l| l.is_empty());
        if !stripped.is_empty() || !previous_blank {
            cleaned.push(stripped);
        }
    }

    while cleaned.last().is_some_and(|l| l.is_empty()) {
        cleaned.pop();
    }

    cleaned.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_whitespace_removed() {
        assert_eq!(normalise_spacing("a  \nb\t"), "a\nb");
    }

    #[test]
    fn test_blank_runs_collapse() {
        assert_eq!(normalise_spacing("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalise_spacing("a\n   \n \t \nb"), "a\n\nb");
        assert_eq!(normalise_spacing("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_edges_and_crlf() {
        assert_eq!(normalise_spacing("\n\n a\r\n\r\n\r\nb\r\n\r\n"), " a\n\nb");
        assert_eq!(normalise_spacing(""), "");
        assert_eq!(normalise_spacing("\n \n"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "\n",
            "a\n",
            "a\n\n",
            "  x  \n\n\n y\n\n",
            "[C]Hello   \n\n\n\nChorus:\n[G]world\n",
            "\r\n\r\nlyric\r\n",
        ];
        for sample in samples {
            let once = normalise_spacing(sample);
            assert_eq!(normalise_spacing(&once), once, "sample {:?}", sample);
        }
    }
}
