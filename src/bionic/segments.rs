//! Word splitting for bionic reading

use regex::Regex;
use std::sync::LazyLock;

/// An ASCII letter followed by letters, apostrophes or hyphens
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z'’-]*").expect("BUG: hardcoded word regex is statically valid")
});

/// A run of text that is either emphasized or left plain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Bold(String),
    Plain(String),
}

/// Number of leading characters to emphasize in a word of `length` characters
#[must_use]
pub fn emphasis_length(length: usize) -> usize {
    match length {
        0..=3 => 1,
        4..=6 => 2,
        7..=10 => 3,
        _ => 4,
    }
}

/// Split `text` into alternating bold prefixes and plain runs
///
/// Adjacent plain text (a word's suffix and the punctuation or spaces after
/// it) is merged into one segment. Returns an empty vector when `text`
/// contains no word, so the caller can leave the node alone.
#[must_use]
pub fn split_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut cursor = 0;

    for word in WORD_RE.find_iter(text) {
        plain.push_str(&text[cursor..word.start()]);

        let word_text = word.as_str();
        let prefix_chars = emphasis_length(word_text.chars().count());
        let split_at = word_text
            .char_indices()
            .nth(prefix_chars)
            .map_or(word_text.len(), |(index, _)| index);

        if !plain.is_empty() {
            segments.push(Segment::Plain(std::mem::take(&mut plain)));
        }
        segments.push(Segment::Bold(word_text[..split_at].to_string()));
        plain.push_str(&word_text[split_at..]);
        cursor = word.end();
    }

    if segments.is_empty() {
        return segments;
    }

    plain.push_str(&text[cursor..]);
    if !plain.is_empty() {
        segments.push(Segment::Plain(plain));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(s: &str) -> Segment {
        Segment::Bold(s.to_string())
    }

    fn plain(s: &str) -> Segment {
        Segment::Plain(s.to_string())
    }

    #[test]
    fn test_emphasis_length_boundaries() {
        assert_eq!(emphasis_length(1), 1);
        assert_eq!(emphasis_length(3), 1);
        assert_eq!(emphasis_length(4), 2);
        assert_eq!(emphasis_length(6), 2);
        assert_eq!(emphasis_length(7), 3);
        assert_eq!(emphasis_length(10), 3);
        assert_eq!(emphasis_length(11), 4);
    }

    #[test]
    fn test_split_sentence() {
        assert_eq!(
            split_segments("Reading is fun!"),
            vec![bold("Rea"), plain("ding "), bold("i"), plain("s "), bold("f"), plain("un!")]
        );
    }

    #[test]
    fn test_leading_text_and_contractions() {
        assert_eq!(
            split_segments("  don't"),
            vec![plain("  "), bold("do"), plain("n't")]
        );
    }

    #[test]
    fn test_curly_apostrophe_counts_as_one_char() {
        assert_eq!(split_segments("it’s"), vec![bold("it"), plain("’s")]);
    }

    #[test]
    fn test_no_words() {
        assert!(split_segments("123 — 456").is_empty());
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_stay_plain() {
        assert_eq!(split_segments("café"), vec![bold("c"), plain("afé")]);
    }
}
