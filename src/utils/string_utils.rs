//! UTF-8-safe string helpers
//!
//! Every length in this crate is counted in Unicode scalar values, never in
//! bytes, so multi-byte headings and previews never split a character.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("BUG: hardcoded whitespace regex is statically valid")
});

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use entry_content::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("🎉🎊🎈", 2), "🎉🎊");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Number of characters in `s`
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Collapse every whitespace run to a single space and trim both ends
///
/// ```
/// # use entry_content::utils::string_utils::normalize_whitespace;
/// assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
/// ```
pub fn normalize_whitespace(s: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(s, " ").trim().to_string()
}

/// True when `s` is non-empty after trimming and holds nothing but ASCII
/// digits and whitespace (a line-number gutter such as `"1\n2\n3"`)
pub fn is_numeric_text(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(safe_truncate_chars("┌─┐┌─┐", 3), "┌─┐");
        assert_eq!(safe_truncate_chars("", 3), "");
    }

    #[test]
    fn test_normalize_whitespace_unicode_spaces() {
        assert_eq!(normalize_whitespace("a\u{00a0}\u{2003}b"), "a b");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_numeric_text() {
        assert!(is_numeric_text("42"));
        assert!(is_numeric_text(" 1\n2\n3 "));
        assert!(!is_numeric_text(""));
        assert!(!is_numeric_text("   "));
        assert!(!is_numeric_text("1."));
        assert!(!is_numeric_text("step 1"));
    }
}
