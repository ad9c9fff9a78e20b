//! Section preview truncation

use crate::utils::{safe_truncate_chars, PREVIEW_ELLIPSIS};

/// Truncate `text` to at most `max_chars` characters plus an ellipsis
///
/// Text within the limit is returned unchanged. Longer text is cut at the
/// character boundary (never moved back to a word boundary), trailing
/// whitespace is trimmed, and a single `…` is appended.
///
/// ```
/// use entry_content::reading_toc::build_preview;
///
/// assert_eq!(build_preview("short", 110), "short");
/// assert_eq!(build_preview("abcdef ghij", 7), "abcdef…");
/// ```
#[must_use]
pub fn build_preview(text: &str, max_chars: usize) -> String {
    let truncated = safe_truncate_chars(text, max_chars);
    if truncated.len() == text.len() {
        return text.to_string();
    }

    let mut preview = truncated.trim_end().to_string();
    preview.push(PREVIEW_ELLIPSIS);
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{char_len, DEFAULT_PREVIEW_MAX_CHARS};

    #[test]
    fn test_exact_limit_is_untouched() {
        let text = "x".repeat(DEFAULT_PREVIEW_MAX_CHARS);
        assert_eq!(build_preview(&text, DEFAULT_PREVIEW_MAX_CHARS), text);
    }

    #[test]
    fn test_one_over_limit_truncates() {
        let text = "y".repeat(DEFAULT_PREVIEW_MAX_CHARS + 1);
        let preview = build_preview(&text, DEFAULT_PREVIEW_MAX_CHARS);
        assert_eq!(char_len(&preview), DEFAULT_PREVIEW_MAX_CHARS + 1);
        assert!(preview.ends_with('…'));
        assert!(preview.starts_with(&"y".repeat(DEFAULT_PREVIEW_MAX_CHARS)));
    }

    #[test]
    fn test_cut_is_mid_word() {
        assert_eq!(build_preview("internationalization", 5), "inter…");
    }

    #[test]
    fn test_trailing_space_trimmed_before_ellipsis() {
        assert_eq!(build_preview("abc   def", 5), "abc…");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "é".repeat(12);
        assert_eq!(build_preview(&text, 12), text);
        assert_eq!(build_preview(&text, 10), format!("{}…", "é".repeat(10)));
    }
}
