//! Heading slug generation

/// Generate a URL-safe slug from heading text.
///
/// Lowercases, keeps Unicode letters and digits, drops every punctuation
/// character (hyphens included), and joins the whitespace-separated words
/// with single hyphens. Returns an empty string when nothing survives (a
/// heading made only of punctuation).
///
/// # Examples
///
/// ```
/// use entry_content::reading_toc::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("What's new in v2.0?"), "whats-new-in-v20");
/// assert_eq!(slugify("Café  au   lait"), "café-au-lait");
/// assert_eq!(slugify("foo-bar"), "foobar");
/// assert_eq!(slugify("?!"), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}
