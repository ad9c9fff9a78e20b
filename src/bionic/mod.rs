//! Bionic reading transform
//!
//! Emphasizes the leading letters of each word in the entry body so the eye
//! can anchor on word starts. Only text nodes change: each one that holds a
//! word is replaced in place by bold prefixes and plain runs whose
//! concatenation equals the original text. Code, form fields, embedded
//! graphics and already-bold text are left alone.

pub mod segments;

use ego_tree::NodeId;
use scraper::Html;
use tracing::warn;

use crate::config::ContentOptions;
use crate::dom::{
    fragment_html, has_ancestor_element, html_element, is_html_parsing_available, parse_fragment,
    text_node,
};

pub use segments::{emphasis_length, split_segments, Segment};

/// Apply bionic reading emphasis with default options
///
/// ```
/// use entry_content::apply_bionic_reading_to_html;
///
/// let html = apply_bionic_reading_to_html("<p>Fast reading</p><pre>code</pre>");
/// assert_eq!(html, "<p><b>Fa</b>st <b>rea</b>ding</p><pre>code</pre>");
/// ```
#[must_use]
pub fn apply_bionic_reading_to_html(html: &str) -> String {
    apply_bionic_reading_to_html_using(html, &ContentOptions::default())
}

/// Apply bionic reading emphasis
///
/// Blank or oversized input is returned unchanged.
#[must_use]
pub fn apply_bionic_reading_to_html_using(html: &str, options: &ContentOptions) -> String {
    if html.trim().is_empty() {
        return html.to_string();
    }
    if !is_html_parsing_available(html, options) {
        warn!(
            "Skipping bionic reading: input of {} bytes exceeds limit of {}",
            html.len(),
            options.max_input_bytes
        );
        return html.to_string();
    }

    let mut document = parse_fragment(html);

    // Collect first: the inserted emphasis elements must not be revisited.
    let targets: Vec<(NodeId, Vec<Segment>)> = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            if !text.bytes().any(|byte| byte.is_ascii_alphabetic()) {
                return None;
            }
            if has_ancestor_element(node, |name| options.is_bionic_skip_tag(name)) {
                return None;
            }
            let segments = split_segments(text);
            (!segments.is_empty()).then(|| (node.id(), segments))
        })
        .collect();

    log::debug!("Applying bionic emphasis to {} text nodes", targets.len());

    for (id, segments) in &targets {
        replace_text_node(&mut document, *id, segments, &options.bold_tag);
    }

    fragment_html(&document)
}

/// Swap the text node behind `id` for its segments, in place
fn replace_text_node(document: &mut Html, id: NodeId, segments: &[Segment], bold_tag: &str) {
    let Some(mut node) = document.tree.get_mut(id) else {
        log::warn!("Text node vanished before bionic replacement");
        return;
    };

    for segment in segments {
        match segment {
            Segment::Bold(prefix) => {
                let mut emphasis = node.insert_before(html_element(bold_tag));
                emphasis.append(text_node(prefix));
            }
            Segment::Plain(text) => {
                node.insert_before(text_node(text));
            }
        }
    }
    node.detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_words_emphasized() {
        assert_eq!(
            apply_bionic_reading_to_html("<p>Hello world</p>"),
            "<p><b>He</b>llo <b>wo</b>rld</p>"
        );
    }

    #[test]
    fn test_skip_tags_untouched() {
        let html = "<p>See <code>value</code> and <strong>this</strong></p>";
        assert_eq!(
            apply_bionic_reading_to_html(html),
            "<p><b>S</b>ee <code>value</code> <b>a</b>nd <strong>this</strong></p>"
        );
    }

    #[test]
    fn test_text_without_words_untouched() {
        let html = "<p>123 456</p>";
        assert_eq!(apply_bionic_reading_to_html(html), html);
    }

    #[test]
    fn test_blank_input_echoed() {
        assert_eq!(apply_bionic_reading_to_html(""), "");
        assert_eq!(apply_bionic_reading_to_html("  \n"), "  \n");
    }

    #[test]
    fn test_custom_bold_tag() {
        let options = ContentOptions::builder()
            .bold_tag("strong")
            .build()
            .expect("valid options");
        assert_eq!(
            apply_bionic_reading_to_html_using("<p>Cat</p>", &options),
            "<p><strong>C</strong>at</p>"
        );
    }

    #[test]
    fn test_oversized_input_echoed() {
        let options = ContentOptions::builder()
            .max_input_bytes(4)
            .build()
            .expect("valid options");
        let html = "<p>Too long</p>";
        assert_eq!(apply_bionic_reading_to_html_using(html, &options), html);
    }

    #[test]
    fn test_nested_inline_elements_keep_structure() {
        assert_eq!(
            apply_bionic_reading_to_html(r#"<p><a href="/x">Link</a> text</p>"#),
            r#"<p><a href="/x"><b>Li</b>nk</a> <b>te</b>xt</p>"#
        );
    }
}
