//! Section-local plain text between consecutive headings
//!
//! A section is the half-open range of the document that starts right after
//! heading `i` closes and ends right before heading `i + 1` opens (or at the
//! end of the fragment for the last heading). Text inside `<script>` and
//! `<style>` never counts. Block element edges separate words the way the
//! rendered page would, and the result is whitespace-normalized.

use std::collections::HashMap;

use ego_tree::iter::Edge;
use ego_tree::NodeId;
use scraper::Html;

use crate::dom::element_name;
use crate::utils::normalize_whitespace;

/// Elements whose edges separate words, like a rendered line break would
const WORD_SEPARATING_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

fn separates_words(name: &str) -> bool {
    WORD_SEPARATING_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

fn is_excluded_subtree(name: &str) -> bool {
    name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style")
}

/// Normalized text of every section, one entry per heading in `headings`
///
/// `headings` must be in document order. The whole fragment is walked once.
#[must_use]
pub fn section_texts(document: &Html, headings: &[NodeId]) -> Vec<String> {
    let positions: HashMap<NodeId, usize> = headings
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index))
        .collect();

    let mut raw = vec![String::new(); headings.len()];
    let mut current: Option<usize> = None;
    let mut excluded_depth = 0usize;

    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => {
                if positions.contains_key(&node.id()) {
                    // Heading text belongs to the TOC entry, not to a section.
                    current = None;
                } else if element_name(node).is_some_and(is_excluded_subtree) {
                    excluded_depth += 1;
                } else if let (Some(index), 0) = (current, excluded_depth) {
                    if let Some(text) = node.value().as_text() {
                        raw[index].push_str(text);
                    } else if element_name(node).is_some_and(separates_words) {
                        raw[index].push(' ');
                    }
                }
            }
            Edge::Close(node) => {
                if let Some(&index) = positions.get(&node.id()) {
                    current = Some(index);
                } else if element_name(node).is_some_and(is_excluded_subtree) {
                    excluded_depth = excluded_depth.saturating_sub(1);
                } else if let (Some(index), 0) = (current, excluded_depth) {
                    if element_name(node).is_some_and(separates_words) {
                        raw[index].push(' ');
                    }
                }
            }
        }
    }

    raw.iter().map(|text| normalize_whitespace(text)).collect()
}

/// Normalized text of the section that follows `headings[index]`
///
/// Each call walks the whole document; use [`section_texts`] when more than
/// one section is needed. Returns an empty string for an out-of-range index.
#[must_use]
pub fn section_text(document: &Html, headings: &[NodeId], index: usize) -> String {
    if index >= headings.len() {
        return String::new();
    }
    section_texts(document, headings)
        .into_iter()
        .nth(index)
        .unwrap_or_default()
}
