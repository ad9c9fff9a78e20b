//! Code block recovery for the renderer's highlighter substitution
//!
//! Two kinds of markup become highlighted code blocks: line-numbered
//! highlighter tables (see [`table_detection`]) and plain `<pre>` blocks
//! (see [`pre_blocks`]). Both yield a [`CodeTableExtraction`] holding the
//! code text and a default language for the highlighter.

pub mod cell_selection;
pub mod language;
pub mod language_inference;
pub mod markers;
pub mod pre_blocks;
pub mod table_detection;
pub mod text_extraction;

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::ElementRef;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ContentOptions;
use crate::dom::{is_html_parsing_available, parse_fragment};

pub use language::{language_from_class_token, language_from_class_tokens, SupportedLanguage};
pub use language_inference::detect_code_language_from_content;
pub use pre_blocks::extract_code_block_from_pre;
pub use table_detection::extract_code_block_from_table;

/// Code recovered from a highlighter table or `<pre>` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeTableExtraction {
    /// Code lines joined with `\n`, trailing blank lines removed
    pub code_text: String,
    pub default_language: SupportedLanguage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockKind {
    Table,
    Pre,
}

/// One substitution target found by [`extract_code_blocks`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlockMatch {
    pub kind: CodeBlockKind,
    #[serde(flatten)]
    pub extraction: CodeTableExtraction,
}

/// Every code block of an entry body, in document order, with default options
#[must_use]
pub fn extract_code_blocks(html: &str) -> Vec<CodeBlockMatch> {
    extract_code_blocks_using(html, &ContentOptions::default())
}

/// Every code block of an entry body, in document order
///
/// A detected code table is reported once; `<pre>` blocks and tables nested
/// inside it are not reported again. Tables that are not code-shaped are
/// skipped, but `<pre>` blocks inside them still count.
#[must_use]
pub fn extract_code_blocks_using(html: &str, options: &ContentOptions) -> Vec<CodeBlockMatch> {
    if html.trim().is_empty() {
        return Vec::new();
    }
    if !is_html_parsing_available(html, options) {
        warn!(
            "Skipping code block scan: input of {} bytes exceeds limit of {}",
            html.len(),
            options.max_input_bytes
        );
        return Vec::new();
    }

    let document = parse_fragment(html);
    let mut claimed_tables: HashSet<NodeId> = HashSet::new();
    let mut blocks = Vec::new();

    for node in document.tree.root().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        let inside_claimed = node
            .ancestors()
            .any(|ancestor| claimed_tables.contains(&ancestor.id()));
        if inside_claimed {
            continue;
        }

        let found = match element.value().name() {
            "table" => extract_code_block_from_table(element).map(|extraction| {
                claimed_tables.insert(node.id());
                (CodeBlockKind::Table, extraction)
            }),
            "pre" => extract_code_block_from_pre(element).map(|extraction| (CodeBlockKind::Pre, extraction)),
            _ => None,
        };

        if let Some((kind, extraction)) = found {
            blocks.push(CodeBlockMatch { kind, extraction });
        }
    }

    debug!("Found {} code blocks", blocks.len());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_in_document_order() {
        let html = concat!(
            "<pre>first()</pre>",
            r#"<table class="highlighttable"><tr><td class="linenos"><pre>1</pre></td><td class="code"><pre>second()</pre></td></tr></table>"#,
            "<p>prose</p>",
            "<pre><code>third()</code></pre>",
        );
        let blocks = extract_code_blocks(html);
        let summary: Vec<(CodeBlockKind, &str)> = blocks
            .iter()
            .map(|block| (block.kind, block.extraction.code_text.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (CodeBlockKind::Pre, "first()"),
                (CodeBlockKind::Table, "second()"),
                (CodeBlockKind::Pre, "third()"),
            ]
        );
    }

    #[test]
    fn test_pre_inside_data_table_still_reported() {
        let html = "<table><tr><td>Name</td><td><pre>value()</pre></td></tr></table>";
        let blocks = extract_code_blocks(html);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, CodeBlockKind::Pre);
    }

    #[test]
    fn test_blank_input() {
        assert!(extract_code_blocks("").is_empty());
        assert!(extract_code_blocks("  \n").is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let blocks = extract_code_blocks(r#"<pre><code class="language-rust">fn main() {}</code></pre>"#);
        let json = serde_json::to_value(&blocks).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!([{
                "kind": "pre",
                "codeText": "fn main() {}",
                "defaultLanguage": "rust"
            }])
        );
    }
}
