//! Code text recovery from highlighter markup
//!
//! Highlighters wrap each source line in its own element, or lay lines out
//! as block elements that html5ever keeps as siblings. Plain text
//! concatenation would lose the line breaks, so extraction here is
//! block-aware: `<br>` becomes a newline and so does the end of every
//! block-level element.

use std::sync::LazyLock;

use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use scraper::{ElementRef, Node, Selector};

use crate::dom::{element_name, has_class_token, text_content};

static PRE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("pre").expect("BUG: hardcoded selector 'pre' is statically valid")
});

/// Elements whose end terminates a line
const LINE_BREAKING_TAGS: &[&str] = &["div", "p", "li", "tr", "section", "article"];

/// Class tokens highlighters put on one-element-per-line wrappers
pub const LINE_CLASS_TOKENS: &[&str] = &["line", "code-line", "ec-line"];

/// Block-aware text of everything under `node`
///
/// Text nodes are copied verbatim. The closing edge of `node` itself never
/// adds a newline.
#[must_use]
pub fn block_aware_text(node: NodeRef<'_, Node>) -> String {
    let mut text = String::new();
    for edge in node.traverse() {
        match edge {
            Edge::Open(current) => match current.value() {
                Node::Text(chunk) => text.push_str(chunk),
                Node::Element(element) if element.name() == "br" => text.push('\n'),
                _ => {}
            },
            Edge::Close(current) if current.id() != node.id() => {
                if element_name(current).is_some_and(|name| LINE_BREAKING_TAGS.contains(&name)) {
                    text.push('\n');
                }
            }
            Edge::Close(_) => {}
        }
    }
    text
}

/// Text of `node`'s line-wrapper children joined with `\n`
///
/// Returns `None` when `node` has no direct child carrying a line class.
/// Wrappers that already end in a newline (Chroma, Shiki) keep only one.
#[must_use]
pub fn line_children_text(node: NodeRef<'_, Node>) -> Option<String> {
    let lines: Vec<String> = node
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| has_class_token(child.value(), LINE_CLASS_TOKENS))
        .map(|line| {
            let text = text_content(*line);
            match text.strip_suffix('\n') {
                Some(stripped) => stripped.to_string(),
                None => text,
            }
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Code text held by a container (a table cell or a `<pre>`)
///
/// The first element at or under the container whose children are line
/// wrappers wins (SyntaxHighlighter puts them in a plain `<div>`, most
/// others in `<code>`). Otherwise the first `<pre>`, or the container
/// itself, is read block-aware. Inline `<code>` is not a source on its own:
/// cells such as GitHub's keep indentation outside it.
#[must_use]
pub fn container_code_text(container: ElementRef<'_>) -> String {
    if let Some(lines) = container.descendants().find_map(line_children_text) {
        return lines;
    }

    let source = container.select(&PRE_SELECTOR).next().unwrap_or(container);
    block_aware_text(*source)
}

/// Join per-row texts into the final code text
///
/// Each row is split into lines (a row ending in `\n` contributes no extra
/// empty line), `\r\n` is normalized, trailing blank lines are dropped while
/// more than one line remains, and an all-blank result yields `None`.
pub fn assemble_code_text<I>(rows: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut lines: Vec<String> = Vec::new();
    for row in rows {
        let row = row.replace("\r\n", "\n");
        let body = row.strip_suffix('\n').unwrap_or(&row);
        lines.extend(body.split('\n').map(str::to_string));
    }

    while lines.len() > 1 && lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    if lines.iter().all(|line| line.trim().is_empty()) {
        return None;
    }
    Some(lines.join("\n"))
}
