//! Shared DOM utilities over scraper's arena tree
//!
//! `scraper::Html` stores the parsed fragment in an `ego_tree::Tree`: nodes
//! live in one arena and are addressed by `NodeId` handles, with parent and
//! child links held as ids rather than pointers. Every stage reads through
//! `NodeRef` and mutates through `NodeMut` obtained from a handle, so no
//! stage keeps a borrow into the tree across a mutation.

use ego_tree::{NodeId, NodeRef};
use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use scraper::node::{Element, Text};
use scraper::{Html, HtmlTreeSink, Node};

use crate::config::ContentOptions;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Capability check for parsing `html` under `options`
///
/// Parsing is unavailable for inputs above `max_input_bytes`; callers then
/// take the documented degraded path instead of failing.
#[must_use]
pub fn is_html_parsing_available(html: &str, options: &ContentOptions) -> bool {
    html.len() <= options.max_input_bytes
}

/// Parse an entry body as a fragment in `<body>` context
///
/// html5ever repairs malformed markup; the repaired tree is taken as-is.
/// Scripting is off, so `<noscript>` content is parsed into elements
/// instead of one raw text node.
#[must_use]
pub fn parse_fragment(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let context = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from("body"));
    driver::parse_fragment(HtmlTreeSink::new(Html::new_fragment()), opts, context, Vec::new(), false)
        .one(html)
}

/// Serialize the fragment's content (the body markup, without the synthetic root)
#[must_use]
pub fn fragment_html(document: &Html) -> String {
    document.root_element().inner_html()
}

/// Local name of an element node, `None` for text, comments and the document
#[must_use]
pub fn element_name<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    node.value().as_element().map(Element::name)
}

/// Concatenated text of every text node under `node`, in document order
#[must_use]
pub fn text_content(node: NodeRef<'_, Node>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if let Some(chunk) = descendant.value().as_text() {
            text.push_str(chunk);
        }
    }
    text
}

/// Whether `element` carries any of `tokens` as a class (ASCII case-insensitive)
#[must_use]
pub fn has_class_token(element: &Element, tokens: &[&str]) -> bool {
    element
        .classes()
        .any(|class| tokens.iter().any(|token| class.eq_ignore_ascii_case(token)))
}

/// Whether any ancestor of `node` is an element accepted by `is_match`
pub fn has_ancestor_element(node: NodeRef<'_, Node>, mut is_match: impl FnMut(&str) -> bool) -> bool {
    node.ancestors()
        .filter_map(element_name)
        .any(|name| is_match(name))
}

/// Heading level of an `h1`–`h6` element name
#[must_use]
pub fn heading_level(name: &str) -> Option<u8> {
    let mut chars = name.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('h' | 'H'), Some(digit @ '1'..='6'), None) => digit.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

/// Write attributes onto the element behind `id`
///
/// Existing attributes keep their values unless named in `updates`; new
/// names are appended. Returns `false` when `id` is not an element.
pub fn set_attributes(document: &mut Html, id: NodeId, updates: &[(&str, &str)]) -> bool {
    let Some(mut node) = document.tree.get_mut(id) else {
        return false;
    };
    let Node::Element(element) = node.value() else {
        return false;
    };

    let mut attrs: Vec<Attribute> = element
        .attrs()
        .map(|(name, value)| {
            let value = updates
                .iter()
                .find(|(update, _)| *update == name)
                .map_or(value, |(_, new_value)| *new_value);
            attribute(name, value)
        })
        .collect();

    for (name, value) in updates {
        if element.attr(name).is_none() {
            attrs.push(attribute(name, value));
        }
    }

    // Rebuilding keeps the element's cached id/class lookups consistent
    // with the new attribute list.
    let name = element.name.clone();
    *element = Element::new(name, attrs);
    true
}

/// A detached HTML element node with no attributes
#[must_use]
pub fn html_element(tag: &str) -> Node {
    let name = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag));
    Node::Element(Element::new(name, Vec::new()))
}

/// A detached text node
#[must_use]
pub fn text_node(text: &str) -> Node {
    Node::Text(Text {
        text: StrTendril::from(text),
    })
}

fn attribute(name: &str, value: &str) -> Attribute {
    Attribute {
        name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
        value: StrTendril::from(value),
    }
}
