//! TOC builder: heading discovery, id assignment and section summaries

use ego_tree::NodeId;
use tracing::{debug, trace, warn};

use crate::config::ContentOptions;
use crate::dom::{
    element_name, fragment_html, heading_level, is_html_parsing_available, parse_fragment,
    set_attributes, text_content,
};
use crate::utils::{char_len, READING_HEADING_ATTR, SECTION_ID_PREFIX};

use super::id_allocator::UniqueIdAllocator;
use super::preview::build_preview;
use super::section_text::section_texts;
use super::slug::slugify;
use super::{EntryContentWithToc, TocItem};

/// A selected heading: every `h{min}`–`h{max}` element, including ones that
/// end up without a TOC entry, since they still bound their neighbours'
/// sections and count toward positional fallback ids.
struct HeadingNode {
    id: NodeId,
    level: u8,
    text: String,
    explicit_id: Option<String>,
}

/// Build the annotated body and TOC for an entry using default options
///
/// Never fails: empty or whitespace-only input, and input the parser will
/// not take, come back unchanged with an empty TOC.
#[must_use]
pub fn build_entry_content_with_toc(html: &str) -> EntryContentWithToc {
    build_entry_content_with_toc_using(html, &ContentOptions::default())
}

/// Build the annotated body and TOC for an entry
#[must_use]
pub fn build_entry_content_with_toc_using(html: &str, options: &ContentOptions) -> EntryContentWithToc {
    if html.trim().is_empty() {
        return EntryContentWithToc::unchanged(html);
    }

    if !is_html_parsing_available(html, options) {
        warn!(
            "Entry body of {} bytes exceeds parse limit of {} bytes, skipping TOC",
            html.len(),
            options.max_input_bytes
        );
        return EntryContentWithToc::unchanged(html);
    }

    let mut document = parse_fragment(html);

    let headings: Vec<HeadingNode> = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let level = element_name(node).and_then(heading_level)?;
            if !options.includes_heading_level(level) {
                return None;
            }
            let explicit_id = node
                .value()
                .as_element()
                .and_then(|element| element.attr("id"))
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string);
            Some(HeadingNode {
                id: node.id(),
                level,
                text: text_content(node).trim().to_string(),
                explicit_id,
            })
        })
        .collect();

    if headings.is_empty() {
        debug!("No h{}-h{} headings found", options.min_heading_level, options.max_heading_level);
        return EntryContentWithToc {
            html: fragment_html(&document),
            toc_items: Vec::new(),
        };
    }

    let heading_ids: Vec<NodeId> = headings.iter().map(|heading| heading.id).collect();
    let sections = section_texts(&document, &heading_ids);

    let mut allocator = UniqueIdAllocator::new();
    let mut toc_items = Vec::with_capacity(headings.len());

    for (position, (heading, section)) in headings.iter().zip(&sections).enumerate() {
        if heading.text.is_empty() {
            trace!("Skipping empty heading at position {}", position + 1);
            continue;
        }

        let candidate = heading
            .explicit_id
            .clone()
            .or_else(|| Some(slugify(&heading.text)).filter(|slug| !slug.is_empty()))
            .unwrap_or_else(|| format!("{SECTION_ID_PREFIX}-{}", position + 1));
        let id = allocator.allocate(&candidate);
        if id != candidate {
            trace!("Heading id '{}' disambiguated to '{}'", candidate, id);
        }

        set_attributes(
            &mut document,
            heading.id,
            &[("id", id.as_str()), (READING_HEADING_ATTR, "true")],
        );

        toc_items.push(TocItem {
            id,
            text: heading.text.clone(),
            preview: build_preview(section, options.preview_max_chars),
            section_length: char_len(section),
            level: heading.level,
        });
    }

    debug!(
        "Built reading TOC with {} entries from {} headings",
        toc_items.len(),
        headings.len()
    );

    EntryContentWithToc {
        html: fragment_html(&document),
        toc_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &EntryContentWithToc) -> Vec<&str> {
        result.toc_items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input_is_echoed() {
        for input in ["", "   ", "\n\t"] {
            let result = build_entry_content_with_toc(input);
            assert_eq!(result.html, input);
            assert!(result.toc_items.is_empty());
        }
    }

    #[test]
    fn test_duplicate_titles_and_explicit_id() {
        let result = build_entry_content_with_toc(
            r#"<h2>Overview</h2><p>a</p><h2>Overview</h2><p>b</p><h3 id="overview">Other</h3>"#,
        );
        assert_eq!(ids(&result), vec!["overview", "overview-2", "overview-3"]);
        assert!(result.html.contains(r#"id="overview-3""#));
    }

    #[test]
    fn test_explicit_id_is_trimmed_and_kept() {
        let result = build_entry_content_with_toc(r#"<h2 id="  custom-anchor ">Title</h2>"#);
        assert_eq!(ids(&result), vec!["custom-anchor"]);
    }

    #[test]
    fn test_punctuation_heading_falls_back_to_position() {
        let result = build_entry_content_with_toc("<h2></h2><h2>First</h2><h3>???</h3>");
        assert_eq!(ids(&result), vec!["first", "section-3"]);
    }

    #[test]
    fn test_empty_heading_left_unmarked() {
        let result = build_entry_content_with_toc("<h2>  </h2><h2>Real</h2>");
        assert_eq!(result.toc_items.len(), 1);
        assert!(result.html.contains("<h2>  </h2>"));
        assert_eq!(result.html.matches(READING_HEADING_ATTR).count(), 1);
    }

    #[test]
    fn test_empty_heading_still_bounds_previous_section() {
        let result =
            build_entry_content_with_toc("<h2>A</h2><p>mine</p><h3></h3><p>not mine</p>");
        assert_eq!(result.toc_items.len(), 1);
        assert_eq!(result.toc_items[0].preview, "mine");
        assert_eq!(result.toc_items[0].section_length, 4);
    }

    #[test]
    fn test_long_section_preview() {
        let body = "word ".repeat(40);
        let result = build_entry_content_with_toc(&format!("<h2>Long</h2><p>{body}</p>"));
        let item = &result.toc_items[0];
        assert_eq!(item.section_length, body.trim().chars().count());
        assert!(item.preview.ends_with('…'));
        assert!(item.preview.chars().count() <= 111);
    }

    #[test]
    fn test_no_headings_returns_markup() {
        let result = build_entry_content_with_toc("<p>Just text</p>");
        assert!(result.toc_items.is_empty());
        assert_eq!(result.html, "<p>Just text</p>");
    }

    #[test]
    fn test_custom_heading_range() {
        let options = ContentOptions::builder()
            .heading_levels(1, 2)
            .build()
            .expect("valid options");
        let result = build_entry_content_with_toc_using(
            "<h1>Top</h1><h2>Mid</h2><h3>Low</h3>",
            &options,
        );
        let levels: Vec<u8> = result.toc_items.iter().map(|item| item.level).collect();
        assert_eq!(levels, vec![1, 2]);
    }

    #[test]
    fn test_oversized_input_degrades() {
        let options = ContentOptions::builder()
            .max_input_bytes(10)
            .build()
            .expect("valid options");
        let html = "<h2>Too big</h2><p>body</p>";
        let result = build_entry_content_with_toc_using(html, &options);
        assert_eq!(result.html, html);
        assert!(result.toc_items.is_empty());
    }
}
