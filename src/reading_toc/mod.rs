//! Reading table of contents for feed entry bodies
//!
//! Discovers `h2`–`h4` headings, gives each a unique anchor id, marks it with
//! `data-reading-heading="true"`, and summarizes the text of its section.
//!
//! # Usage
//!
//! ```rust
//! use entry_content::reading_toc::build_entry_content_with_toc;
//!
//! let result = build_entry_content_with_toc("<h2>Intro</h2><p>Hello there.</p>");
//! assert_eq!(result.toc_items.len(), 1);
//! assert_eq!(result.toc_items[0].id, "intro");
//! assert_eq!(result.toc_items[0].preview, "Hello there.");
//! assert!(result.html.contains(r#"data-reading-heading="true""#));
//! ```

use serde::{Deserialize, Serialize};

// Declare sub-modules
pub mod builder;
pub mod id_allocator;
pub mod preview;
pub mod section_text;
pub mod slug;

pub use builder::{build_entry_content_with_toc, build_entry_content_with_toc_using};
pub use id_allocator::{allocate_unique_id, UniqueIdAllocator};
pub use preview::build_preview;
pub use section_text::{section_text, section_texts};
pub use slug::slugify;

/// One heading-derived TOC entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocItem {
    /// Anchor id, unique within the document
    pub id: String,
    /// Trimmed heading text
    pub text: String,
    /// Section text truncated for display
    pub preview: String,
    /// Character length of the full normalized section text
    pub section_length: usize,
    /// Heading depth (2, 3 or 4 under default options)
    pub level: u8,
}

/// Annotated body markup plus its TOC
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryContentWithToc {
    pub html: String,
    pub toc_items: Vec<TocItem>,
}

impl EntryContentWithToc {
    /// Input echoed back with no TOC
    pub(crate) fn unchanged(html: &str) -> Self {
        Self {
            html: html.to_string(),
            toc_items: Vec::new(),
        }
    }
}
