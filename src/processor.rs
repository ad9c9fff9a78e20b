//! Options-bound entry point for the content pipeline

use crate::bionic::apply_bionic_reading_to_html_using;
use crate::code_blocks::{extract_code_blocks_using, CodeBlockMatch};
use crate::config::ContentOptions;
use crate::errors::ContentResult;
use crate::reading_toc::{build_entry_content_with_toc_using, EntryContentWithToc};

/// Runs every transform under one validated set of options
///
/// Cheap to clone and safe to share across threads; each call parses its
/// own private tree.
#[derive(Debug, Clone, Default)]
pub struct ContentProcessor {
    options: ContentOptions,
}

impl ContentProcessor {
    /// Build a processor, rejecting invalid options up front
    pub fn new(options: ContentOptions) -> ContentResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    #[must_use]
    pub fn options(&self) -> &ContentOptions {
        &self.options
    }

    /// Annotate headings and build the reading TOC
    #[must_use]
    pub fn build_entry_content_with_toc(&self, html: &str) -> EntryContentWithToc {
        build_entry_content_with_toc_using(html, &self.options)
    }

    /// Apply bionic reading emphasis
    #[must_use]
    pub fn apply_bionic_reading_to_html(&self, html: &str) -> String {
        apply_bionic_reading_to_html_using(html, &self.options)
    }

    /// Every code block (highlighter tables and `<pre>`) in document order
    #[must_use]
    pub fn extract_code_blocks(&self, html: &str) -> Vec<CodeBlockMatch> {
        extract_code_blocks_using(html, &self.options)
    }
}
