//! Shared defaults for the entry content pipeline
//!
//! These are the values `ContentOptions::default()` is built from, kept in
//! one place so the free functions and the configured processor agree.

/// Maximum preview length in characters before an ellipsis is appended
pub const DEFAULT_PREVIEW_MAX_CHARS: usize = 110;

/// Marker appended to truncated previews
pub const PREVIEW_ELLIPSIS: char = '…';

/// Shallowest heading level that enters the reading TOC (`h1` is the entry title)
pub const DEFAULT_MIN_HEADING_LEVEL: u8 = 2;

/// Deepest heading level that enters the reading TOC
pub const DEFAULT_MAX_HEADING_LEVEL: u8 = 4;

/// Attribute written onto every heading that received a TOC entry
pub const READING_HEADING_ATTR: &str = "data-reading-heading";

/// Prefix for ids of headings whose text slugs to nothing
pub const SECTION_ID_PREFIX: &str = "section";

/// Largest input the pipeline will parse: 10 MB
///
/// Larger bodies are treated as unparseable and echoed back untouched.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Element wrapping the bold prefix of each bionic word
pub const DEFAULT_BOLD_TAG: &str = "b";

/// Elements whose text the bionic transform never touches
pub const DEFAULT_BIONIC_SKIP_TAGS: &[&str] = &[
    "pre", "code", "kbd", "samp", "script", "style", "textarea", "svg", "math", "strong", "b",
];
