//! Core option types for the entry content pipeline

use serde::{Deserialize, Serialize};

use crate::utils::{
    DEFAULT_BIONIC_SKIP_TAGS, DEFAULT_BOLD_TAG, DEFAULT_MAX_HEADING_LEVEL,
    DEFAULT_MAX_INPUT_BYTES, DEFAULT_MIN_HEADING_LEVEL, DEFAULT_PREVIEW_MAX_CHARS,
};

/// Options shared by every stage of the pipeline
///
/// `Default` reproduces the reader's fixed behaviour: h2–h4 in the TOC,
/// 110-character previews, the standard bionic skip list. Loaded options
/// files only need to name the fields they override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentOptions {
    /// Preview length in characters before truncation (default: 110)
    pub preview_max_chars: usize,

    /// Shallowest heading level listed in the TOC (default: 2)
    pub min_heading_level: u8,

    /// Deepest heading level listed in the TOC (default: 4)
    pub max_heading_level: u8,

    /// Inputs larger than this many bytes are not parsed (default: 10 MB)
    ///
    /// Oversized bodies take the same degraded path as a host without an
    /// HTML parser: the input is echoed back and the TOC is empty.
    pub max_input_bytes: usize,

    /// Elements whose descendant text is never rewritten by bionic reading
    pub bionic_skip_tags: Vec<String>,

    /// Element used to wrap bionic word prefixes (default: `b`)
    pub bold_tag: String,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            preview_max_chars: DEFAULT_PREVIEW_MAX_CHARS,
            min_heading_level: DEFAULT_MIN_HEADING_LEVEL,
            max_heading_level: DEFAULT_MAX_HEADING_LEVEL,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            bionic_skip_tags: DEFAULT_BIONIC_SKIP_TAGS
                .iter()
                .map(|tag| (*tag).to_string())
                .collect(),
            bold_tag: DEFAULT_BOLD_TAG.to_string(),
        }
    }
}

impl ContentOptions {
    /// Create options with the reader's default behaviour
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `level` (1-6) is listed in the TOC under these options
    #[must_use]
    pub fn includes_heading_level(&self, level: u8) -> bool {
        (self.min_heading_level..=self.max_heading_level).contains(&level)
    }

    /// Whether the bionic transform must leave text under `tag` alone
    #[must_use]
    pub fn is_bionic_skip_tag(&self, tag: &str) -> bool {
        self.bionic_skip_tags
            .iter()
            .any(|skip| skip.eq_ignore_ascii_case(tag))
    }
}
