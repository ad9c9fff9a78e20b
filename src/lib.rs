//! Feed entry content pipeline
//!
//! Transforms applied to sanitized entry bodies before they reach the reader
//! view:
//!
//! - [`reading_toc`]: unique heading anchors plus a table of contents with
//!   section previews
//! - [`code_blocks`]: code recovery from line-numbered highlighter tables and
//!   `<pre>` blocks, with a default highlighter language
//! - [`bionic`]: emphasis on the leading letters of each word
//!
//! Every transform is total. Empty or oversized input is echoed back rather
//! than rejected, and malformed markup is repaired by the HTML parser.

pub mod bionic;
pub mod code_blocks;
pub mod config;
pub mod dom;
pub mod errors;
pub mod processor;
pub mod reading_toc;
pub mod utils;

pub use bionic::{apply_bionic_reading_to_html, apply_bionic_reading_to_html_using};
pub use code_blocks::{
    detect_code_language_from_content, extract_code_block_from_pre, extract_code_block_from_table,
    extract_code_blocks, extract_code_blocks_using, CodeBlockKind, CodeBlockMatch,
    CodeTableExtraction, SupportedLanguage,
};
pub use config::{ContentOptions, ContentOptionsBuilder};
pub use dom::is_html_parsing_available;
pub use errors::{ContentError, ContentResult};
pub use processor::ContentProcessor;
pub use reading_toc::{
    build_entry_content_with_toc, build_entry_content_with_toc_using, EntryContentWithToc,
    TocItem,
};
