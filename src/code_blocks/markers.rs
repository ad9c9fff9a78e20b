//! Class tokens emitted by common syntax highlighters for line-numbered tables
//!
//! Covers Pygments (`highlighttable`, `linenos`), Rouge (`rouge-table`,
//! `rouge-gutter`, `rouge-code`), highlight.js line-numbers plugin
//! (`hljs-ln*`), GitHub blobs (`blob-num`, `blob-code`), Crayon, Hugo/Chroma
//! (`lntable`) and SyntaxHighlighter (`syntaxhighlighter`, `gutter`, `gl`).

/// Table-level tokens marking a code table
pub const CODE_TABLE_MARKERS: &[&str] = &[
    "highlighttable",
    "highlight",
    "rouge-table",
    "code-table",
    "codetable",
    "codehilitetable",
    "syntaxhighlighter",
    "crayon-table",
    "hljs-ln",
    "line-numbers",
    "linenums",
    "lntable",
    "chroma",
];

/// Tokens marking a line-number gutter cell
pub const GUTTER_MARKERS: &[&str] = &[
    "gutter",
    "gutters",
    "linenos",
    "lineno",
    "line-number",
    "line-numbers",
    "rouge-gutter",
    "hljs-ln-numbers",
    "blob-num",
    "crayon-nums",
    "code-gutter",
    "gl",
];

/// Tokens marking the cell that holds the code
pub const CODE_CELL_MARKERS: &[&str] = &[
    "code",
    "rouge-code",
    "hljs-ln-code",
    "blob-code",
    "blob-code-inner",
    "crayon-code",
    "line-content",
    "code-cell",
];
