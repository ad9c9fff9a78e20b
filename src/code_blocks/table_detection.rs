//! Line-numbered code table detection
//!
//! Many highlighters lay a snippet out as a `<table>` with a gutter column
//! of line numbers next to the code column. Rendered as-is, the renderer
//! would show a data table; this recovers the code so it can be replaced by
//! a single highlighted block.
//!
//! A table is treated as code only when it has a `<pre>`/`<code>` inside a
//! `<td>` AND either a marker class (on the table or one of its cells) or the
//! layout of a gutter (a purely numeric first cell followed by a non-empty
//! cell). The layout signal alone can misfire on a plain two-column table
//! whose first column holds numbers and whose cells contain `<code>`.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::{debug, trace};

use crate::dom::{element_name, has_class_token};
use crate::utils::is_numeric_text;

use super::cell_selection::{cell_text, select_code_cell};
use super::language::{language_from_class_tokens, SupportedLanguage};
use super::language_inference::detect_code_language_from_content;
use super::markers::{CODE_TABLE_MARKERS, GUTTER_MARKERS};
use super::text_extraction::{assemble_code_text, container_code_text};
use super::CodeTableExtraction;

// ============================================================================
// Static Selectors (compiled once at first use)
// ============================================================================

static CODE_IN_CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td pre, td code")
        .expect("BUG: hardcoded selector 'td pre, td code' is statically valid")
});

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("tr").expect("BUG: hardcoded selector 'tr' is statically valid")
});

static CODE_NODE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("pre, code")
        .expect("BUG: hardcoded selector 'pre, code' is statically valid")
});

// ============================================================================
// Table shape
// ============================================================================

/// The `<td>` cells of each row that belongs to `table` itself
///
/// Rows of nested tables are excluded, and rows without `<td>` (header
/// rows) are skipped.
fn own_rows<'a>(table: ElementRef<'a>) -> Vec<Vec<ElementRef<'a>>> {
    table
        .select(&ROW_SELECTOR)
        .filter(|row| {
            row.ancestors()
                .find(|node| element_name(*node) == Some("table"))
                .is_some_and(|owner| owner.id() == table.id())
        })
        .map(|row| {
            row.children()
                .filter_map(ElementRef::wrap)
                .filter(|cell| cell.value().name() == "td")
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}

fn is_marked(element: ElementRef<'_>) -> bool {
    has_class_token(element.value(), CODE_TABLE_MARKERS)
        || has_class_token(element.value(), GUTTER_MARKERS)
}

/// Code-table and gutter classes both count on the table and on any cell
fn has_marker_signal(table: ElementRef<'_>, rows: &[Vec<ElementRef<'_>>]) -> bool {
    is_marked(table) || rows.iter().flatten().any(|cell| is_marked(*cell))
}

fn has_layout_signal(rows: &[Vec<ElementRef<'_>>]) -> bool {
    rows.iter().any(|cells| {
        cells.len() >= 2
            && is_numeric_text(&cell_text(cells[0]))
            && !cell_text(cells[1]).trim().is_empty()
    })
}

// ============================================================================
// Language resolution
// ============================================================================

struct LanguageContext<'a> {
    table: ElementRef<'a>,
    code_cell: Option<ElementRef<'a>>,
    code_text: &'a str,
}

type LanguageRule = fn(&LanguageContext<'_>) -> Option<SupportedLanguage>;

/// Language sources in priority order; `text` is never returned by a rule
static LANGUAGE_RULES: &[(&str, LanguageRule)] = &[
    ("code-cell-classes", code_cell_classes),
    ("table-classes", table_classes),
    ("content", content_heuristic),
];

fn non_text(language: SupportedLanguage) -> Option<SupportedLanguage> {
    (!language.is_text()).then_some(language)
}

fn code_cell_classes(context: &LanguageContext<'_>) -> Option<SupportedLanguage> {
    let cell = context.code_cell?;
    let tokens = cell.value().classes().chain(
        cell.select(&CODE_NODE_SELECTOR)
            .flat_map(|code| code.value().classes()),
    );
    non_text(language_from_class_tokens(tokens))
}

fn table_classes(context: &LanguageContext<'_>) -> Option<SupportedLanguage> {
    non_text(language_from_class_tokens(context.table.value().classes()))
}

fn content_heuristic(context: &LanguageContext<'_>) -> Option<SupportedLanguage> {
    non_text(detect_code_language_from_content(context.code_text))
}

fn resolve_language(context: &LanguageContext<'_>) -> SupportedLanguage {
    LANGUAGE_RULES
        .iter()
        .find_map(|(name, rule)| {
            rule(context).inspect(|language| trace!("Language '{language}' from {name}"))
        })
        .unwrap_or_default()
}

// ============================================================================
// Public API
// ============================================================================

/// Recover the code held by a line-numbered highlighter table
///
/// Returns `None` when the table is not code-shaped or holds no
/// non-blank code.
///
/// ```
/// use entry_content::code_blocks::extract_code_block_from_table;
/// use entry_content::SupportedLanguage;
/// use scraper::{Html, Selector};
///
/// let html = r#"<table class="highlighttable"><tr>
///   <td class="linenos"><pre>1
/// 2</pre></td>
///   <td class="code"><pre class="language-python">x = 1
/// y = 2</pre></td>
/// </tr></table>"#;
/// let document = Html::parse_fragment(html);
/// let table = document.select(&Selector::parse("table").unwrap()).next().unwrap();
///
/// let block = extract_code_block_from_table(table).unwrap();
/// assert_eq!(block.code_text, "x = 1\ny = 2");
/// assert_eq!(block.default_language, SupportedLanguage::Python);
/// ```
#[must_use]
pub fn extract_code_block_from_table(table: ElementRef<'_>) -> Option<CodeTableExtraction> {
    if table.select(&CODE_IN_CELL_SELECTOR).next().is_none() {
        return None;
    }

    let rows = own_rows(table);
    let signal = if has_marker_signal(table, &rows) {
        "marker"
    } else if has_layout_signal(&rows) {
        "layout"
    } else {
        trace!("Table has code cells but no code-table signal");
        return None;
    };

    let mut first_code_cell = None;
    let mut row_texts = Vec::with_capacity(rows.len());
    for cells in &rows {
        let Some((index, rule)) = select_code_cell(cells) else {
            continue;
        };
        trace!("Code cell {index} chosen by {rule}");
        let cell = cells[index];
        first_code_cell.get_or_insert(cell);
        row_texts.push(container_code_text(cell));
    }

    let code_text = assemble_code_text(row_texts)?;
    let default_language = resolve_language(&LanguageContext {
        table,
        code_cell: first_code_cell,
        code_text: &code_text,
    });

    debug!(
        "Detected code table via {signal} signal: {} lines, language {default_language}",
        code_text.lines().count()
    );

    Some(CodeTableExtraction {
        code_text,
        default_language,
    })
}
