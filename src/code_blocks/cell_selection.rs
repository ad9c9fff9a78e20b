//! Per-row code cell selection
//!
//! Rules are tried in order; the first one that names a cell wins. The
//! last rule always answers for a non-empty row, so every row with cells
//! yields a code cell.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::dom::has_class_token;
use crate::utils::{char_len, is_numeric_text};

use super::markers::{CODE_CELL_MARKERS, GUTTER_MARKERS};

static CODE_NODE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("pre, code")
        .expect("BUG: hardcoded selector 'pre, code' is statically valid")
});

/// A rule returns the index of the code cell within the row's `<td>`s
pub type CellRule = fn(&[ElementRef<'_>]) -> Option<usize>;

/// Cell selection rules in priority order
pub static CELL_RULES: &[(&str, CellRule)] = &[
    ("explicit-code-marker", explicit_code_marker),
    ("after-gutter-marker", after_gutter_marker),
    ("after-numeric-first-cell", after_numeric_first_cell),
    ("longest-code-text", longest_code_text),
    ("last-cell", last_cell),
];

/// Pick the code cell of one row
///
/// Returns the cell index and the name of the rule that chose it.
#[must_use]
pub fn select_code_cell(cells: &[ElementRef<'_>]) -> Option<(usize, &'static str)> {
    CELL_RULES
        .iter()
        .find_map(|(name, rule)| rule(cells).map(|index| (index, *name)))
}

/// Visible text of a cell
pub(crate) fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}

fn explicit_code_marker(cells: &[ElementRef<'_>]) -> Option<usize> {
    cells
        .iter()
        .position(|cell| has_class_token(cell.value(), CODE_CELL_MARKERS))
}

fn after_gutter_marker(cells: &[ElementRef<'_>]) -> Option<usize> {
    cells
        .iter()
        .position(|cell| has_class_token(cell.value(), GUTTER_MARKERS))
        .map(|gutter| gutter + 1)
        .filter(|&next| next < cells.len())
}

fn after_numeric_first_cell(cells: &[ElementRef<'_>]) -> Option<usize> {
    if cells.len() < 2 {
        return None;
    }
    if cells.iter().any(|cell| has_class_token(cell.value(), GUTTER_MARKERS)) {
        return None;
    }
    is_numeric_text(&cell_text(cells[0])).then_some(1)
}

fn longest_code_text(cells: &[ElementRef<'_>]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (index, cell) in cells.iter().enumerate() {
        let longest_in_cell = cell
            .select(&CODE_NODE_SELECTOR)
            .map(cell_text)
            .filter(|text| !text.trim().is_empty() && !is_numeric_text(text))
            .map(|text| char_len(&text))
            .max();

        if let Some(length) = longest_in_cell {
            if best.is_none_or(|(_, best_length)| length > best_length) {
                best = Some((index, length));
            }
        }
    }
    best.map(|(index, _)| index)
}

fn last_cell(cells: &[ElementRef<'_>]) -> Option<usize> {
    cells.len().checked_sub(1)
}
