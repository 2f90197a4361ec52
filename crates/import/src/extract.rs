//! Column resolution shared by the profile extractors.

use crate::table::ResolvedTable;

/// Joins a merchant name and its details cell.
pub const DETAILS_SEPARATOR: &str = " — ";

/// Where a canonical field can be read from, tried in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// First column whose normalized name matches.
    Named(&'static str),
    /// Fixed position in the header, when that position exists.
    Position(usize),
}

impl ColumnSource {
    fn locate(self, table: &ResolvedTable, normalize: fn(&str) -> String) -> Option<usize> {
        match self {
            ColumnSource::Named(name) => table.position(name, normalize),
            ColumnSource::Position(idx) => (idx < table.width()).then_some(idx),
        }
    }
}

/// Cells of the first source that resolves, or an all-empty column.
pub fn resolve_column(
    table: &ResolvedTable,
    normalize: fn(&str) -> String,
    sources: &[ColumnSource],
) -> Vec<String> {
    sources
        .iter()
        .find_map(|src| src.locate(table, normalize))
        .map(|idx| table.column(idx))
        .unwrap_or_else(|| vec![String::new(); table.len()])
}

/// First candidate column that has any non-empty cell; later candidates are
/// only consulted when an earlier one is empty for every row. A cell holding
/// only whitespace counts as populated.
pub fn first_populated(candidates: Vec<Vec<String>>) -> Vec<String> {
    let mut fallback = None;
    for column in candidates {
        if column.iter().any(|c| !c.is_empty()) {
            return column;
        }
        fallback.get_or_insert(column);
    }
    fallback.unwrap_or_default()
}

/// `primary — details` where details is present, else just `primary`.
pub fn join_details(primary: &[String], details: &[String]) -> Vec<String> {
    primary
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let p = p.trim();
            match details.get(i).map(|d| d.trim()) {
                Some(d) if !d.is_empty() => format!("{p}{DETAILS_SEPARATOR}{d}"),
                _ => p.to_string(),
            }
        })
        .collect()
}
