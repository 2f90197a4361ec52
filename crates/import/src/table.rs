use banknorm_core::clean_header;

/// Delimiter-split or spreadsheet rows before any header has been chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        RawTable { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits the grid at `header_idx`: that row becomes the column names
    /// (whitespace collapsed), everything below it the data rows.
    pub fn resolve(self, header_idx: usize) -> ResolvedTable {
        let mut rows = self.rows.into_iter().skip(header_idx);
        let columns = rows
            .next()
            .unwrap_or_default()
            .iter()
            .map(|c| clean_header(c))
            .collect();
        ResolvedTable::new(columns, rows.collect())
    }
}

/// Data rows with the column names taken from the located header row.
///
/// Column names may repeat; name lookups resolve to the first occurrence.
/// Rows may be ragged, a missing trailing cell reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResolvedTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        ResolvedTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Index of the first column whose normalized name equals `name`.
    pub fn position(&self, name: &str, normalize: fn(&str) -> String) -> Option<usize> {
        self.columns.iter().position(|c| normalize(c) == name)
    }

    /// Every cell of column `idx`, one per data row.
    pub fn column(&self, idx: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(idx).cloned().unwrap_or_default())
            .collect()
    }

    pub fn retain_rows(&mut self, keep: impl FnMut(&Vec<String>) -> bool) {
        self.rows.retain(keep);
    }
}
