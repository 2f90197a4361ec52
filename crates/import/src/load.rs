use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::ConvertConfig;
use crate::table::ResolvedTable;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode input bytes with common encodings ({0})")]
    Decode(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Spreadsheet error: {0}")]
    Excel(String),
    #[error("Spreadsheet has no worksheet")]
    NoWorksheet,
}

/// A source file read down to named columns and data rows.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub table: ResolvedTable,
    /// Encoding label, or `"xlsx"` for spreadsheets.
    pub encoding: String,
    /// `None` for spreadsheets.
    pub delimiter: Option<char>,
    /// Header row within the source grid.
    pub header_row_index: usize,
    pub preview: String,
}

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Loads `path`, choosing the spreadsheet or delimited-text reader by extension.
pub fn load_table(path: &Path, config: &ConvertConfig) -> Result<LoadResult, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let loaded = if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        crate::excel::load_excel(path, config)?
    } else {
        crate::csv::load_csv(path, config)?
    };

    info!(
        path = %path.display(),
        encoding = %loaded.encoding,
        header_row = loaded.header_row_index,
        rows = loaded.table.len(),
        "loaded table"
    );
    Ok(loaded)
}
