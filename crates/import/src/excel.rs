use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};
use tracing::debug;

use crate::config::ConvertConfig;
use crate::header::locate_excel_header;
use crate::load::{LoadError, LoadResult};
use crate::table::RawTable;

const PREVIEW_ROWS: usize = 20;

/// Renders a typed cell as text. Date cells use `YYYY-MM-DD HH:MM:SS`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

/// Picks the header within the first `max_scan` rows and drops data rows
/// with no content at all.
pub fn resolve_sheet(raw: RawTable, max_scan: usize) -> LoadResult {
    let header_row_index = locate_excel_header(&raw, max_scan);
    let preview = raw
        .rows()
        .iter()
        .take(PREVIEW_ROWS)
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut table = raw.resolve(header_row_index);
    table.retain_rows(|row| row.iter().any(|c| !c.trim().is_empty()));

    debug!(header_row_index, rows = table.len(), "spreadsheet source");

    LoadResult {
        table,
        encoding: "xlsx".to_string(),
        delimiter: None,
        header_row_index,
        preview,
    }
}

/// Reads the first worksheet of a spreadsheet file.
pub fn load_excel(path: &Path, config: &ConvertConfig) -> Result<LoadResult, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::Excel(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)?
        .map_err(|e| LoadError::Excel(e.to_string()))?;

    let raw = RawTable::new(
        range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect(),
    );

    Ok(resolve_sheet(raw, config.excel_scan_rows))
}
