use std::borrow::Cow;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::debug;

use crate::config::ConvertConfig;
use crate::header::locate_header;
use crate::load::{LoadError, LoadResult};
use crate::table::RawTable;

/// Tried in order; the first strict decode wins.
pub const COMMON_ENCODINGS: &[&str] = &["utf-8-sig", "utf-8", "cp1255", "iso-8859-8", "windows-1252"];
pub const COMMON_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

const SNIFF_CHARS: usize = 50_000;
const SNIFF_LINES: usize = 20;
const PREVIEW_LINES: usize = 20;

fn decode_as(label: &str, data: &[u8]) -> Option<String> {
    match label {
        "utf-8-sig" => {
            let body = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
            std::str::from_utf8(body).ok().map(str::to_string)
        }
        "utf-8" => std::str::from_utf8(data).ok().map(str::to_string),
        other => Encoding::for_label(other.as_bytes())?
            .decode_without_bom_handling_and_without_replacement(data)
            .map(Cow::into_owned),
    }
}

/// Decodes raw bytes with the first encoding that accepts them, returning the
/// text and that encoding's label.
pub fn decode_bytes(data: &[u8]) -> Result<(String, &'static str), LoadError> {
    COMMON_ENCODINGS
        .iter()
        .find_map(|label| decode_as(label, data).map(|text| (text, *label)))
        .ok_or_else(|| LoadError::Decode(COMMON_ENCODINGS.join(", ")))
}

/// Picks the delimiter whose per-line count is high and steady across the
/// first non-blank lines. Falls back to a comma.
pub fn sniff_delimiter(text: &str) -> u8 {
    let sample: String = text.chars().take(SNIFF_CHARS).collect();
    let lines: Vec<&str> = sample
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();
    if lines.is_empty() {
        return b',';
    }

    let mut best_delimiter = b',';
    let mut best_score = 0.0f64;

    for &delimiter in &COMMON_DELIMITERS {
        let counts: Vec<f64> = lines
            .iter()
            .map(|l| l.bytes().filter(|&b| b == delimiter).count() as f64)
            .collect();
        let avg = counts.iter().sum::<f64>() / counts.len() as f64;
        let variance = counts.iter().map(|c| (c - avg).powi(2)).sum::<f64>() / counts.len() as f64;
        let score = avg / (1.0 + variance.sqrt());

        if score > best_score {
            best_score = score;
            best_delimiter = delimiter;
        }
    }

    best_delimiter
}

/// Splits text into rows of cells. Row widths may vary.
pub fn parse_grid(text: &str, delimiter: u8) -> Result<RawTable, LoadError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(rows))
}

pub fn load_csv_bytes(data: &[u8], config: &ConvertConfig) -> Result<LoadResult, LoadError> {
    let (text, encoding) = decode_bytes(data)?;
    let delimiter = sniff_delimiter(&text);
    let raw = parse_grid(&text, delimiter)?;
    let header_row_index = locate_header(&raw, config.min_columns);

    debug!(encoding, delimiter = %char::from(delimiter), header_row_index, "delimited source");

    let preview = text.lines().take(PREVIEW_LINES).collect::<Vec<_>>().join("\n");

    Ok(LoadResult {
        table: raw.resolve(header_row_index),
        encoding: encoding.to_string(),
        delimiter: Some(char::from(delimiter)),
        header_row_index,
        preview,
    })
}

pub fn load_csv(path: &Path, config: &ConvertConfig) -> Result<LoadResult, LoadError> {
    let data = std::fs::read(path)?;
    load_csv_bytes(&data, config)
}
