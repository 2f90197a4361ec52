//! Header row location.
//!
//! Bank exports often open with a bank name, an account summary or section
//! totals, and may hold several sub-tables. Each candidate row is scored by
//! header keyword hits and width, plus evidence of date- and amount-like
//! cells in the rows that follow it.

use tracing::debug;

use crate::table::RawTable;

/// Rows considered as header candidates.
pub const MAX_SCAN_ROWS: usize = 500;
/// Rows inspected below each candidate.
pub const LOOKAHEAD_ROWS: usize = 40;
/// Per-kind cap on lookahead evidence.
const LOOKAHEAD_CAP: usize = 30;
/// Both evidence counts at this level end the lookahead early.
const LOOKAHEAD_CONCLUSIVE: usize = 10;
/// Default scan window for spreadsheet sheets.
pub const EXCEL_SCAN_ROWS: usize = 30;

pub const HEADER_KEYWORDS: &[&str] = &[
    "תאריך", "סכום", "תיאור", "תאור", "פרטים", "עסקה", "פעולה",
    "שם בית עסק", "אסמכתא", "חובה", "זכות", "מטבע", "מספר חשבון", "יתרה",
    "date", "amount", "description", "details", "transaction", "currency", "account", "balance",
];

/// Spreadsheet headers also name the card and the merchant column on its own.
pub const EXCEL_HEADER_KEYWORDS: &[&str] = &[
    "תאריך", "סכום", "תיאור", "תאור", "פרטים", "עסקה", "פעולה",
    "שם בית עסק", "בית עסק", "אסמכתא", "חובה", "זכות", "מטבע",
    "מספר חשבון", "יתרה", "כרטיס",
    "date", "amount", "description", "details", "transaction",
    "currency", "account", "balance",
];

fn keyword_hits(cells: &[&str], keywords: &[&str]) -> usize {
    let joined = cells.join(" ").to_lowercase();
    keywords
        .iter()
        .filter(|kw| joined.contains(kw.to_lowercase().as_str()))
        .count()
}

fn strip_money_marks(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '₪' | '$' | '€' | '(' | ')' | '+' | '-' | ',' | '.' | '/'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_date_like(s: &str) -> bool {
    let s = s.trim();
    if s.chars().count() < 8 || !s.contains(['.', '/', '-']) {
        return false;
    }
    let digits = s.chars().filter(char::is_ascii_digit).count();
    let seps = s.chars().filter(|c| matches!(c, '.' | '-' | '/')).count();
    digits >= 6 && seps >= 2
}

fn is_amount_like(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    let mut v: String = s.chars().filter(|c| !matches!(c, '₪' | '$' | '€' | ' ')).collect();
    if v.starts_with('(') && v.ends_with(')') && v.len() >= 2 {
        v = v[1..v.len() - 1].to_string();
    }
    let v = v.strip_prefix(['+', '-']).unwrap_or(&v);
    all_digits(&v.replace([',', '.'], ""))
}

/// Date- and amount-like cell counts in the rows below `idx`, up to `end`.
fn lookahead(rows: &[Vec<String>], idx: usize, end: usize) -> (usize, usize) {
    let mut date_hits = 0;
    let mut amount_hits = 0;

    for row in rows.iter().take(end).skip(idx + 1).take(LOOKAHEAD_ROWS) {
        for cell in row {
            if date_hits < LOOKAHEAD_CAP && is_date_like(cell) {
                date_hits += 1;
            }
            if amount_hits < LOOKAHEAD_CAP && is_amount_like(cell) {
                amount_hits += 1;
            }
        }
        if date_hits >= LOOKAHEAD_CONCLUSIVE && amount_hits >= LOOKAHEAD_CONCLUSIVE {
            break;
        }
    }

    (date_hits, amount_hits)
}

/// Returns the index of the row that most likely holds the column names.
///
/// Rows with fewer than `min_columns` non-empty cells are never chosen, nor
/// are rows that read as pure data (over 70% numeric with no keyword). Ties go
/// to the earlier row; with no qualifying row the answer is 0.
pub fn locate_header(table: &RawTable, min_columns: usize) -> usize {
    let rows = table.rows();
    let max_scan = rows.len().min(MAX_SCAN_ROWS);

    let mut best_idx = 0;
    let mut best_score: i64 = -1;

    for (i, row) in rows.iter().enumerate().take(max_scan) {
        let nonempty: Vec<&str> = row
            .iter()
            .map(|c| c.trim().trim_matches('"'))
            .filter(|c| !c.is_empty())
            .collect();
        if nonempty.len() < min_columns {
            continue;
        }

        let kw_hits = keyword_hits(&nonempty, HEADER_KEYWORDS);

        let numeric_like = nonempty
            .iter()
            .filter(|c| all_digits(&strip_money_marks(c)))
            .count();
        let numeric_ratio = numeric_like as f64 / nonempty.len().max(1) as f64;
        if numeric_ratio > 0.7 && kw_hits == 0 {
            continue;
        }

        let base_score = kw_hits * 10 + nonempty.len();
        let (date_hits, amount_hits) = lookahead(rows, i, max_scan);
        let score = (base_score + date_hits * 2 + amount_hits) as i64;

        debug!(row = i, kw_hits, date_hits, amount_hits, score, "header candidate");

        if score > best_score {
            best_score = score;
            best_idx = i;
        }
    }

    best_idx
}

/// Spreadsheet variant: cells are already typed, so only keyword hits and
/// width count, over the first `max_scan` rows.
pub fn locate_excel_header(table: &RawTable, max_scan: usize) -> usize {
    let mut best_idx = 0;
    let mut best_score: i64 = -1;

    for (i, row) in table.rows().iter().enumerate().take(max_scan) {
        let cells: Vec<&str> = row
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty() && *c != "nan")
            .collect();
        if cells.is_empty() {
            continue;
        }

        let score = (keyword_hits(&cells, EXCEL_HEADER_KEYWORDS) * 10 + cells.len()) as i64;
        if score > best_score {
            best_score = score;
            best_idx = i;
        }
    }

    best_idx
}
