use chrono::{Datelike, NaiveDate};

/// Day-first layouts seen in Israeli exports, tried in order.
pub const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%d/%m/%Y", "%Y-%m-%d", "%d/%m/%y", "%d-%m-%Y"];

/// Parses a bank date cell into `YYYY-MM-DD`.
///
/// A trailing time part (`"30/11/2025 00:00:00"`) is ignored.
pub fn parse_date_to_iso(value: &str) -> Option<String> {
    let token = value.split_whitespace().next()?;

    DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
        // chrono's %Y takes any digit count; "1/9/25" must fall through to %y.
        .find(|d| d.year() >= 1000)
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Canonical text form of a date cell, empty when unparseable.
pub fn date_field(value: &str) -> String {
    parse_date_to_iso(value).unwrap_or_default()
}
