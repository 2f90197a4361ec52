//! Discount Bank Visa card export (spreadsheet).
//!
//! The sheet opens with an account title, a blank row and a section total
//! before the header; header cells wrap (`תאריך\nעסקה`). Columns:
//!
//! | pos | header        | use                                  |
//! |-----|---------------|--------------------------------------|
//! | 0   | תאריך עסקה    | transaction date                     |
//! | 1   | שם בית עסק    | description                          |
//! | 2   | סכום עסקה     | original amount, differs for FX      |
//! | 3   | סכום חיוב     | charged amount in ILS, used          |
//! | 4   | סוג עסקה      | transaction type                     |
//!
//! No per-row account number exists in this layout.

use banknorm_core::{amount_field, clean_description, date_field, CanonicalRow};

use crate::extract::{resolve_column, ColumnSource};
use crate::profile::{strip_line_breaks, Profile};
use crate::table::ResolvedTable;

pub const PROFILE: Profile = Profile {
    name: "discount_bank_visa_v1",
    signatures: &[
        &["שם בית עסק", "סכום חיוב", "סוג\nעסקה"],
        &["שם בית עסק", "סכום חיוב"],
    ],
    normalize: strip_line_breaks,
    extract,
};

fn pick(table: &ResolvedTable, name: &'static str, fallback_idx: usize) -> Vec<String> {
    resolve_column(
        table,
        strip_line_breaks,
        &[ColumnSource::Named(name), ColumnSource::Position(fallback_idx)],
    )
}

fn extract(table: &ResolvedTable) -> Vec<CanonicalRow> {
    let date = pick(table, "תאריך עסקה", 0);
    let desc = pick(table, "שם בית עסק", 1);
    let amount = pick(table, "סכום חיוב", 3);

    date.iter()
        .zip(&desc)
        .zip(&amount)
        .map(|((d, ds), a)| CanonicalRow {
            account_number: String::new(),
            transaction_date: date_field(d),
            description: clean_description(ds),
            amount: amount_field(a),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reads_wrapped_headers() {
        let table = ResolvedTable::new(
            strs(&["תאריך\nעסקה", "שם בית עסק", "סכום\nעסקה", "סכום חיוב", "סוג\nעסקה"]),
            vec![strs(&["2025-11-30 00:00:00", "AROMA  TLV", "10", "35.5", "רגילה"])],
        );
        let rows = extract(&table);
        assert_eq!(rows, vec![CanonicalRow::new("", "2025-11-30", "AROMA TLV", "35.5")]);
    }

    #[test]
    fn charged_amount_by_position() {
        let table = ResolvedTable::new(
            strs(&["a", "b", "c", "d"]),
            vec![strs(&["30/11/2025", "WOLT", "$12", "44.10"])],
        );
        let rows = extract(&table);
        assert_eq!(rows, vec![CanonicalRow::new("", "2025-11-30", "WOLT", "44.10")]);
    }

    #[test]
    fn refund_keeps_sign() {
        let table = ResolvedTable::new(
            strs(&["תאריך עסקה", "שם בית עסק", "סכום עסקה", "סכום חיוב"]),
            vec![strs(&["01.12.2025", "ZARA", "-199.90", "-199.90"])],
        );
        assert_eq!(extract(&table)[0].amount, "-199.90");
    }
}
