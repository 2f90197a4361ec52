//! Israeli multi-card export, e.g.
//! `כרטיס, בית עסק, תאריך עסקה, סכום העסקה, ..., תאריך החיוב, סכום החיוב, פירוט`.
//!
//! Columns are read by name only. The transaction date falls back to the
//! billing date, and the billed amount to the transaction amount, when the
//! preferred column is empty throughout.

use banknorm_core::{amount_field, clean_description, date_field, CanonicalRow};

use crate::extract::{first_populated, join_details, resolve_column, ColumnSource};
use crate::profile::{strip_name, Profile};
use crate::table::ResolvedTable;

pub const PROFILE: Profile = Profile {
    name: "israeli_cards_aggregate_v1",
    signatures: &[
        &["כרטיס", "בית עסק", "תאריך עסקה", "סכום העסקה"],
        &["כרטיס", "בית עסק", "תאריך החיוב", "סכום החיוב"],
        &["כרטיס", "תאריך עסקה", "סכום העסקה"],
    ],
    normalize: strip_name,
    extract,
};

fn col(table: &ResolvedTable, name: &'static str) -> Vec<String> {
    resolve_column(table, strip_name, &[ColumnSource::Named(name)])
}

fn extract(table: &ResolvedTable) -> Vec<CanonicalRow> {
    let account = col(table, "כרטיס");
    let description = join_details(&col(table, "בית עסק"), &col(table, "פירוט"));
    let date = first_populated(vec![col(table, "תאריך עסקה"), col(table, "תאריך החיוב")]);
    let amount = first_populated(vec![col(table, "סכום החיוב"), col(table, "סכום העסקה")]);

    account
        .iter()
        .zip(&date)
        .zip(&description)
        .zip(&amount)
        .map(|(((acc, d), ds), a)| CanonicalRow {
            account_number: acc.trim().to_string(),
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

    fn header() -> Vec<String> {
        strs(&["כרטיס", "בית עסק", "תאריך עסקה", "סכום העסקה", "תאריך החיוב", "סכום החיוב", "פירוט"])
    }

    #[test]
    fn prefers_billed_amount() {
        let table = ResolvedTable::new(
            header(),
            vec![strs(&["4580", "AMAZON", "01/03/2024", "25.00", "10/04/2024", "92.10", ""])],
        );
        let rows = extract(&table);
        assert_eq!(rows, vec![CanonicalRow::new("4580", "2024-03-01", "AMAZON", "92.10")]);
    }

    #[test]
    fn falls_back_when_billed_column_blank() {
        let table = ResolvedTable::new(
            header(),
            vec![
                strs(&["4580", "AMAZON", "01/03/2024", "25.00", "10/04/2024", "", ""]),
                strs(&["4580", "EBAY", "02/03/2024", "7", "10/04/2024", "", ""]),
            ],
        );
        let amounts: Vec<String> = extract(&table).into_iter().map(|r| r.amount).collect();
        assert_eq!(amounts, strs(&["25.00", "7"]));
    }

    #[test]
    fn whitespace_billed_cell_blocks_fallback() {
        let table = ResolvedTable::new(
            header(),
            vec![strs(&["4580", "AMAZON", "01/03/2024", "25.00", "10/04/2024", " ", ""])],
        );
        assert_eq!(extract(&table)[0].amount, "");
    }

    #[test]
    fn partially_blank_billed_column_is_kept() {
        let table = ResolvedTable::new(
            header(),
            vec![
                strs(&["4580", "AMAZON", "01/03/2024", "25.00", "10/04/2024", "", ""]),
                strs(&["4580", "EBAY", "02/03/2024", "7", "10/04/2024", "7.30", ""]),
            ],
        );
        let amounts: Vec<String> = extract(&table).into_iter().map(|r| r.amount).collect();
        assert_eq!(amounts, strs(&["", "7.30"]));
    }

    #[test]
    fn billing_date_when_no_transaction_date() {
        let table = ResolvedTable::new(
            strs(&["כרטיס", "בית עסק", "תאריך החיוב", "סכום החיוב"]),
            vec![strs(&["4580", "WOLT", "10.04.2024", "55"])],
        );
        let rows = extract(&table);
        assert_eq!(rows, vec![CanonicalRow::new("4580", "2024-04-10", "WOLT", "55")]);
    }

    #[test]
    fn details_appended_to_merchant() {
        let table = ResolvedTable::new(
            header(),
            vec![strs(&["4580", "IKEA", "01/03/2024", "900", "10/04/2024", "300", "תשלום 1 מתוך 3"])],
        );
        let rows = extract(&table);
        assert_eq!(rows[0].description, "IKEA — תשלום 1 מתוך 3");
    }

    #[test]
    fn missing_columns_are_empty() {
        let table = ResolvedTable::new(strs(&["other"]), vec![strs(&["x"]), strs(&["y"])]);
        let rows = extract(&table);
        assert_eq!(rows, vec![CanonicalRow::default(), CanonicalRow::default()]);
    }
}
