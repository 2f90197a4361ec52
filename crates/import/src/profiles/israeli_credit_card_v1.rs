//! Common Israeli credit-card export: card name, date, merchant, purchase amount.

use banknorm_core::{amount_field, clean_description, date_field, CanonicalRow};

use crate::extract::{resolve_column, ColumnSource};
use crate::profile::{strip_name, Profile};
use crate::table::ResolvedTable;

pub const PROFILE: Profile = Profile {
    name: "israeli_credit_card_v1",
    signatures: &[
        &["שם כרטיס", "תאריך", "שם בית עסק", "סכום קנייה"],
        &["תאריך", "שם בית עסק", "סכום קנייה"],
    ],
    normalize: strip_name,
    extract,
};

fn pick(table: &ResolvedTable, name: &'static str, fallback_idx: usize) -> Vec<String> {
    resolve_column(
        table,
        strip_name,
        &[ColumnSource::Named(name), ColumnSource::Position(fallback_idx)],
    )
}

fn extract(table: &ResolvedTable) -> Vec<CanonicalRow> {
    let account = pick(table, "שם כרטיס", 0);
    let date = pick(table, "תאריך", 1);
    let desc = pick(table, "שם בית עסק", 2);
    let amount = pick(table, "סכום קנייה", 3);

    account
        .iter()
        .zip(&date)
        .zip(&desc)
        .zip(&amount)
        .map(|(((acc, d), ds), a)| CanonicalRow {
            account_number: acc.trim().to_string(),
            transaction_date: date_field(d),
            description: clean_description(ds),
            amount: amount_field(a),
        })
        .collect()
}
