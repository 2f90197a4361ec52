use serde::{Deserialize, Serialize};

/// Output column order of every converted file.
pub const CANONICAL_COLUMNS: [&str; 4] = ["account_number", "transaction_date", "description", "amount"];

/// One transaction in the canonical schema.
///
/// Every field is text. A date or amount that failed to parse is an empty
/// string; whether the row survives is decided later by [`CanonicalRow::is_complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRow {
    pub account_number: String,
    /// ISO 8601 `YYYY-MM-DD`.
    pub transaction_date: String,
    pub description: String,
    /// Plain decimal, negative for refunds and credits.
    pub amount: String,
}

impl CanonicalRow {
    pub fn new(
        account_number: impl Into<String>,
        transaction_date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        CanonicalRow {
            account_number: account_number.into(),
            transaction_date: transaction_date.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Trims surrounding whitespace from every field.
    pub fn trimmed(self) -> Self {
        CanonicalRow {
            account_number: self.account_number.trim().to_string(),
            transaction_date: self.transaction_date.trim().to_string(),
            description: self.description.trim().to_string(),
            amount: self.amount.trim().to_string(),
        }
    }

    /// Date, description and amount are required. Account number is optional
    /// because some exports only carry it in a title row.
    pub fn is_complete(&self) -> bool {
        !self.transaction_date.is_empty() && !self.description.is_empty() && !self.amount.is_empty()
    }

    pub fn contains_marker(&self, markers: &[String]) -> bool {
        markers.iter().any(|m| self.description.contains(m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_row_without_account() {
        let row = CanonicalRow::new("", "2024-01-15", "SHUFERSAL", "120.50");
        assert!(row.is_complete());
    }

    #[test]
    fn incomplete_when_amount_missing() {
        let row = CanonicalRow::new("1234", "2024-01-15", "SHUFERSAL", "");
        assert!(!row.is_complete());
    }

    #[test]
    fn incomplete_when_date_missing() {
        let row = CanonicalRow::new("1234", "", "SHUFERSAL", "5");
        assert!(!row.is_complete());
    }

    #[test]
    fn trimmed_strips_every_field() {
        let row = CanonicalRow::new(" 1234 ", " 2024-01-15", "desc ", " 1 ").trimmed();
        assert_eq!(row, CanonicalRow::new("1234", "2024-01-15", "desc", "1"));
    }

    #[test]
    fn marker_match_on_description() {
        let markers = vec!["סה\"כ".to_string(), "TOTAL".to_string()];
        assert!(CanonicalRow::new("", "", "סה\"כ לחיוב", "").contains_marker(&markers));
        assert!(CanonicalRow::new("", "", "GRAND TOTAL", "").contains_marker(&markers));
        assert!(!CanonicalRow::new("", "", "total wine", "").contains_marker(&markers));
    }

    #[test]
    fn column_order() {
        assert_eq!(
            CANONICAL_COLUMNS,
            ["account_number", "transaction_date", "description", "amount"]
        );
    }
}
