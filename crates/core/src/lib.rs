pub mod amount;
pub mod canonical;
pub mod date;
pub mod report;
pub mod text;

pub use amount::{amount_field, parse_amount};
pub use canonical::{CanonicalRow, CANONICAL_COLUMNS};
pub use date::{date_field, parse_date_to_iso};
pub use report::ConversionReport;
pub use text::{clean_description, clean_header};
