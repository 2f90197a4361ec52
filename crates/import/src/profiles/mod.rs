//! Built-in export layouts.
//!
//! Registration order breaks confidence ties during detection.

pub mod discount_bank_visa_v1;
pub mod israeli_cards_aggregate_v1;
pub mod israeli_credit_card_v1;

use crate::profile::Profile;

pub static PROFILES: &[Profile] = &[
    israeli_cards_aggregate_v1::PROFILE,
    israeli_credit_card_v1::PROFILE,
    discount_bank_visa_v1::PROFILE,
];

pub fn profile_by_name(name: &str) -> Option<&'static Profile> {
    PROFILES.iter().find(|p| p.name == name)
}
