use banknorm_core::CanonicalRow;
use serde::Serialize;

use crate::table::ResolvedTable;

/// One accepted set of header names for a profile.
pub type Signature = &'static [&'static str];

/// A known export layout: how to recognise its header and how to map its
/// columns onto the canonical schema.
#[derive(Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    /// Alternatives across export versions; order only affects reason text.
    pub signatures: &'static [Signature],
    /// Applied to both sides before header names are compared.
    pub normalize: fn(&str) -> String,
    /// Yields exactly one canonical row per input row.
    pub extract: fn(&ResolvedTable) -> Vec<CanonicalRow>,
}

impl Profile {
    pub fn extract(&self, table: &ResolvedTable) -> Vec<CanonicalRow> {
        (self.extract)(table)
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("signatures", &self.signatures)
            .finish_non_exhaustive()
    }
}

/// Outcome of scoring one profile, or the whole registry, against a header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileMatch {
    pub name: String,
    /// Share of the best signature's headers found, 0.0–1.0.
    pub confidence: f64,
    pub reasons: Vec<String>,
}

impl ProfileMatch {
    /// Name used when there is nothing to match against.
    pub const UNKNOWN: &'static str = "unknown";

    pub fn unknown(reason: impl Into<String>) -> Self {
        ProfileMatch {
            name: Self::UNKNOWN.to_string(),
            confidence: 0.0,
            reasons: vec![reason.into()],
        }
    }
}

/// Header normalization for delimited exports.
pub fn strip_name(s: &str) -> String {
    s.trim().to_string()
}

/// Header normalization for spreadsheets, whose header cells often wrap.
pub fn strip_line_breaks(s: &str) -> String {
    s.replace('\n', " ").trim().to_string()
}
