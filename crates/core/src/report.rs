use serde::{Deserialize, Serialize};

/// Machine-readable summary of one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub profile: String,
    pub confidence: f64,
    /// Data rows below the header, before any filtering.
    pub rows_in: usize,
    pub rows_out: usize,
    pub dropped_rows: usize,
    /// Pipeline warnings first, then the detection reasons.
    pub warnings: Vec<String>,
}

impl ConversionReport {
    /// Pretty-printed JSON with non-ASCII text left unescaped.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
