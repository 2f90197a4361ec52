use std::io::Write;
use std::path::Path;

use banknorm_core::{CanonicalRow, ConversionReport, CANONICAL_COLUMNS};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ConvertConfig;
use crate::load::{load_table, LoadError};
use crate::match_engine::detect_in;
use crate::profile::{Profile, ProfileMatch};
use crate::profiles::PROFILES;
use crate::table::ResolvedTable;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("No profile found for detected name '{name}'. Reasons: {reasons:?}")]
    UnknownProfile { name: String, reasons: Vec<String> },
    #[error("Detected profile '{name}' with confidence {confidence:.2}, below the required {required:.2}")]
    LowConfidence { name: String, confidence: f64, required: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Canonical rows that survived filtering, with the run's report.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub detected: ProfileMatch,
    pub rows: Vec<CanonicalRow>,
    pub report: ConversionReport,
}

/// Converts a loaded table with the built-in profiles.
pub fn convert_table(table: &ResolvedTable, config: &ConvertConfig) -> Result<Conversion, ConvertError> {
    convert_with(PROFILES, table, config)
}

/// Detect, extract, then drop footer rows and rows missing required fields.
pub fn convert_with(
    registry: &[Profile],
    table: &ResolvedTable,
    config: &ConvertConfig,
) -> Result<Conversion, ConvertError> {
    let detected = detect_in(registry, table.columns());
    info!(profile = %detected.name, confidence = detected.confidence, "detected profile");

    let profile = registry
        .iter()
        .find(|p| p.name == detected.name)
        .ok_or_else(|| ConvertError::UnknownProfile {
            name: detected.name.clone(),
            reasons: detected.reasons.clone(),
        })?;

    if detected.confidence < config.min_confidence {
        warn!(profile = %detected.name, confidence = detected.confidence, "confidence below threshold");
        return Err(ConvertError::LowConfidence {
            name: detected.name,
            confidence: detected.confidence,
            required: config.min_confidence,
        });
    }

    let rows_in = table.len();
    let mut rows: Vec<CanonicalRow> = profile
        .extract(table)
        .into_iter()
        .map(CanonicalRow::trimmed)
        .collect();

    let mut warnings = Vec::new();

    let before = rows.len();
    rows.retain(|r| !r.contains_marker(&config.total_markers));
    let removed = before - rows.len();
    if removed > 0 {
        warnings.push(format!("Removed {removed} total/footer rows by marker match."));
    }

    let before = rows.len();
    rows.retain(CanonicalRow::is_complete);
    let dropped = before - rows.len();
    if dropped > 0 {
        warn!(dropped, "rows missing required fields");
        warnings.push(format!(
            "Dropped {dropped} rows missing required canonical fields after parsing."
        ));
    }

    warnings.extend(detected.reasons.iter().cloned());

    let report = ConversionReport {
        profile: detected.name.clone(),
        confidence: detected.confidence,
        rows_in,
        rows_out: rows.len(),
        dropped_rows: rows_in.saturating_sub(rows.len()),
        warnings,
    };

    info!(rows_in, rows_out = report.rows_out, "conversion finished");

    Ok(Conversion { detected, rows, report })
}

/// Writes rows as UTF-8 CSV under the canonical header, even when empty.
pub fn write_canonical_csv<W: Write>(rows: &[CanonicalRow], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(CANONICAL_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads `input`, converts it, writes the canonical CSV to `output` and, when
/// asked, the JSON report to `report_path`.
pub fn convert_file(
    input: &Path,
    output: &Path,
    report_path: Option<&Path>,
    config: &ConvertConfig,
) -> Result<ConversionReport, ConvertError> {
    let loaded = load_table(input, config)?;
    let conversion = convert_table(&loaded.table, config)?;

    write_canonical_csv(&conversion.rows, std::fs::File::create(output)?)?;

    if let Some(path) = report_path {
        std::fs::write(path, conversion.report.to_json()?)?;
    }

    Ok(conversion.report)
}
