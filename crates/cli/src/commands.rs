use std::path::Path;

use anyhow::{Context, Result};
use banknorm_core::ConversionReport;
use banknorm_import::{convert_file, load_table, match_engine, ConvertConfig, ProfileMatch};
use tracing::{debug, info};

/// Text printed by `banknorm detect`.
pub fn format_detection(m: &ProfileMatch) -> String {
    let mut out = format!("profile={} confidence={:.2}", m.name, m.confidence);
    if !m.reasons.is_empty() {
        out.push_str("\nreasons:");
        for r in &m.reasons {
            out.push_str(&format!("\n - {r}"));
        }
    }
    out
}

pub fn detect(input: &Path, config: &ConvertConfig) -> Result<()> {
    let loaded = load_table(input, config)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    debug!(
        header_row = loaded.header_row_index,
        delimiter = ?loaded.delimiter,
        "source preview:\n{}",
        loaded.preview
    );
    let m = match_engine::detect(loaded.table.columns());
    println!("{}", format_detection(&m));
    Ok(())
}

fn print_report(report: &ConversionReport) -> Result<()> {
    println!("{}", report.to_json()?);
    Ok(())
}

pub fn convert(input: &Path, out: &Path, report: Option<&Path>, config: &ConvertConfig) -> Result<()> {
    info!("Converting {} -> {}", input.display(), out.display());
    let rep = convert_file(input, out, report, config)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    print_report(&rep)
}
