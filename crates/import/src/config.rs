use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::header::EXCEL_SCAN_ROWS;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Tunables for loading and converting a file. Every key is optional in TOML.
///
/// ```toml
/// min_columns = 3
/// min_confidence = 0.5
/// total_markers = ["סה\"כ", "TOTAL"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Non-empty cells a delimited row needs to be a header candidate.
    pub min_columns: usize,
    /// Rows scanned for the header in spreadsheets.
    pub excel_scan_rows: usize,
    /// Conversion refuses a detection below this confidence.
    pub min_confidence: f64,
    /// Description substrings that mark footer and total rows.
    pub total_markers: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            min_columns: 4,
            excel_scan_rows: EXCEL_SCAN_ROWS,
            min_confidence: 0.0,
            total_markers: ["סה\"כ", "סה״כ", "TOTAL", "Total", "סך הכל"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl ConvertConfig {
    pub fn from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        let config: ConvertConfig = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::Invalid(format!(
                "min_confidence must be within 0.0..=1.0, got {}",
                self.min_confidence
            )));
        }
        if self.total_markers.iter().any(|m| m.is_empty()) {
            return Err(ConfigError::Invalid("total_markers may not contain an empty marker".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ConvertConfig::from_toml("").unwrap(), ConvertConfig::default());
    }

    #[test]
    fn defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.min_columns, 4);
        assert_eq!(config.excel_scan_rows, 30);
        assert_eq!(config.min_confidence, 0.0);
        assert!(config.total_markers.contains(&"TOTAL".to_string()));
    }

    #[test]
    fn partial_override() {
        let config = ConvertConfig::from_toml("min_columns = 3\nmin_confidence = 0.5\n").unwrap();
        assert_eq!(config.min_columns, 3);
        assert_eq!(config.min_confidence, 0.5);
        assert_eq!(config.total_markers, ConvertConfig::default().total_markers);
    }

    #[test]
    fn markers_override() {
        let config = ConvertConfig::from_toml(r#"total_markers = ["SUM"]"#).unwrap();
        assert_eq!(config.total_markers, vec!["SUM".to_string()]);
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        assert!(matches!(
            ConvertConfig::from_toml("min_confidence = 1.5"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_empty_marker() {
        assert!(matches!(
            ConvertConfig::from_toml(r#"total_markers = [""]"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_bad_toml() {
        assert!(matches!(
            ConvertConfig::from_toml("min_columns = \"four\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banknorm.toml");
        std::fs::write(&path, "excel_scan_rows = 10\n").unwrap();
        assert_eq!(ConvertConfig::load(&path).unwrap().excel_scan_rows, 10);
    }
}
