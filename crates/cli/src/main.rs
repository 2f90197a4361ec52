use std::path::PathBuf;

use anyhow::Result;
use banknorm_import::ConvertConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "banknorm", version, about = "Normalize bank transaction exports to a canonical CSV")]
struct Cli {
    /// TOML file overriding header and filtering settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Detect which bank profile matches the file
    Detect {
        /// Path to input CSV or spreadsheet
        input: PathBuf,
    },
    /// Convert a bank export to the canonical import format
    Convert {
        /// Path to input CSV or spreadsheet
        input: PathBuf,
        /// Path to output canonical CSV
        #[arg(long)]
        out: PathBuf,
        /// Path to output JSON report
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // stdout carries results; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };

    match cli.command {
        Command::Detect { input } => commands::detect(&input, &config),
        Command::Convert { input, out, report } => {
            commands::convert(&input, &out, report.as_deref(), &config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detect() {
        let cli = Cli::try_parse_from(["banknorm", "detect", "card.csv"]).unwrap();
        assert!(matches!(cli.command, Command::Detect { ref input } if input == &PathBuf::from("card.csv")));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_convert_with_report_and_config() {
        let cli = Cli::try_parse_from([
            "banknorm", "convert", "card.xlsx", "--out", "out.csv", "--report", "r.json", "--config", "b.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("b.toml")));
        match cli.command {
            Command::Convert { input, out, report } => {
                assert_eq!(input, PathBuf::from("card.xlsx"));
                assert_eq!(out, PathBuf::from("out.csv"));
                assert_eq!(report, Some(PathBuf::from("r.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn convert_requires_out() {
        assert!(Cli::try_parse_from(["banknorm", "convert", "card.csv"]).is_err());
    }
}
