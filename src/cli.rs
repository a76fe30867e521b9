//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Output format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_LOOKAHEAD, ExtractConfig};

/// Extract trade offers for one product identifier from WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "tradepack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tradepack 126710BLRO
    tradepack 5711/1A --chats ~/exports -o reports
    tradepack 116500LN -f jsonl --reference refs.csv
    tradepack 126710BLRO --parallel --log-level debug")]
pub struct Args {
    /// Product identifier to search for (case-insensitive)
    pub pid: String,

    /// Folder holding the exported .txt transcripts
    #[arg(short, long, value_name = "DIR", default_value = "chats")]
    pub chats: PathBuf,

    /// Folder the result file is written to (created if missing)
    #[arg(short, long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Reference catalog (CSV) used to look up brand, family and URL
    #[arg(long, value_name = "FILE", conflicts_with = "no_reference")]
    pub reference: Option<PathBuf>,

    /// Skip the reference catalog lookup
    #[arg(long)]
    pub no_reference: bool,

    /// Process transcripts on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Lines scanned after an identifier line for its price or year
    #[arg(long, value_name = "N", default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,

    /// Keep entries that look like media placeholders
    #[arg(long)]
    pub keep_noise: bool,

    /// Diagnostic log level (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Extraction settings selected on the command line.
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig::new()
            .with_lookahead(self.lookahead)
            .with_skip_noise(!self.keep_noise)
            .with_parallel(self.parallel)
    }
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use tradepack::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tradepack", "126710BLRO"]);
        assert_eq!(args.pid, "126710BLRO");
        assert_eq!(args.chats, PathBuf::from("chats"));
        assert_eq!(args.output, PathBuf::from("output"));
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.lookahead, 5);
        assert!(args.reference.is_none());
        assert_eq!(args.extract_config(), ExtractConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "tradepack",
            "5711/1A",
            "--chats",
            "in",
            "-o",
            "out",
            "-f",
            "ndjson",
            "--parallel",
            "--lookahead",
            "3",
            "--keep-noise",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.format, OutputFormat::Jsonl);
        assert_eq!(args.log_level.as_deref(), Some("debug"));

        let config = args.extract_config();
        assert_eq!(config.lookahead, 3);
        assert!(!config.skip_noise);
        assert!(config.parallel);
    }

    #[test]
    fn test_reference_conflicts_with_no_reference() {
        let result = Args::try_parse_from([
            "tradepack",
            "X",
            "--reference",
            "refs.csv",
            "--no-reference",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_pid_required() {
        assert!(Args::try_parse_from(["tradepack"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(
            crate::format::OutputFormat::from(OutputFormat::Csv),
            crate::format::OutputFormat::Csv
        );
    }
}
