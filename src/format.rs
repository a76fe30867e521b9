//! Output format selection.
//!
//! [`OutputFormat`] carries no CLI dependency, so library callers can pick a
//! writer the same way the binary does.
//!
//! # Example
//!
//! ```rust
//! use tradepack::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("126710BLRO_20240115_103000.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! assert_eq!(format.extension(), "jsonl");
//! # Ok::<(), tradepack::TradepackError>(())
//! ```

use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::models::{NumberedRecord, OutputConfig};
use crate::error::TradepackError;
use crate::extract::Identifier;

/// Output format for extracted records.
///
/// - [`Csv`](OutputFormat::Csv) - spreadsheet friendly, one row per record
/// - [`Json`](OutputFormat::Json) - pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
///
/// # Example
///
/// ```rust
/// use tradepack::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tradepack::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tradepack::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("output.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TradepackError> {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(TradepackError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Result file name: `<identifier>_<YYYYmmdd_HHMMSS>.<ext>`.
///
/// Path separators in the identifier become underscores.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use tradepack::Identifier;
/// use tradepack::format::{OutputFormat, output_file_name};
///
/// let at = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 5).unwrap();
/// let pid = Identifier::new("5711/1A")?;
/// assert_eq!(output_file_name(&pid, OutputFormat::Csv, at), "5711_1A_20240115_103005.csv");
/// # Ok::<(), tradepack::TradepackError>(())
/// ```
pub fn output_file_name(id: &Identifier, format: OutputFormat, at: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        id.file_stem(),
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Name of the Cargo feature that provides a writer for `format`.
fn required_feature(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Csv => "csv-output",
        OutputFormat::Json | OutputFormat::Jsonl => "json-output",
    }
}

/// Writes numbered records to a file in the specified format.
///
/// # Example
///
/// ```rust,no_run
/// # #[cfg(all(feature = "csv-output", feature = "json-output"))]
/// # fn example() -> tradepack::Result<()> {
/// use tradepack::format::{OutputFormat, write_to_format};
/// use tradepack::core::models::OutputConfig;
///
/// let records = vec![];
/// write_to_format(&records, "out.csv", OutputFormat::Csv, &OutputConfig::new())?;
/// write_to_format(&records, "out.jsonl", OutputFormat::Jsonl, &OutputConfig::new())?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[NumberedRecord],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), TradepackError> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(TradepackError::invalid_format(
            "output",
            format!(
                "Output format {format:?} requires the '{}' feature to be enabled",
                required_feature(format)
            ),
        )),
    }
}

/// Converts numbered records to a string in the specified format.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "csv-output")]
/// # fn example() -> tradepack::Result<()> {
/// use tradepack::format::{OutputFormat, to_format_string};
/// use tradepack::core::models::OutputConfig;
///
/// let csv = to_format_string(&[], OutputFormat::Csv, &OutputConfig::new())?;
/// assert!(csv.starts_with("Series;Chat"));
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[NumberedRecord],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, TradepackError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(TradepackError::invalid_format(
            "output",
            format!(
                "Output format {format:?} requires the '{}' feature to be enabled",
                required_feature(format)
            ),
        )),
    }
}
