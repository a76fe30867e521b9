//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV, semicolon delimited by default - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON record per line - requires `json-output` feature
//!
//! Every writer takes numbered records, so the `Series` column is always first.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> tradepack::Result<()> {
//! use tradepack::Identifier;
//! use tradepack::config::ExtractConfig;
//! use tradepack::core::models::OutputConfig;
//! use tradepack::core::output::{to_csv, write_json};
//! use tradepack::core::processor::{extract_records, number_records};
//!
//! let pid = Identifier::new("126710BLRO")?;
//! let records = extract_records(
//!     "dealers",
//!     "[1/15/24, 10:30 AM] Alice: 126710BLRO 128k",
//!     &pid,
//!     &ExtractConfig::default(),
//! );
//! let numbered = number_records(vec![records]);
//!
//! write_json(&numbered, "126710BLRO.json", &OutputConfig::new())?;
//! let csv_string = to_csv(&numbered, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
