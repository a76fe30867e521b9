//! Core processing logic for tradepack.
//!
//! This module contains:
//! - [`models`] - Output records and output configuration
//! - [`filter`] - Mention pre-check and noise filter
//! - [`processor`] - Record assembly, per-file processing and aggregation
//! - [`output`] - Format writers (CSV, JSON, JSONL)

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

pub use filter::{is_noise, mentions};
pub use models::{NumberedRecord, OutputConfig, Record};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

pub use processor::{
    FileFailure, FileOutcome, ProcessingStats, RunReport, extract_records, number_records,
    process_file, process_files, scan_transcript,
};
