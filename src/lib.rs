//! # Tradepack
//!
//! Extracts structured trade offers for one product identifier from
//! WhatsApp chat exports.
//!
//! ## Overview
//!
//! Dealer group chats list watches as free text:
//!
//! ```text
//! [15/01/2024, 10:30:45 AM] Dealer HK: WTS
//! 126710BLRO jub 2023 full set 128k // 116500LN white 2022 230k
//! ```
//!
//! Tradepack turns every mention of the target identifier into a [`Record`]
//! with price, currency, year, variant and condition read from the text.
//!
//! The pipeline, leaves first:
//!
//! 1. [`parsing::tokenize`] splits a transcript into [`Message`]s.
//! 2. [`extract::extract_entries`] finds the fragments about the identifier.
//! 3. [`extract::attributes`] reads price, currency, year, variant and condition.
//! 4. [`core::processor`] filters noise, assembles records and numbers them
//!    across files.
//!
//! ## Quick Start
//!
//! ```rust
//! use tradepack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "\
//! [15/01/2024, 10:30:45 AM] Dealer HK: 126710BLRO
//! 2023 full set 128k";
//!
//!     let pid = Identifier::new("126710blro")?;
//!     let records = extract_records("HK Dealers", transcript, &pid, &ExtractConfig::default());
//!
//!     assert_eq!(records.len(), 2);
//!     assert_eq!(records[1].raw_line, "126710BLRO // 2023 full set 128k");
//!     assert_eq!(records[1].price, 128_000);
//!     assert_eq!(records[1].year, Some(2023));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - [`Message`] type
//! - [`parsing`] - WhatsApp transcript tokenizer
//! - [`transcript`] - Transcript files and chat folder enumeration
//! - [`extract`] - [`Identifier`], segment extraction, attribute heuristics
//! - [`core`] - Records, filters, processing and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`catalog`] - Optional reference catalog lookup
//! - [`config`] - [`ExtractConfig`](config::ExtractConfig)
//! - [`progress`] - Per-file progress callbacks
//! - [`logging`] - `tracing` subscriber setup
//! - [`error`] - Unified error types ([`TradepackError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod message;
pub mod parsing;
pub mod progress;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::Record;
pub use error::{Result, TradepackError};
pub use extract::Identifier;
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tradepack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{Result, TradepackError};

    pub use crate::config::ExtractConfig;

    pub use crate::extract::{Condition, Currency, Identifier, Variant};

    pub use crate::core::models::{NumberedRecord, OutputConfig, Record};

    pub use crate::core::processor::{
        RunReport, extract_records, number_records, process_file, process_files,
    };

    pub use crate::transcript::{Transcript, find_transcripts};

    pub use crate::catalog::{Catalog, CatalogInfo};

    #[cfg(feature = "catalog")]
    pub use crate::catalog::CsvCatalog;

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    pub use crate::progress::{Progress, ProgressCallback, no_progress};
}
