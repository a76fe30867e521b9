//! Output records and output configuration.

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::catalog::CatalogInfo;
use crate::extract::{Condition, Currency, Variant};

/// One structured offer extracted from a message.
///
/// `price == 0` means the price could not be determined; it never stands for
/// a literal zero price. `remark` is always empty when produced by the
/// pipeline and is left for the caller to fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub chat: String,
    pub date: String,
    pub time: String,
    pub sender: String,
    /// Upper-cased target identifier.
    pub identifier: String,
    pub year: Option<u16>,
    pub variant: Option<Variant>,
    pub condition: Option<Condition>,
    pub price: u64,
    pub currency: Currency,
    /// The entry text the attributes were read from.
    pub raw_line: String,
    pub remark: String,
}

impl Record {
    /// Builds a record from an entry, filling the attributes from its text.
    pub fn from_entry(chat: &str, message: &Message, identifier: &str, entry: &str) -> Self {
        use crate::extract::{parse_condition, parse_currency, parse_price, parse_variant, parse_year};

        Self {
            chat: chat.to_string(),
            date: message.date.clone(),
            time: message.time.clone(),
            sender: message.sender.clone(),
            identifier: identifier.to_string(),
            year: parse_year(entry),
            variant: parse_variant(entry),
            condition: parse_condition(entry),
            price: parse_price(entry),
            currency: parse_currency(entry),
            raw_line: entry.to_string(),
            remark: String::new(),
        }
    }

    /// Returns `true` if a price was found.
    pub fn has_price(&self) -> bool {
        self.price > 0
    }

    /// Year as written to tabular output (empty when unknown).
    pub fn year_label(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    /// Variant as written to tabular output (empty when unknown).
    pub fn variant_label(&self) -> &'static str {
        self.variant.map_or("", |v| v.as_str())
    }

    /// Condition as written to tabular output (empty when unknown).
    pub fn condition_label(&self) -> &'static str {
        self.condition.map_or("", |c| c.label())
    }

    /// Sets the free-form remark.
    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }
}

/// A record with its 1-based position in the aggregated run output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedRecord {
    pub series: usize,
    #[serde(flatten)]
    pub record: Record,
}

/// Configuration for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// CSV field delimiter (default: `;`)
    pub delimiter: u8,
    /// Catalog details added as extra columns when present.
    pub catalog: Option<CatalogInfo>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            catalog: None,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, info: CatalogInfo) -> Self {
        self.catalog = Some(info);
        self
    }
}
