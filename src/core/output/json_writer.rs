//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::models::{NumberedRecord, OutputConfig};
use crate::error::Result;
use crate::extract::{Condition, Currency, Variant};

/// Flat record view shared by the JSON and JSONL writers.
///
/// Unknown attributes serialize as `null`; catalog fields are only present
/// when the output config carries catalog details.
#[derive(Serialize)]
pub(super) struct JsonRecord<'a> {
    series: usize,
    chat: &'a str,
    date: &'a str,
    time: &'a str,
    sender: &'a str,
    identifier: &'a str,
    year: Option<u16>,
    variant: Option<Variant>,
    condition: Option<Condition>,
    price: u64,
    currency: Currency,
    raw_line: &'a str,
    remark: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    family: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

impl<'a> JsonRecord<'a> {
    pub(super) fn new(numbered: &'a NumberedRecord, config: &'a OutputConfig) -> Self {
        let r = &numbered.record;
        let info = config.catalog.as_ref();
        Self {
            series: numbered.series,
            chat: &r.chat,
            date: &r.date,
            time: &r.time,
            sender: &r.sender,
            identifier: &r.identifier,
            year: r.year,
            variant: r.variant,
            condition: r.condition,
            price: r.price,
            currency: r.currency,
            raw_line: &r.raw_line,
            remark: &r.remark,
            brand: info.map(|i| i.brand.as_str()),
            family: info.map(|i| i.family.as_str()),
            url: info.map(|i| i.url.as_str()),
        }
    }
}

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"series": 1, "chat": "dealers", "identifier": "126710BLRO", "price": 128000, ...}
/// ]
/// ```
pub fn write_json(
    records: &[NumberedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json(records: &[NumberedRecord], config: &OutputConfig) -> Result<String> {
    let rows: Vec<JsonRecord<'_>> = records
        .iter()
        .map(|r| JsonRecord::new(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
