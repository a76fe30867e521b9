//! JSON Lines (JSONL) output writer.
//!
//! One record per line, same fields as the JSON writer. Convenient for
//! appending runs together or loading into line-oriented tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::json_writer::JsonRecord;
use crate::core::models::{NumberedRecord, OutputConfig};
use crate::error::Result;

/// Writes records to JSONL (JSON Lines) format.
///
/// ```jsonl
/// {"series":1,"chat":"dealers","identifier":"126710BLRO",...}
/// {"series":2,"chat":"dealers","identifier":"126710BLRO",...}
/// ```
pub fn write_jsonl(
    records: &[NumberedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string. Same format as [`write_jsonl`].
pub fn to_jsonl(records: &[NumberedRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(
    records: &[NumberedRecord],
    writer: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(&JsonRecord::new(record, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
