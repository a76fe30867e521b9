//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::{NumberedRecord, OutputConfig};
use crate::error::Result;

/// Record columns, in output order.
const COLUMNS: [&str; 13] = [
    "Series",
    "Chat",
    "Date",
    "Time",
    "Sender",
    "Identifier",
    "Year",
    "Variant",
    "Condition",
    "Price",
    "Currency",
    "Raw Line",
    "Remark",
];

/// Writes records to CSV.
///
/// # Format
/// - Delimiter: `OutputConfig::delimiter` (default `;`)
/// - Columns: `Series`, `Chat`, `Date`, `Time`, `Sender`, `Identifier`,
///   `Year`, `Variant`, `Condition`, `Price`, `Currency`, `Raw Line`, `Remark`
/// - With catalog details: `Brand`, `Family`, `URL` appended
/// - Unknown year/variant/condition are empty cells; unknown price is `0`
pub fn write_csv(
    records: &[NumberedRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file, config)
}

/// Converts records to a CSV string. Same format as [`write_csv`].
pub fn to_csv(records: &[NumberedRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(
    records: &[NumberedRecord],
    sink: W,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(sink);

    writer.write_record(build_header(config))?;

    for record in records {
        writer.write_record(build_record(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = COLUMNS.to_vec();
    if config.catalog.is_some() {
        header.extend(["Brand", "Family", "URL"]);
    }
    header
}

/// Build CSV row for a single record.
fn build_record(numbered: &NumberedRecord, config: &OutputConfig) -> Vec<String> {
    let r = &numbered.record;
    let mut row = vec![
        numbered.series.to_string(),
        r.chat.clone(),
        r.date.clone(),
        r.time.clone(),
        r.sender.clone(),
        r.identifier.clone(),
        r.year_label(),
        r.variant_label().to_string(),
        r.condition_label().to_string(),
        r.price.to_string(),
        r.currency.code().to_string(),
        r.raw_line.clone(),
        r.remark.clone(),
    ];

    if let Some(info) = &config.catalog {
        row.extend([info.brand.clone(), info.family.clone(), info.url.clone()]);
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use crate::catalog::CatalogInfo;
    use crate::core::models::Record;
    use tempfile::NamedTempFile;

    fn numbered(series: usize, entry: &str) -> NumberedRecord {
        let msg = Message::new("15/01/2024", "10:30 AM", "Alice", entry);
        NumberedRecord {
            series,
            record: Record::from_entry("dealers", &msg, "126710BLRO", entry),
        }
    }

    #[test]
    fn test_write_csv_basic() {
        let records = vec![
            numbered(1, "126710BLRO jub 2023 128k"),
            numbered(2, "126710BLRO anyone"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&records, temp_file.path(), &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Series;Chat;Date;Time;Sender;Identifier;Year;Variant;Condition;Price;Currency;Raw Line;Remark"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1;dealers;15/01/2024;10:30 AM;Alice;126710BLRO;2023;JUB;;128000;HKD;126710BLRO jub 2023 128k;"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2;dealers;15/01/2024;10:30 AM;Alice;126710BLRO;;;;0;HKD;126710BLRO anyone;"
        );
    }

    #[test]
    fn test_to_csv_with_catalog_columns() {
        let config = OutputConfig::new()
            .with_delimiter(b',')
            .with_catalog(CatalogInfo::new("Rolex", "GMT-Master II", "https://example.com"));
        let csv = to_csv(&[numbered(1, "126710BLRO 128k")], &config).unwrap();

        let header = csv.lines().next().unwrap();
        assert!(header.ends_with("Remark,Brand,Family,URL"));
        assert!(csv.contains(",Rolex,GMT-Master II,https://example.com"));
    }

    #[test]
    fn test_to_csv_quotes_delimiter_in_raw_line() {
        let csv = to_csv(&[numbered(1, "126710BLRO // 2023; 128k")], &OutputConfig::new()).unwrap();
        assert!(csv.contains("\"126710BLRO // 2023; 128k\""));
    }
}
