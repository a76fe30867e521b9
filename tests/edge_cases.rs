//! Edge case tests for transcript handling and attribute extraction

use std::fs;

use tempfile::tempdir;
use tradepack::prelude::*;

fn pid(s: &str) -> Identifier {
    Identifier::new(s).unwrap()
}

fn records(content: &str, id: &str) -> Vec<Record> {
    extract_records("edge", content, &pid(id), &ExtractConfig::default())
}

// =========================================================================
// Transcript input
// =========================================================================

#[test]
fn test_preamble_only_transcript() {
    let transcript = Transcript::new("t", "Exported chat\n126710BLRO 2023 128k\n");
    assert_eq!(transcript.messages().count(), 0);
    assert!(records(&transcript.content, "126710BLRO").is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let content = "[1/15/24, 10:30 AM] Alice: 126710BLRO\r\n2023 128k\r\n";
    let found = records(content, "126710BLRO");
    assert_eq!(found.len(), 2);
    assert_eq!(found[1].raw_line, "126710BLRO // 2023 128k");
    assert!(found.iter().all(|r| !r.raw_line.contains('\r')));
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Broken.txt");
    fs::write(&path, b"[1/15/24, 10:30 AM] Alice: 126710BLRO \xff 128k\n").unwrap();

    let transcript = Transcript::from_path(&path).unwrap();
    assert_eq!(transcript.name, "Broken");

    let found = records(&transcript.content, "126710BLRO");
    assert_eq!(found.len(), 1);
    assert!(found[0].raw_line.contains('\u{FFFD}'));
    assert_eq!(found[0].price, 128_000);
}

#[test]
fn test_uppercase_txt_extension_is_found() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Upper.TXT"), "").unwrap();
    fs::create_dir(dir.path().join("nested.txt")).unwrap();

    let paths = find_transcripts(dir.path()).unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with("Upper.TXT"));
}

#[test]
fn test_colon_in_body_keeps_sender() {
    let content = "[1/15/24, 10:30 AM] Bob: Re: 126710BLRO: 128k";
    let found = records(content, "126710BLRO");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].sender, "Bob");
    assert_eq!(found[0].raw_line, "Re: 126710BLRO: 128k");
}

#[test]
fn test_unicode_around_identifier() {
    let content = "[1/15/24, 10:30 AM] Иван: 🔥 126710BLRO новые 2024 usdt 150000";
    let found = records(content, "126710BLRO");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].sender, "Иван");
    assert_eq!(found[0].year, Some(2024));
    assert_eq!(found[0].currency, Currency::Usdt);
    assert_eq!(found[0].price, 150_000);
}

// =========================================================================
// Identifier matching
// =========================================================================

#[test]
fn test_identifier_is_literal_not_pattern() {
    let content = "[1/15/24, 10:30 AM] Alice: 126710XBLRO 128k";
    assert!(records(content, "126710.BLRO").is_empty());
}

#[test]
fn test_identifier_whitespace_is_trimmed() {
    let id = pid("  126710blro \t");
    assert_eq!(id.normalized(), "126710BLRO");
    assert!(Identifier::new(" \t ").is_err());
}

#[test]
fn test_identifier_inside_longer_code_is_not_a_hit() {
    let content = "[1/15/24, 10:30 AM] Alice: 126710BLRO0 2023 128k";
    assert!(records(content, "126710BLRO").is_empty());
}

// =========================================================================
// Attribute sentinels
// =========================================================================

#[test]
fn test_record_without_cues_uses_sentinels() {
    let found = records("[1/15/24, 10:30 AM] Alice: 126710BLRO", "126710BLRO");
    assert_eq!(found.len(), 1);

    let record = &found[0];
    assert_eq!(record.year, None);
    assert_eq!(record.variant, None);
    assert_eq!(record.condition, None);
    assert_eq!(record.price, 0);
    assert!(!record.has_price());
    assert_eq!(record.currency, Currency::default());
    assert_eq!(record.remark, "");
}

#[test]
fn test_gray_normalizes_to_grey() {
    let found = records("[1/15/24, 10:30 AM] Alice: 126710BLRO gray dial 2023", "126710BLRO");
    assert_eq!(found[0].variant, Some(Variant::Grey));
}

#[test]
fn test_empty_separator_keeps_default() {
    let config = ExtractConfig::new().with_separator("");
    assert_eq!(config.separator, "//");
}
