//! Candidate segment extraction.
//!
//! Finds the fragments of a message body that talk about the target
//! identifier. Two strategies run over the same body and their results are
//! merged, keeping the first occurrence of each text:
//!
//! 1. **Intra-line segmentation**: a line like
//!    `126710BLRO 2023 128k // 116500LN white 2022 230k` is cut on the
//!    separator and the pieces naming the identifier are kept.
//! 2. **Forward attachment**: an identifier line with no price or year of
//!    its own is paired with the following lines that do carry one, e.g.
//!    `126710BLRO` + `2023 full set 128k`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::attributes::{parse_price, parse_year};
use super::identifier::Identifier;
use crate::config::ExtractConfig;
use crate::parsing::split_lines;

/// A reference-code shaped token such as `5711/1A` or `M126710BLRO-0001/23`.
/// Seeing one for another product means the next listing has started.
static REFERENCE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\b[A-Z0-9]{4,}/[A-Z0-9\-]+\b")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Returns `true` if the line carries a year or a non-zero price.
fn has_price_or_year(line: &str) -> bool {
    parse_price(line) > 0 || parse_year(line).is_some()
}

/// Splits every body line on `separator` and keeps the trimmed pieces that
/// name the identifier as a whole word.
pub fn split_segments(body: &str, id: &Identifier, separator: &str) -> Vec<String> {
    split_lines(body)
        .flat_map(|line| line.split(separator))
        .map(str::trim)
        .filter(|piece| id.is_word_in(piece))
        .map(str::to_string)
        .collect()
}

/// Pairs identifier lines lacking a price/year with up to `lookahead`
/// following non-empty lines that have one.
///
/// Scanning stops at a line holding a reference code for a different item.
/// Each qualifying follow line yields `"<identifier line> // <follow line>"`.
pub fn attach_following(body: &str, id: &Identifier, lookahead: usize) -> Vec<String> {
    let lines: Vec<&str> = split_lines(body)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut results = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !id.is_word_in(line) || has_price_or_year(line) {
            continue;
        }

        for follow in lines.iter().skip(i + 1).take(lookahead) {
            if REFERENCE_CODE.is_match(follow) && !id.is_word_in(follow) {
                break;
            }
            if has_price_or_year(follow) {
                results.push(format!("{line} // {follow}"));
            }
        }
    }

    results
}

/// Runs both strategies and removes exact duplicates, preserving first-seen order.
///
/// # Example
///
/// ```
/// use tradepack::Identifier;
/// use tradepack::config::ExtractConfig;
/// use tradepack::extract::extract_entries;
///
/// let pid = Identifier::new("126710BLRO")?;
/// let body = "126710BLRO jub\n2023 full set 128k";
///
/// let entries = extract_entries(body, &pid, &ExtractConfig::default());
/// assert_eq!(entries, vec![
///     "126710BLRO jub".to_string(),
///     "126710BLRO jub // 2023 full set 128k".to_string(),
/// ]);
/// # Ok::<(), tradepack::TradepackError>(())
/// ```
pub fn extract_entries(body: &str, id: &Identifier, config: &ExtractConfig) -> Vec<String> {
    let segments = split_segments(body, id, &config.separator);
    let attached = attach_following(body, id, config.lookahead);

    let mut seen = HashSet::new();
    segments
        .into_iter()
        .chain(attached)
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
