//! Assembly of records from transcripts and aggregation across files.
//!
//! Each transcript is processed on its own: tokenize, keep the messages that
//! mention the identifier, cut them into entries, drop noise, and read the
//! attributes of every surviving entry. Files share nothing, so they can be
//! processed on worker threads; numbering happens once all of them are done.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::filter::{is_noise, mentions};
use super::models::{NumberedRecord, Record};
use crate::config::ExtractConfig;
use crate::error::{Result, TradepackError};
use crate::extract::{Identifier, extract_entries};
use crate::progress::{FileEvent, Progress, ProgressCallback};
use crate::transcript::Transcript;

/// Extracts the records of one transcript, in message order then entry order.
///
/// # Example
///
/// ```
/// use tradepack::Identifier;
/// use tradepack::config::ExtractConfig;
/// use tradepack::core::processor::extract_records;
///
/// let transcript = "\
/// [1/15/24, 10:30 AM] Alice: 126710BLRO jub 2023 128k // 116500LN 230k
/// [1/15/24, 10:31 AM] Bob: <attached: 126710BLRO PHOTO.jpg>";
///
/// let pid = Identifier::new("126710blro")?;
/// let records = extract_records("dealers", transcript, &pid, &ExtractConfig::default());
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].identifier, "126710BLRO");
/// assert_eq!(records[0].price, 128_000);
/// # Ok::<(), tradepack::TradepackError>(())
/// ```
pub fn extract_records(
    chat: &str,
    content: &str,
    id: &Identifier,
    config: &ExtractConfig,
) -> Vec<Record> {
    scan_transcript(chat, content, id, config).records
}

/// Like [`extract_records`], but also counts the messages in the same pass.
pub fn scan_transcript(
    chat: &str,
    content: &str,
    id: &Identifier,
    config: &ExtractConfig,
) -> FileOutcome {
    let identifier = id.normalized();
    let mut message_count = 0;
    let mut records = Vec::new();

    for message in crate::parsing::tokenize(content) {
        message_count += 1;
        if !mentions(&message, id) {
            continue;
        }

        for entry in extract_entries(&message.body, id, config) {
            if config.skip_noise && is_noise(&entry) {
                debug!(chat, entry = %entry, "skipping noise entry");
                continue;
            }
            records.push(Record::from_entry(chat, &message, &identifier, &entry));
        }
    }

    FileOutcome {
        chat: chat.to_string(),
        message_count,
        records,
    }
}

/// Result of processing one transcript.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub chat: String,
    pub message_count: usize,
    pub records: Vec<Record>,
}

/// Reads one transcript file and extracts its records.
///
/// # Errors
///
/// Returns [`TradepackError::ReadTranscript`] if the file cannot be read.
pub fn process_file(
    path: impl AsRef<Path>,
    id: &Identifier,
    config: &ExtractConfig,
) -> Result<FileOutcome> {
    let transcript = Transcript::from_path(path)?;
    debug!(chat = %transcript.name, "processing transcript");

    let outcome = scan_transcript(&transcript.name, &transcript.content, id, config);
    info!(
        chat = %outcome.chat,
        messages = outcome.message_count,
        matches = outcome.records.len(),
        "transcript done"
    );
    Ok(outcome)
}

/// A transcript that could not be processed. The run continues without it.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: TradepackError,
}

/// Counters for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub files_total: usize,
    pub files_failed: usize,
    pub messages: usize,
    pub records: usize,
}

impl ProcessingStats {
    /// Files that were read successfully.
    pub fn files_processed(&self) -> usize {
        self.files_total - self.files_failed
    }

    /// Records per hundred messages. Returns 0.0 for a run with no messages.
    pub fn hit_rate(&self) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        (self.records as f64 / self.messages as f64) * 100.0
    }
}

/// Everything a run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: Vec<NumberedRecord>,
    pub failures: Vec<FileFailure>,
    pub stats: ProcessingStats,
}

impl RunReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Concatenates per-file record lists in order and numbers them from 1.
///
/// # Example
///
/// ```
/// use tradepack::core::processor::number_records;
///
/// let numbered = number_records(vec![vec![], vec![]]);
/// assert!(numbered.is_empty());
/// ```
pub fn number_records(per_file: Vec<Vec<Record>>) -> Vec<NumberedRecord> {
    per_file
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(i, record)| NumberedRecord {
            series: i + 1,
            record,
        })
        .collect()
}

/// Processes every file, tolerating per-file read failures.
///
/// Output order always follows `paths`, also when files run in parallel.
/// The progress callback is invoked once per file from the calling thread.
pub fn process_files(
    paths: &[PathBuf],
    id: &Identifier,
    config: &ExtractConfig,
    progress: &ProgressCallback,
) -> RunReport {
    let outcomes = run_all(paths, id, config);
    let total = paths.len();

    let mut report = RunReport::default();
    report.stats.files_total = total;
    let mut per_file = Vec::with_capacity(total);

    for (i, (path, outcome)) in paths.iter().zip(outcomes).enumerate() {
        let event = match outcome {
            Ok(outcome) => {
                report.stats.messages += outcome.message_count;
                report.stats.records += outcome.records.len();
                let event = FileEvent::Processed {
                    chat: outcome.chat,
                    messages: outcome.message_count,
                    matches: outcome.records.len(),
                };
                per_file.push(outcome.records);
                event
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping transcript");
                report.stats.files_failed += 1;
                let event = FileEvent::Failed {
                    path: path.clone(),
                    reason: error.to_string(),
                };
                report.failures.push(FileFailure {
                    path: path.clone(),
                    error,
                });
                event
            }
        };
        progress(Progress::new(i + 1, total, event));
    }

    report.records = number_records(per_file);
    info!(
        files = report.stats.files_total,
        failed = report.stats.files_failed,
        records = report.stats.records,
        "run complete"
    );
    report
}

#[cfg(feature = "parallel")]
fn run_all(
    paths: &[PathBuf],
    id: &Identifier,
    config: &ExtractConfig,
) -> Vec<Result<FileOutcome>> {
    use rayon::prelude::*;

    if config.parallel {
        debug!(files = paths.len(), "processing transcripts in parallel");
        paths
            .par_iter()
            .map(|path| process_file(path, id, config))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| process_file(path, id, config))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_all(
    paths: &[PathBuf],
    id: &Identifier,
    config: &ExtractConfig,
) -> Vec<Result<FileOutcome>> {
    paths
        .iter()
        .map(|path| process_file(path, id, config))
        .collect()
}
