//! Transcript input: a chat name plus its raw text.
//!
//! Exports are read as bytes and decoded lossily, so a stray invalid byte
//! only costs one replacement character instead of the whole file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TradepackError};
use crate::parsing::{Messages, tokenize};

/// One chat export ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Value written to the `Chat` column.
    pub name: String,
    /// Full decoded text.
    pub content: String,
}

impl Transcript {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Reads a transcript from disk. The chat name is the file stem.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`TradepackError::ReadTranscript`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| TradepackError::read_transcript(path, e))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(chat = %name, bytes = bytes.len(), "read transcript");
        Ok(Self { name, content })
    }

    /// Lazily tokenizes the transcript into messages.
    pub fn messages(&self) -> Messages<'_> {
        tokenize(&self.content)
    }
}

/// Lists the `*.txt` files directly inside `dir`, sorted by file name.
///
/// Sub-folders are not searched. The extension check is case-insensitive.
///
/// # Errors
///
/// - [`TradepackError::Io`] if the folder cannot be listed
/// - [`TradepackError::NoTranscripts`] if it holds no `.txt` file
pub fn find_transcripts(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt && path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(TradepackError::no_transcripts(dir));
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_path_uses_file_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("HK Dealers.txt");
        fs::write(&path, "[1/15/24, 10:30 AM] Alice: hi").unwrap();

        let transcript = Transcript::from_path(&path).unwrap();
        assert_eq!(transcript.name, "HK Dealers");
        assert_eq!(transcript.messages().count(), 1);
    }

    #[test]
    fn test_from_path_lossy_decoding() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        fs::write(&path, b"[1/15/24, 10:30 AM] Alice: 128k \xff\xfe ok").unwrap();

        let transcript = Transcript::from_path(&path).unwrap();
        assert!(transcript.content.contains('\u{FFFD}'));
        assert!(transcript.content.ends_with("ok"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Transcript::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_find_transcripts_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.TXT"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let found = find_transcripts(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_find_transcripts_empty_folder() {
        let dir = tempdir().unwrap();
        let err = find_transcripts(dir.path()).unwrap_err();
        assert!(err.is_no_transcripts());
    }

    #[test]
    fn test_find_transcripts_missing_folder() {
        let err = find_transcripts("/definitely/not/a/folder").unwrap_err();
        assert!(err.is_io());
    }
}
