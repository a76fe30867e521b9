//! Unified error types for tradepack.
//!
//! Extraction itself never fails: every heuristic falls back to its empty
//! sentinel. Errors only come from the I/O boundaries around the pipeline
//! (reading transcripts, reading the reference catalog, writing output).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tradepack operations.
///
/// # Example
///
/// ```rust
/// use tradepack::error::Result;
/// use tradepack::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TradepackError>;

/// The error type for all tradepack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TradepackError {
    /// An I/O error occurred.
    ///
    /// Typically raised when creating the output folder or writing a result file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A single transcript could not be read.
    ///
    /// Recoverable: the processor records it and moves on to the next file.
    #[error("Failed to read transcript {}: {source}", path.display())]
    ReadTranscript {
        /// The transcript that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The target identifier is empty or whitespace only.
    #[error("Invalid product identifier '{input}': {reason}")]
    InvalidIdentifier {
        /// What the caller passed in
        input: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The chats folder contains no `.txt` transcripts.
    #[error("No .txt files found in {}", dir.display())]
    NoTranscripts {
        /// The folder that was searched
        dir: PathBuf,
    },

    /// The reference catalog could not be used.
    #[error("Reference catalog error ({}): {message}", path.display())]
    Catalog {
        /// Path of the reference file
        path: PathBuf,
        /// Description of what went wrong
        message: String,
    },

    /// The requested output format is not available.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV reading/writing error.
    #[cfg(any(feature = "csv-output", feature = "catalog"))]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be converted to UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for TradepackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TradepackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TradepackError {
    /// Creates a transcript read error.
    pub fn read_transcript(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TradepackError::ReadTranscript {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(input: impl Into<String>, reason: &'static str) -> Self {
        TradepackError::InvalidIdentifier {
            input: input.into(),
            reason,
        }
    }

    /// Creates a "no transcripts" error for the given folder.
    pub fn no_transcripts(dir: impl Into<PathBuf>) -> Self {
        TradepackError::NoTranscripts { dir: dir.into() }
    }

    /// Creates a catalog error.
    pub fn catalog(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        TradepackError::Catalog {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TradepackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            TradepackError::Io(_) | TradepackError::ReadTranscript { .. }
        )
    }

    /// Returns `true` if this error only affects a single transcript.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TradepackError::ReadTranscript { .. })
    }

    /// Returns `true` if this is an invalid identifier error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, TradepackError::InvalidIdentifier { .. })
    }

    /// Returns `true` if no transcripts were found.
    pub fn is_no_transcripts(&self) -> bool {
        matches!(self, TradepackError::NoTranscripts { .. })
    }
}
