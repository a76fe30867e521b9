//! Per-file progress reporting.
//!
//! [`process_files`](crate::core::processor::process_files) calls a
//! [`ProgressCallback`] once for every transcript, after that file is done.
//!
//! # Example
//!
//! ```rust
//! use tradepack::progress::{FileEvent, Progress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress| {
//!     println!("[{:>5.1}%] {}", progress.percentage(), progress.event);
//! });
//!
//! callback(Progress::new(1, 4, FileEvent::Processed {
//!     chat: "HK Dealers".into(),
//!     messages: 120,
//!     matches: 3,
//! }));
//! ```

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// What happened to a single transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEvent {
    /// The transcript was read and searched.
    Processed {
        chat: String,
        messages: usize,
        matches: usize,
    },
    /// The transcript could not be read; it contributes no records.
    Failed { path: PathBuf, reason: String },
}

impl fmt::Display for FileEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileEvent::Processed {
                chat,
                messages,
                matches,
            } => write!(
                f,
                "Processing {chat}... ({messages} messages), found {matches} matches"
            ),
            FileEvent::Failed { path, reason } => {
                write!(f, "Error processing {}: {reason}", path.display())
            }
        }
    }
}

/// Progress of a run over a set of transcripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Files finished so far, including this one.
    pub files_done: usize,

    /// Files in the run.
    pub files_total: usize,

    /// The file that just finished.
    pub event: FileEvent,
}

impl Progress {
    pub fn new(files_done: usize, files_total: usize, event: FileEvent) -> Self {
        Self {
            files_done,
            files_total,
            event,
        }
    }

    /// Returns the progress as a percentage (0.0 - 100.0).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tradepack::progress::{FileEvent, Progress};
    ///
    /// let event = FileEvent::Failed { path: "a.txt".into(), reason: "gone".into() };
    /// assert_eq!(Progress::new(1, 4, event).percentage(), 25.0);
    /// ```
    pub fn percentage(&self) -> f64 {
        if self.files_total == 0 {
            100.0
        } else {
            (self.files_done as f64 / self.files_total as f64) * 100.0
        }
    }

    /// Returns whether every file has been handled.
    pub fn is_complete(&self) -> bool {
        self.files_done >= self.files_total
    }
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a no-op progress callback.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Creates a progress callback that prints one line per file to stdout.
///
/// Failures are printed to stderr.
pub fn stdout_progress() -> ProgressCallback {
    Arc::new(|progress| match &progress.event {
        FileEvent::Processed {
            chat,
            messages,
            matches,
        } => {
            println!("Processing {chat}... ({messages} messages)");
            println!("  - Found {matches} matches in {chat}");
        }
        FileEvent::Failed { .. } => eprintln!("{}", progress.event),
    })
}
