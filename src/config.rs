//! Configuration for the extraction pipeline.
//!
//! Settings are plain values passed into the pipeline; nothing is read from
//! disk or from the environment.
//!
//! # Example
//!
//! ```rust
//! use tradepack::config::ExtractConfig;
//!
//! let config = ExtractConfig::new()
//!     .with_lookahead(3)
//!     .with_skip_noise(false);
//!
//! assert_eq!(config.lookahead, 3);
//! assert_eq!(config.separator, "//");
//! ```

use serde::{Deserialize, Serialize};

/// Default number of lines scanned after an identifier line.
pub const DEFAULT_LOOKAHEAD: usize = 5;

/// Default intra-line fragment separator.
pub const DEFAULT_SEPARATOR: &str = "//";

/// Configuration for extracting records from transcripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Non-empty lines scanned after an identifier line (default: 5)
    pub lookahead: usize,

    /// Separator between offers on one line (default: `//`)
    pub separator: String,

    /// Drop entries that are media placeholders (default: true)
    pub skip_noise: bool,

    /// Process transcript files on a thread pool (default: false)
    pub parallel: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            separator: DEFAULT_SEPARATOR.to_string(),
            skip_noise: true,
            parallel: false,
        }
    }
}

impl ExtractConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the forward-attachment window.
    #[must_use]
    pub fn with_lookahead(mut self, lines: usize) -> Self {
        self.lookahead = lines;
        self
    }

    /// Sets the intra-line separator. Empty separators are ignored.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        if !separator.is_empty() {
            self.separator = separator;
        }
        self
    }

    /// Sets whether media placeholder entries are dropped.
    #[must_use]
    pub fn with_skip_noise(mut self, skip: bool) -> Self {
        self.skip_noise = skip;
        self
    }

    /// Enables or disables parallel per-file processing.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractConfig::default();
        assert_eq!(config.lookahead, 5);
        assert_eq!(config.separator, "//");
        assert!(config.skip_noise);
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder() {
        let config = ExtractConfig::new()
            .with_lookahead(2)
            .with_separator("|")
            .with_skip_noise(false)
            .with_parallel(true);
        assert_eq!(config.lookahead, 2);
        assert_eq!(config.separator, "|");
        assert!(!config.skip_noise);
        assert!(config.parallel);
    }

    #[test]
    fn test_empty_separator_ignored() {
        let config = ExtractConfig::new().with_separator("");
        assert_eq!(config.separator, "//");
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ExtractConfig::new().with_lookahead(7);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ExtractConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
