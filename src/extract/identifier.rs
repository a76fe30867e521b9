//! The product identifier being searched for.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, TradepackError};

/// A validated target identifier (e.g. `126710BLRO`, `5711/1A`).
///
/// Matching is always case-insensitive and literal: regex metacharacters in
/// the identifier are escaped.
///
/// # Example
///
/// ```
/// use tradepack::Identifier;
///
/// let pid = Identifier::new("5711/1a")?;
/// assert_eq!(pid.normalized(), "5711/1A");
/// assert!(pid.is_word_in("selling 5711/1A today"));
/// assert!(!pid.is_word_in("selling 15711/1A today"));
/// # Ok::<(), tradepack::TradepackError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Identifier {
    raw: String,
    lower: String,
    word: Regex,
}

impl Identifier {
    /// Validates and compiles an identifier.
    ///
    /// Surrounding whitespace is trimmed. Empty input is rejected.
    pub fn new(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(TradepackError::invalid_identifier(
                input,
                "identifier is empty",
            ));
        }

        let word = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(raw)))
            .case_insensitive(true)
            .build()
            .map_err(|_| TradepackError::invalid_identifier(input, "identifier is too long"))?;

        Ok(Self {
            raw: raw.to_string(),
            lower: raw.to_lowercase(),
            word,
        })
    }

    /// The identifier as entered (trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Upper-case form used in output records.
    pub fn normalized(&self) -> String {
        self.raw.to_uppercase()
    }

    /// File-name-safe form: path separators become underscores.
    pub fn file_stem(&self) -> String {
        self.raw.replace(['/', '\\'], "_")
    }

    /// Case-insensitive whole-word match.
    pub fn is_word_in(&self, text: &str) -> bool {
        self.word.is_match(text)
    }

    /// Case-insensitive substring match. Cheaper pre-check than [`is_word_in`](Self::is_word_in).
    pub fn is_substring_of(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.lower)
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Identifier {
    type Err = TradepackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
