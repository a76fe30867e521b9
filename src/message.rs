//! One chat utterance as read from a WhatsApp text export.
//!
//! A message carries its header fields verbatim: dates and times are locale
//! formatted in the export and are passed through without normalisation.
//!
//! # Example
//!
//! ```
//! use tradepack::Message;
//!
//! let mut msg = Message::new("1/15/24", "10:30 AM", "Dealer HK", "126710BLRO");
//! msg.push_line("2023 full set 128k");
//!
//! assert_eq!(msg.body, "126710BLRO\n2023 full set 128k");
//! ```

use serde::{Deserialize, Serialize};

/// A single message from a chat transcript.
///
/// | Field | Description |
/// |-------|-------------|
/// | `date` | Date as written in the header, e.g. `15/01/2024` |
/// | `time` | Time as written in the header, e.g. `10:30:45 AM` |
/// | `sender` | Everything between the timestamp and the first colon |
/// | `body` | Header remainder plus any continuation lines, newline-joined |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Date exactly as it appears in the header.
    pub date: String,

    /// Time exactly as it appears in the header.
    pub time: String,

    /// Display name or phone number of the author.
    pub sender: String,

    /// Message text. May span several physical lines.
    pub body: String,
}

impl Message {
    /// Creates a message from its header fields and first body line.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Appends a continuation line to the body.
    pub fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message() {
        let msg = Message::new("15/01/2024", "10:30 AM", "Alice", "Hello");
        assert_eq!(msg.date, "15/01/2024");
        assert_eq!(msg.time, "10:30 AM");
        assert_eq!(msg.sender, "Alice");
        assert_eq!(msg.body, "Hello");
    }

    #[test]
    fn test_push_line() {
        let mut msg = Message::new("15/01/2024", "10:30 AM", "Alice", "first");
        msg.push_line("second");
        msg.push_line("");
        assert_eq!(msg.body, "first\nsecond\n");
    }

    #[test]
    fn test_push_line_to_empty_body() {
        let mut msg = Message::new("15/01/2024", "10:30 AM", "Alice", "");
        msg.push_line("price below");
        assert_eq!(msg.body, "\nprice below");
    }

    #[test]
    fn test_serde_roundtrip() {
        let msg = Message::new("1/2/24", "9:00 PM", "Bob", "5711/1A");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"Bob\""));
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
