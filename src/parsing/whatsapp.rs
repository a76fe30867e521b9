//! WhatsApp TXT export tokenizer.
//!
//! Every message in the export starts with a header line:
//!
//! ```text
//! [15/01/2024, 10:30:45 AM] Sender Name: first line of the message
//! ```
//!
//! Lines that do not match the header belong to the message opened most
//! recently. Lines before the first header (export preamble) are dropped.
//!
//! The tokenizer is a two-state machine: either no message is open yet, or a
//! message is being accumulated. It is driven lazily by [`Messages`], so
//! callers can stop early or restart by cloning the iterator.

use std::sync::LazyLock;

use regex::Regex;

use super::lines::{SplitLines, split_lines};
use crate::Message;

/// `[date, time] sender: body`
///
/// - date: digits and slashes
/// - time: `H:MM[:SS] AM/PM`
/// - sender: up to the first colon after the timestamp
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[([\d/]+),\s*(\d{1,2}:\d{2}(?::\d{2})?\s*[APMapm]{2})\]\s*([^:]+?):\s*(.*)$",
    )
    .unwrap()
});

/// Fields captured from a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub body: &'a str,
}

impl Header<'_> {
    fn into_message(self) -> Message {
        Message::new(self.date, self.time, self.sender, self.body)
    }
}

/// Matches a single physical line against the header pattern.
///
/// Returns `None` for continuation lines and noise.
///
/// # Example
///
/// ```
/// use tradepack::parsing::parse_header;
///
/// let header = parse_header("[1/15/24, 10:30:45 AM] Bob: Re: 5711: offer").unwrap();
/// assert_eq!(header.sender, "Bob");
/// assert_eq!(header.body, "Re: 5711: offer");
///
/// assert!(parse_header("2023 full set").is_none());
/// ```
pub fn parse_header(line: &str) -> Option<Header<'_>> {
    let caps = HEADER_RE.captures(line)?;
    Some(Header {
        date: caps.get(1).map_or("", |m| m.as_str()),
        time: caps.get(2).map_or("", |m| m.as_str()),
        sender: caps.get(3).map_or("", |m| m.as_str()),
        body: caps.get(4).map_or("", |m| m.as_str()),
    })
}

/// Tokenizer state between two lines.
#[derive(Debug, Clone, Default)]
enum TokenizerState {
    /// Nothing opened yet; orphan lines are discarded.
    #[default]
    NoOpenMessage,
    /// A message is collecting continuation lines.
    Accumulating(Message),
}

impl TokenizerState {
    fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Lazy iterator over the messages of a transcript.
///
/// Created by [`tokenize`]. Cloning the iterator before consuming it gives an
/// independent pass over the same transcript.
#[derive(Debug, Clone)]
pub struct Messages<'a> {
    lines: SplitLines<'a>,
    state: TokenizerState,
}

impl<'a> Messages<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: split_lines(content),
            state: TokenizerState::NoOpenMessage,
        }
    }
}

impl Iterator for Messages<'_> {
    type Item = Message;

    fn next(&mut self) -> Option<Message> {
        for line in self.lines.by_ref() {
            if let Some(header) = parse_header(line) {
                let previous = std::mem::replace(
                    &mut self.state,
                    TokenizerState::Accumulating(header.into_message()),
                );
                if let TokenizerState::Accumulating(finished) = previous {
                    return Some(finished);
                }
            } else if let TokenizerState::Accumulating(open) = &mut self.state {
                open.push_line(line);
            }
        }

        // End of input: finalize whatever is still open.
        match self.state.take() {
            TokenizerState::Accumulating(last) => Some(last),
            TokenizerState::NoOpenMessage => None,
        }
    }
}

impl std::iter::FusedIterator for Messages<'_> {}

/// Splits a transcript into messages, in transcript order.
///
/// # Example
///
/// ```
/// use tradepack::parsing::tokenize;
///
/// let transcript = "\
/// Exported chat
/// [1/15/24, 10:30 AM] Alice: 126710BLRO
/// 2023 128k
/// [1/15/24, 10:31 AM] Bob: thanks";
///
/// let messages: Vec<_> = tokenize(transcript).collect();
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].body, "126710BLRO\n2023 128k");
/// ```
pub fn tokenize(content: &str) -> Messages<'_> {
    Messages::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_basic() {
        let header = parse_header("[15/01/2024, 10:30:45 AM] Alice: Hello").unwrap();
        assert_eq!(header.date, "15/01/2024");
        assert_eq!(header.time, "10:30:45 AM");
        assert_eq!(header.sender, "Alice");
        assert_eq!(header.body, "Hello");
    }

    #[test]
    fn test_parse_header_without_seconds() {
        let header = parse_header("[1/5/24, 9:05 pm] +852 9123 4567: hi").unwrap();
        assert_eq!(header.time, "9:05 pm");
        assert_eq!(header.sender, "+852 9123 4567");
    }

    #[test]
    fn test_parse_header_first_colon_splits_sender() {
        let header = parse_header("[1/5/24, 9:05 PM] Bob: note: 5711/1A: 95k").unwrap();
        assert_eq!(header.sender, "Bob");
        assert_eq!(header.body, "note: 5711/1A: 95k");
    }

    #[test]
    fn test_parse_header_empty_body() {
        let header = parse_header("[1/5/24, 9:05 PM] Bob:").unwrap();
        assert_eq!(header.body, "");
    }

    #[test]
    fn test_parse_header_rejects_24h_time() {
        // No AM/PM marker
        assert!(parse_header("[15.01.24, 10:30:45] Alice: Hello").is_none());
        assert!(parse_header("[15/01/2024, 10:30:45] Alice: Hello").is_none());
    }

    #[test]
    fn test_parse_header_rejects_unbracketed() {
        assert!(parse_header("15/01/2024, 10:30 AM - Alice: Hello").is_none());
        assert!(parse_header("just some text").is_none());
    }

    #[test]
    fn test_tokenize_continuation_lines() {
        let content = "[1/15/24, 10:30 AM] Alice: line one\nline two\n\nline four";
        let messages: Vec<_> = tokenize(content).collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "line one\nline two\n\nline four");
    }

    #[test]
    fn test_tokenize_drops_preamble() {
        let content = "preamble\nmore preamble\n[1/15/24, 10:30 AM] Alice: Hi";
        let messages: Vec<_> = tokenize(content).collect();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "Hi");
    }

    #[test]
    fn test_tokenize_empty_and_noise_only() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("no headers here\nat all").count(), 0);
    }

    #[test]
    fn test_tokenize_preserves_order() {
        let content = "[1/15/24, 10:30 AM] A: 1\n[1/15/24, 10:31 AM] B: 2\n[1/15/24, 10:32 AM] C: 3";
        let senders: Vec<_> = tokenize(content).map(|m| m.sender).collect();
        assert_eq!(senders, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_tokenize_crlf() {
        let content = "[1/15/24, 10:30 AM] Alice: one\r\ntwo\r\n[1/15/24, 10:31 AM] Bob: three\r\n";
        let messages: Vec<_> = tokenize(content).collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "one\ntwo");
        assert_eq!(messages[1].body, "three");
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let content = "[1/15/24, 10:30 AM] Alice: one\n[1/15/24, 10:31 AM] Bob: two";
        let iter = tokenize(content);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokenize_fused() {
        let mut iter = tokenize("[1/15/24, 10:30 AM] Alice: one");
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_tokenize_lone_carriage_return() {
        let content = "[1/15/24, 10:30 AM] Alice: 126710BLRO\r2023 128k\r[1/15/24, 10:31 AM] Bob: ok";
        let messages: Vec<_> = tokenize(content).collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].body, "126710BLRO\n2023 128k");
    }
}
