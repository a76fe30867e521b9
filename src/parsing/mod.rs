//! Transcript parsing.
//!
//! Turns the raw text of a WhatsApp export into an ordered sequence of
//! [`Message`](crate::Message) values.

pub mod lines;
pub mod whatsapp;

pub use lines::{SplitLines, split_lines};
pub use whatsapp::{Header, Messages, parse_header, tokenize};
