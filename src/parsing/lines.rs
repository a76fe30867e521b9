//! Physical line splitting for chat exports.
//!
//! Exports pasted through phones and desktop clients mix line terminators.
//! Besides `\n` and `\r\n`, a lone `\r`, vertical tab, form feed, the
//! information separators `\x1c`..`\x1e`, NEL (U+0085) and the Unicode line and
//! paragraph separators (U+2028, U+2029) all end a line.

use std::iter::FusedIterator;

/// Returns `true` for every character that terminates a line.
pub const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Iterator over the lines of a string, without their terminators.
///
/// Created by [`split_lines`]. A trailing terminator does not produce a final
/// empty line.
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((i, c)) => {
                let line = &self.rest[..i];
                let mut end = i + c.len_utf8();
                if c == '\r' && self.rest[end..].starts_with('\n') {
                    end += 1;
                }
                self.rest = &self.rest[end..];
                Some(line)
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

impl FusedIterator for SplitLines<'_> {}

/// Splits `text` into lines on every terminator listed in the module docs.
///
/// # Example
///
/// ```
/// use tradepack::parsing::split_lines;
///
/// let lines: Vec<_> = split_lines("126710BLRO\u{2028}2023 128k\r\nok\r").collect();
/// assert_eq!(lines, vec!["126710BLRO", "2023 128k", "ok"]);
/// ```
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}
