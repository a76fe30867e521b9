//! Message and entry filters applied during assembly.
//!
//! | Filter | Function | Drops |
//! |--------|----------|-------|
//! | Mention pre-check | [`mentions`] | Messages whose body never contains the identifier |
//! | Noise | [`is_noise`] | Media placeholders such as `<attached: photo>` |
//!
//! # Example
//!
//! ```
//! use tradepack::Identifier;
//! use tradepack::core::filter::{is_noise, mentions};
//! use tradepack::Message;
//!
//! let pid = Identifier::new("126710BLRO")?;
//! let msg = Message::new("1/15/24", "10:30 AM", "Alice", "126710blro 128k");
//!
//! assert!(mentions(&msg, &pid));
//! assert!(is_noise("126710BLRO image omitted"));
//! # Ok::<(), tradepack::TradepackError>(())
//! ```

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::Message;
use crate::extract::Identifier;

/// Placeholders chat apps put where media used to be.
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"PHOTO|omitted|attached:")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Returns `true` if the entry is a media placeholder rather than an offer.
pub fn is_noise(entry: &str) -> bool {
    NOISE.is_match(entry)
}

/// Case-insensitive substring pre-check on the message body.
///
/// Looser than the whole-word match used for segments, so it only decides
/// whether a message is worth segmenting.
pub fn mentions(message: &Message, id: &Identifier) -> bool {
    id.is_substring_of(&message.body)
}
