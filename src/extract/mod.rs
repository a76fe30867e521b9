//! Extraction of trade attributes from message text.
//!
//! - [`identifier`] - the product code being searched for
//! - [`segments`] - candidate fragments ("entries") of a message body
//! - [`attributes`] - price, currency, year, variant and condition heuristics

pub mod attributes;
pub mod identifier;
pub mod segments;

pub use attributes::{
    Condition, Currency, Variant, parse_condition, parse_currency, parse_price, parse_variant,
    parse_year,
};
pub use identifier::Identifier;
pub use segments::{attach_following, extract_entries, split_segments};
