//! Attribute heuristics: price, currency, year, variant and condition.
//!
//! Each extractor is a pure function of the entry text and walks an ordered
//! list of rules; the first rule that matches decides the result. The order
//! matters: `"like new"` is tested before `"new"`, multiplier prices before
//! the bare digit run, and so on.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

// ============================================================================
// Digits
// ============================================================================

/// One Unicode decimal digit (`Nd`), the same class `\d` matches in the rules.
static UNICODE_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d$").unwrap());

fn is_unicode_digit(c: char) -> bool {
    let mut buf = [0; 4];
    UNICODE_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of a decimal digit from any script.
///
/// `Nd` characters come in contiguous runs of ten starting at zero, so the
/// value is the distance to the start of the run, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_unicode_digit(c) {
        return None;
    }
    let mut zero = c as u32;
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32) {
        if !is_unicode_digit(prev) {
            break;
        }
        zero -= 1;
    }
    Some((c as u32 - zero) % 10)
}

/// Rewrites decimal digits of any script (fullwidth `１２８`, Arabic-Indic, ...)
/// as ASCII so the captured text parses as a number.
fn ascii_digits(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| {
                digit_value(c)
                    .and_then(|value| char::from_digit(value, 10))
                    .unwrap_or(c)
            })
            .collect(),
    )
}

// ============================================================================
// Price
// ============================================================================

/// How a matched price number is turned into an amount.
#[derive(Debug, Clone, Copy)]
enum Amount {
    /// Decimal number times a multiplier, truncated.
    Decimal(f64),
    /// Integer number times a multiplier.
    Integer(u64),
}

struct PriceRule {
    pattern: Regex,
    amount: Amount,
}

impl PriceRule {
    fn decimal(pattern: &str, multiplier: f64) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            amount: Amount::Decimal(multiplier),
        }
    }

    fn integer(pattern: &str, multiplier: u64) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            amount: Amount::Integer(multiplier),
        }
    }

    fn apply(&self, text: &str) -> Option<u64> {
        let number = ascii_digits(self.pattern.captures(text)?.get(1)?.as_str());
        // A matched rule always decides; unrepresentable numbers mean unknown.
        let price = match self.amount {
            Amount::Decimal(multiplier) => number
                .parse::<f64>()
                .map(|value| (value * multiplier) as u64)
                .unwrap_or(0),
            Amount::Integer(multiplier) => number
                .parse::<u64>()
                .ok()
                .and_then(|value| value.checked_mul(multiplier))
                .unwrap_or(0),
        };
        Some(price)
    }
}

static PRICE_RULES: LazyLock<Vec<PriceRule>> = LazyLock::new(|| {
    vec![
        PriceRule::decimal(r"(\d+\.\d+)\s*k", 1_000.0),
        PriceRule::decimal(r"(\d+\.\d+)\s*m", 1_000_000.0),
        PriceRule::integer(r"(\d+)\s*k\b", 1_000),
        PriceRule::integer(r"(\d+)\s*m\b", 1_000_000),
        PriceRule::decimal(r"(\d+\.\d+)\s*mill", 1_000_000.0),
        PriceRule::integer(r"(?:hkd|usd|eur|chf|usdt)[: ]\s*(\d{5,})", 1),
        PriceRule::integer(r"(?:hkd|usd|eur|chf|usdt)(\d{5,})", 1),
        PriceRule::integer(r"\b(\d{6,})\b", 1),
    ]
});

/// Extracts a price from free text. Returns `0` when no rule matches.
///
/// Thousands separators (`,`) are removed and the text is lower-cased first.
///
/// # Example
///
/// ```
/// use tradepack::extract::parse_price;
///
/// assert_eq!(parse_price("1.5k"), 1_500);
/// assert_eq!(parse_price("HKD 128,000"), 128_000);
/// assert_eq!(parse_price("2.35m"), 2_350_000);
/// assert_eq!(parse_price("call me"), 0);
/// ```
pub fn parse_price(text: &str) -> u64 {
    let normalized = text.replace(',', "").to_lowercase();
    PRICE_RULES
        .iter()
        .find_map(|rule| rule.apply(&normalized))
        .unwrap_or(0)
}

// ============================================================================
// Currency
// ============================================================================

/// Currency of an offer. Defaults to [`Currency::Hkd`] when nothing is mentioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usdt,
    Usd,
    Eur,
    Chf,
    Gbp,
    #[default]
    Hkd,
}

impl Currency {
    /// Returns the ISO-style code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usdt => "USDT",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Chf => "CHF",
            Currency::Gbp => "GBP",
            Currency::Hkd => "HKD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Lower-case markers per currency, in priority order.
const CURRENCY_MARKERS: &[(&[&str], Currency)] = &[
    (&["usdt"], Currency::Usdt),
    (&["usd", "$"], Currency::Usd),
    (&["eur", "€"], Currency::Eur),
    (&["chf"], Currency::Chf),
    (&["gbp", "£"], Currency::Gbp),
];

/// Detects the currency of an entry.
///
/// # Example
///
/// ```
/// use tradepack::extract::{Currency, parse_currency};
///
/// assert_eq!(parse_currency("95k USDT"), Currency::Usdt);
/// assert_eq!(parse_currency("$12,500"), Currency::Usd);
/// assert_eq!(parse_currency("128k"), Currency::Hkd);
/// ```
pub fn parse_currency(text: &str) -> Currency {
    let lower = text.to_lowercase();
    CURRENCY_MARKERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| lower.contains(marker)))
        .map(|&(_, currency)| currency)
        .unwrap_or_default()
}

// ============================================================================
// Year
// ============================================================================

static YEAR_BARE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").unwrap());

static YEAR_WITH_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(20\d{2})/\d{2}").unwrap());

static YEAR_SHORT: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\b(\d{1,2})y\b")
        .case_insensitive(true)
        .build()
        .unwrap()
});

static YEAR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(20\d{2})(?:year|yr)")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Extracts a production/warranty year. Returns `None` without a year cue.
///
/// Two-digit `NNy` forms below 50 map to `20NN`, the rest to `19NN`.
///
/// # Example
///
/// ```
/// use tradepack::extract::parse_year;
///
/// assert_eq!(parse_year("2023 full set"), Some(2023));
/// assert_eq!(parse_year("card 24y"), Some(2024));
/// assert_eq!(parse_year("85Y vintage"), Some(1985));
/// assert_eq!(parse_year("no date"), None);
/// ```
pub fn parse_year(text: &str) -> Option<u16> {
    if let Some(year) = capture_number(&YEAR_BARE, text) {
        return Some(year);
    }
    if let Some(year) = capture_number(&YEAR_WITH_SUFFIX, text) {
        return Some(year);
    }
    if let Some(short) = capture_number(&YEAR_SHORT, text) {
        return Some(if short < 50 { 2000 + short } else { 1900 + short });
    }
    capture_number(&YEAR_WORD, text)
}

fn capture_number(pattern: &Regex, text: &str) -> Option<u16> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| ascii_digits(m.as_str()).parse().ok())
}

// ============================================================================
// Variant
// ============================================================================

/// Dial colour / bracelet / material token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Variant {
    Blue,
    Black,
    Green,
    White,
    Red,
    Grey,
    Jub,
    Oys,
    Rg,
    Ti,
    Wg,
}

impl Variant {
    /// Returns the upper-case token written to output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Blue => "BLUE",
            Variant::Black => "BLACK",
            Variant::Green => "GREEN",
            Variant::White => "WHITE",
            Variant::Red => "RED",
            Variant::Grey => "GREY",
            Variant::Jub => "JUB",
            Variant::Oys => "OYS",
            Variant::Rg => "RG",
            Variant::Ti => "TI",
            Variant::Wg => "WG",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vocabulary in match order. `GRAY` is folded into [`Variant::Grey`].
const VARIANT_VOCABULARY: &[(&str, Variant)] = &[
    ("BLUE", Variant::Blue),
    ("BLACK", Variant::Black),
    ("GREEN", Variant::Green),
    ("WHITE", Variant::White),
    ("RED", Variant::Red),
    ("GREY", Variant::Grey),
    ("GRAY", Variant::Grey),
    ("JUB", Variant::Jub),
    ("OYS", Variant::Oys),
    ("RG", Variant::Rg),
    ("TI", Variant::Ti),
    ("WG", Variant::Wg),
];

static VARIANT_RULES: LazyLock<Vec<(Regex, Variant)>> = LazyLock::new(|| {
    VARIANT_VOCABULARY
        .iter()
        .map(|&(token, variant)| (Regex::new(&format!(r"\b{token}\b")).unwrap(), variant))
        .collect()
});

/// Finds the first vocabulary token present as a whole word.
///
/// # Example
///
/// ```
/// use tradepack::extract::{Variant, parse_variant};
///
/// assert_eq!(parse_variant("126710 jub 2023"), Some(Variant::Jub));
/// assert_eq!(parse_variant("gray dial"), Some(Variant::Grey));
/// assert_eq!(parse_variant("bluesky"), None);
/// ```
pub fn parse_variant(text: &str) -> Option<Variant> {
    let upper = text.to_uppercase();
    VARIANT_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&upper))
        .map(|&(_, variant)| variant)
}

// ============================================================================
// Condition
// ============================================================================

/// Normalised condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Like New")]
    LikeNew,
    Used,
    #[serde(rename = "Full Set")]
    FullSet,
    Mint,
    New,
    #[serde(rename = "Only Watch")]
    OnlyWatch,
}

impl Condition {
    /// Returns the human-readable label written to output.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::Used => "Used",
            Condition::FullSet => "Full Set",
            Condition::Mint => "Mint",
            Condition::New => "New",
            Condition::OnlyWatch => "Only Watch",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower-case phrases per condition, in priority order.
const CONDITION_MARKERS: &[(&[&str], Condition)] = &[
    (&["like new"], Condition::LikeNew),
    (&["used"], Condition::Used),
    (&["full set", "fullset"], Condition::FullSet),
    (&["mint"], Condition::Mint),
    (&["new"], Condition::New),
    (&["only watch"], Condition::OnlyWatch),
];

/// Detects the condition of the offered item.
///
/// # Example
///
/// ```
/// use tradepack::extract::{Condition, parse_condition};
///
/// assert_eq!(parse_condition("Like new full set"), Some(Condition::LikeNew));
/// assert_eq!(parse_condition("fullset 2022"), Some(Condition::FullSet));
/// assert_eq!(parse_condition("watch only"), None);
/// ```
pub fn parse_condition(text: &str) -> Option<Condition> {
    let lower = text.to_lowercase();
    CONDITION_MARKERS
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|phrase| lower.contains(phrase)))
        .map(|&(_, condition)| condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_digits_price_and_year() {
        assert_eq!(parse_price("１２８k"), 128_000);
        assert_eq!(parse_price("asking １２８０００"), 128_000);
        assert_eq!(parse_price("１.５m"), 1_500_000);
        assert_eq!(parse_year("２４y"), Some(2024));
        assert_eq!(parse_year("２４y ２０１９/０１"), Some(2024));
    }

    #[test]
    fn test_digit_value_across_scripts() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('\u{FF18}'), Some(8)); // fullwidth 8
        assert_eq!(digit_value('\u{0663}'), Some(3)); // Arabic-Indic 3
        assert_eq!(digit_value('\u{1D7D8}'), Some(0)); // double-struck 0
        assert_eq!(digit_value('k'), None);
        assert_eq!(ascii_digits("usd ٢٥٠٠٠٠"), "usd 250000");
    }

    #[test]
    fn test_price_multipliers() {
        assert_eq!(parse_price("1.5k"), 1_500);
        assert_eq!(parse_price("1.5m"), 1_500_000);
        assert_eq!(parse_price("250k"), 250_000);
        assert_eq!(parse_price("3m"), 3_000_000);
        assert_eq!(parse_price("250 K"), 250_000);
    }

    #[test]
    fn test_price_currency_prefixed() {
        assert_eq!(parse_price("USD: 123456"), 123_456);
        assert_eq!(parse_price("hkd 98000"), 98_000);
        assert_eq!(parse_price("eur98000"), 98_000);
        assert_eq!(parse_price("CHF 1234"), 0);
    }

    #[test]
    fn test_price_bare_digits() {
        assert_eq!(parse_price("999999"), 999_999);
        assert_eq!(parse_price("12345"), 0);
        assert_eq!(parse_price("asking 1,280,000 net"), 1_280_000);
    }

    #[test]
    fn test_price_none() {
        assert_eq!(parse_price("abc"), 0);
        assert_eq!(parse_price(""), 0);
    }

    #[test]
    fn test_price_rule_order() {
        // Decimal multiplier beats everything after it
        assert_eq!(parse_price("126710 1.28m or 1300000"), 1_280_000);
        // `k` needs a word boundary for integer form
        assert_eq!(parse_price("120kg"), 0);
        // Decimal `k` has no boundary requirement
        assert_eq!(parse_price("1.2kg"), 1_200);
    }

    #[test]
    fn test_price_decimal_truncates() {
        assert_eq!(parse_price("1.2345k"), 1_234);
    }

    #[test]
    fn test_price_overflow_is_unknown() {
        assert_eq!(parse_price("99999999999999999999999"), 0);
    }

    #[test]
    fn test_currency_priority() {
        assert_eq!(parse_currency("usdt or usd"), Currency::Usdt);
        assert_eq!(parse_currency("USD"), Currency::Usd);
        assert_eq!(parse_currency("€ 9000"), Currency::Eur);
        assert_eq!(parse_currency("chf"), Currency::Chf);
        assert_eq!(parse_currency("£9000"), Currency::Gbp);
        assert_eq!(parse_currency("gbp"), Currency::Gbp);
        assert_eq!(parse_currency("eur and gbp"), Currency::Eur);
        assert_eq!(parse_currency("nothing"), Currency::Hkd);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usdt.to_string(), "USDT");
        assert_eq!(Currency::default().to_string(), "HKD");
        assert_eq!(serde_json::to_string(&Currency::Gbp).unwrap(), "\"GBP\"");
    }

    #[test]
    fn test_year_mapping() {
        assert_eq!(parse_year("45y"), Some(2045));
        assert_eq!(parse_year("85y"), Some(1985));
        assert_eq!(parse_year("5Y"), Some(2005));
        assert_eq!(parse_year("49y"), Some(2049));
        assert_eq!(parse_year("50y"), Some(1950));
        assert_eq!(parse_year("2019/01"), Some(2019));
        assert_eq!(parse_year("no year"), None);
    }

    #[test]
    fn test_year_forms() {
        assert_eq!(parse_year("card 2023 full"), Some(2023));
        assert_eq!(parse_year("x2022/05"), Some(2022));
        assert_eq!(parse_year("2021year"), Some(2021));
        assert_eq!(parse_year("2020YR"), Some(2020));
        // Embedded in a longer digit run: not a year
        assert_eq!(parse_year("120230"), None);
    }

    #[test]
    fn test_year_bare_wins_over_short() {
        assert_eq!(parse_year("24y 2021"), Some(2021));
    }

    #[test]
    fn test_variant_vocabulary() {
        assert_eq!(parse_variant("Blue dial"), Some(Variant::Blue));
        assert_eq!(parse_variant("gray"), Some(Variant::Grey));
        assert_eq!(parse_variant("grey"), Some(Variant::Grey));
        assert_eq!(parse_variant("RG oys"), Some(Variant::Oys));
        assert_eq!(parse_variant("ti"), Some(Variant::Ti));
        assert_eq!(parse_variant("wg"), Some(Variant::Wg));
        assert_eq!(parse_variant("nothing"), None);
    }

    #[test]
    fn test_variant_order() {
        // BLUE is checked before BLACK regardless of position
        assert_eq!(parse_variant("black or blue"), Some(Variant::Blue));
    }

    #[test]
    fn test_variant_whole_word() {
        assert_eq!(parse_variant("redial"), None);
        assert_eq!(parse_variant("titanium"), None);
        assert_eq!(parse_variant("jubilee"), None);
    }

    #[test]
    fn test_condition_priority() {
        assert_eq!(parse_condition("like new full set"), Some(Condition::LikeNew));
        assert_eq!(parse_condition("used full set"), Some(Condition::Used));
        assert_eq!(parse_condition("Full Set new"), Some(Condition::FullSet));
        assert_eq!(parse_condition("mint"), Some(Condition::Mint));
        assert_eq!(parse_condition("brand new"), Some(Condition::New));
        assert_eq!(parse_condition("only watch"), Some(Condition::OnlyWatch));
        assert_eq!(parse_condition("nothing"), None);
    }

    #[test]
    fn test_condition_substring() {
        // Substring, not whole word
        assert_eq!(parse_condition("newest"), Some(Condition::New));
        assert_eq!(parse_condition("unused"), Some(Condition::Used));
    }

    #[test]
    fn test_condition_labels() {
        assert_eq!(Condition::LikeNew.to_string(), "Like New");
        assert_eq!(Condition::OnlyWatch.label(), "Only Watch");
        assert_eq!(
            serde_json::to_string(&Condition::FullSet).unwrap(),
            "\"Full Set\""
        );
    }
}
