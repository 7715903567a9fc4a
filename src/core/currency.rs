use iso_currency::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic currency sign, used when no symbol is known for a currency.
pub const GENERIC_SYMBOL: &str = "¤";

/// Minor-unit digits assumed for codes ISO 4217 does not define one for.
const DEFAULT_MINOR_DIGITS: u32 = 2;

/// ISO 4217 currency code.
///
/// Codes are stored uppercase. Validity and minor-unit digits come from the
/// ISO 4217 table; display symbols cover the currencies of the built-in
/// locale table, anything else renders with the generic sign `¤`.
///
/// # Examples
///
/// ```
/// use currency_validator::core::currency::CurrencyCode;
///
/// let usd = CurrencyCode::new("usd");
/// assert_eq!(usd.as_str(), "USD");
/// assert_eq!(usd.symbol(), "$");
/// assert_eq!(CurrencyCode::new("JPY").minor_digits(), 0);
/// assert_eq!(CurrencyCode::new("KWD").minor_digits(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

/// (code, display symbol), sorted by code for binary search.
static SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "$"),
    ("BRL", "R$"),
    ("CAD", "$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("JPY", "￥"),
    ("KRW", "₩"),
    ("MXN", "$"),
    ("SEK", "kr"),
    ("USD", "$"),
];

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an ISO 4217 code.
    pub fn is_known(&self) -> bool {
        self.iso().is_some()
    }

    /// Display symbol, or the generic sign when none is known.
    pub fn symbol(&self) -> &'static str {
        SYMBOLS
            .binary_search_by(|(code, _)| (*code).cmp(self.0.as_str()))
            .map(|i| SYMBOLS[i].1)
            .unwrap_or(GENERIC_SYMBOL)
    }

    /// Number of digits after the decimal point in this currency's minor unit.
    ///
    /// Two for unknown codes and for ISO codes without a minor unit (XAU).
    pub fn minor_digits(&self) -> u32 {
        self.iso()
            .and_then(|c| c.exponent())
            .map(u32::from)
            .unwrap_or(DEFAULT_MINOR_DIGITS)
    }

    fn iso(&self) -> Option<Currency> {
        Currency::from_code(&self.0)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_equality() {
        let a = CurrencyCode::new("EUR");
        let b = CurrencyCode::new("eur");
        assert_eq!(a, b);
    }

    #[test]
    fn test_known_symbols() {
        assert_eq!(CurrencyCode::new("USD").symbol(), "$");
        assert_eq!(CurrencyCode::new("EUR").symbol(), "€");
        assert_eq!(CurrencyCode::new("GBP").symbol(), "£");
        assert_eq!(CurrencyCode::new("INR").symbol(), "₹");
    }

    #[test]
    fn test_minor_digits() {
        assert_eq!(CurrencyCode::new("USD").minor_digits(), 2);
        assert_eq!(CurrencyCode::new("JPY").minor_digits(), 0);
        assert_eq!(CurrencyCode::new("KRW").minor_digits(), 0);
    }

    #[test]
    fn test_minor_digits_outside_symbol_table() {
        assert_eq!(CurrencyCode::new("KWD").minor_digits(), 3);
        assert_eq!(CurrencyCode::new("CLP").minor_digits(), 0);
        assert!(CurrencyCode::new("KWD").is_known());
        assert!(CurrencyCode::new("clp").is_known());
        assert_eq!(CurrencyCode::new("KWD").symbol(), GENERIC_SYMBOL);
    }

    #[test]
    fn test_unknown_currency() {
        let xyz = CurrencyCode::new("XYZ");
        assert!(!xyz.is_known());
        assert_eq!(xyz.symbol(), GENERIC_SYMBOL);
        assert_eq!(xyz.minor_digits(), 2);
    }

    #[test]
    fn test_table_is_sorted() {
        for window in SYMBOLS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "currency codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }
}
