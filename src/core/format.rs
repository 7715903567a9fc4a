//! Locale formatting conventions for numbers and currency amounts.
//!
//! [`FormatRule::currency_for`] and [`FormatRule::number_for`] map a
//! [`Locale`] onto a rule from a small built-in table. Lookup never fails:
//! an unknown region falls back to the language's usual region, and an
//! unknown language falls back to a root rule using the generic sign `¤`.

use crate::core::currency::{CurrencyCode, GENERIC_SYMBOL};
use crate::core::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for the currency symbol in affix templates.
const SYMBOL_PLACEHOLDER: char = '¤';

/// Fraction digits of the generic number rule.
const NUMBER_MAX_FRACTION_DIGITS: u32 = 3;

/// Which kind of rule this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Plain grouped decimal numbers.
    Number,
    /// Currency amounts with symbol and fixed fraction digits.
    Currency,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatKind::Number => write!(f, "number"),
            FormatKind::Currency => write!(f, "currency"),
        }
    }
}

/// How to render and read an amount as text for one locale.
///
/// A grouping size of zero disables grouping. Whitespace in an affix
/// matches any whitespace character when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRule {
    pub kind: FormatKind,
    /// Currency the rule renders, if any.
    pub currency: Option<CurrencyCode>,
    /// Symbol embedded in the affixes, if any.
    pub symbol: Option<String>,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Size of the group nearest the decimal separator.
    pub grouping_size: u8,
    /// Size of every group further left.
    pub secondary_grouping_size: u8,
    pub min_fraction_digits: u32,
    pub max_fraction_digits: u32,
    pub positive_prefix: String,
    pub positive_suffix: String,
    pub negative_prefix: String,
    pub negative_suffix: String,
}

/// One row of the built-in locale table.
struct LocaleData {
    language: &'static str,
    region: &'static str,
    decimal: char,
    grouping: char,
    grouping_size: u8,
    secondary_grouping_size: u8,
    currency: &'static str,
    /// Positive (prefix, suffix) with `¤` standing in for the symbol.
    positive: (&'static str, &'static str),
    negative: (&'static str, &'static str),
}

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

#[rustfmt::skip]
static LOCALES: &[LocaleData] = &[
    LocaleData { language: "de", region: "CH", decimal: '.', grouping: '’', grouping_size: 3, secondary_grouping_size: 3, currency: "CHF", positive: ("¤\u{a0}", ""), negative: ("¤-", "") },
    LocaleData { language: "de", region: "DE", decimal: ',', grouping: '.', grouping_size: 3, secondary_grouping_size: 3, currency: "EUR", positive: ("", "\u{a0}¤"), negative: ("-", "\u{a0}¤") },
    LocaleData { language: "en", region: "AU", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 3, currency: "AUD", positive: ("¤", ""), negative: ("-¤", "") },
    LocaleData { language: "en", region: "CA", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 3, currency: "CAD", positive: ("¤", ""), negative: ("-¤", "") },
    LocaleData { language: "en", region: "GB", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 3, currency: "GBP", positive: ("¤", ""), negative: ("-¤", "") },
    LocaleData { language: "en", region: "IN", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 2, currency: "INR", positive: ("¤", ""), negative: ("-¤", "") },
    LocaleData { language: "en", region: "US", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 3, currency: "USD", positive: ("¤", ""), negative: ("-¤", "") },
    LocaleData { language: "es", region: "ES", decimal: ',', grouping: '.', grouping_size: 3, secondary_grouping_size: 3, currency: "EUR", positive: ("", "\u{a0}¤"), negative: ("-", "\u{a0}¤") },
    LocaleData { language: "es", region: "MX", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 3, currency: "MXN", positive: ("¤", ""), negative: ("-¤", "") },
    LocaleData { language: "fr", region: "FR", decimal: ',', grouping: NARROW_NBSP, grouping_size: 3, secondary_grouping_size: 3, currency: "EUR", positive: ("", "\u{a0}¤"), negative: ("-", "\u{a0}¤") },
    LocaleData { language: "it", region: "IT", decimal: ',', grouping: '.', grouping_size: 3, secondary_grouping_size: 3, currency: "EUR", positive: ("", "\u{a0}¤"), negative: ("-", "\u{a0}¤") },
    LocaleData { language: "ja", region: "JP", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 3, currency: "JPY", positive: ("¤", ""), negative: ("-¤", "") },
    LocaleData { language: "ko", region: "KR", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 3, currency: "KRW", positive: ("¤", ""), negative: ("-¤", "") },
    LocaleData { language: "nl", region: "NL", decimal: ',', grouping: '.', grouping_size: 3, secondary_grouping_size: 3, currency: "EUR", positive: ("¤\u{a0}", ""), negative: ("¤\u{a0}-", "") },
    LocaleData { language: "pt", region: "BR", decimal: ',', grouping: '.', grouping_size: 3, secondary_grouping_size: 3, currency: "BRL", positive: ("¤\u{a0}", ""), negative: ("-¤\u{a0}", "") },
    LocaleData { language: "sv", region: "SE", decimal: ',', grouping: NBSP, grouping_size: 3, secondary_grouping_size: 3, currency: "SEK", positive: ("", "\u{a0}¤"), negative: ("-", "\u{a0}¤") },
    LocaleData { language: "zh", region: "CN", decimal: '.', grouping: ',', grouping_size: 3, secondary_grouping_size: 3, currency: "CNY", positive: ("¤", ""), negative: ("-¤", "") },
];

/// Region assumed when a locale names only a language, or an unlisted region.
static LANGUAGE_DEFAULTS: &[(&str, &str)] = &[
    ("de", "DE"),
    ("en", "US"),
    ("es", "ES"),
    ("fr", "FR"),
    ("it", "IT"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("nl", "NL"),
    ("pt", "BR"),
    ("sv", "SE"),
    ("zh", "CN"),
];

static ROOT: LocaleData = LocaleData {
    language: "",
    region: "",
    decimal: '.',
    grouping: ',',
    grouping_size: 3,
    secondary_grouping_size: 3,
    currency: "",
    positive: ("¤\u{a0}", ""),
    negative: ("-¤\u{a0}", ""),
};

fn find(language: &str, region: &str) -> Option<&'static LocaleData> {
    LOCALES
        .iter()
        .find(|d| d.language == language && d.region == region)
}

fn resolve(locale: &Locale) -> &'static LocaleData {
    if let Some(region) = locale.region() {
        if let Some(data) = find(locale.language(), region) {
            return data;
        }
    }

    let fallback = LANGUAGE_DEFAULTS
        .iter()
        .find(|(language, _)| *language == locale.language())
        .and_then(|(language, region)| find(language, region));

    match fallback {
        Some(data) => {
            log::debug!(
                "no format data for {}, using {}_{}",
                locale,
                data.language,
                data.region
            );
            data
        }
        None => {
            log::debug!("no format data for {}, using root rule", locale);
            &ROOT
        }
    }
}

fn fill(template: &str, symbol: &str) -> String {
    template.replace(SYMBOL_PLACEHOLDER, symbol)
}

impl FormatRule {
    /// The currency rule for `locale`.
    pub fn currency_for(locale: &Locale) -> FormatRule {
        let data = resolve(locale);
        let currency = (!data.currency.is_empty()).then(|| CurrencyCode::new(data.currency));
        let symbol = currency
            .as_ref()
            .map(|c| c.symbol())
            .unwrap_or(GENERIC_SYMBOL);
        let digits = currency.as_ref().map(|c| c.minor_digits()).unwrap_or(2);

        FormatRule {
            kind: FormatKind::Currency,
            symbol: Some(symbol.to_string()),
            currency,
            decimal_separator: data.decimal,
            grouping_separator: data.grouping,
            grouping_size: data.grouping_size,
            secondary_grouping_size: data.secondary_grouping_size,
            min_fraction_digits: digits,
            max_fraction_digits: digits,
            positive_prefix: fill(data.positive.0, symbol),
            positive_suffix: fill(data.positive.1, symbol),
            negative_prefix: fill(data.negative.0, symbol),
            negative_suffix: fill(data.negative.1, symbol),
        }
    }

    /// The generic number rule for `locale`: same separators, no symbol,
    /// up to three fraction digits.
    pub fn number_for(locale: &Locale) -> FormatRule {
        let data = resolve(locale);
        FormatRule {
            kind: FormatKind::Number,
            currency: None,
            symbol: None,
            decimal_separator: data.decimal,
            grouping_separator: data.grouping,
            grouping_size: data.grouping_size,
            secondary_grouping_size: data.secondary_grouping_size,
            min_fraction_digits: 0,
            max_fraction_digits: NUMBER_MAX_FRACTION_DIGITS,
            positive_prefix: String::new(),
            positive_suffix: String::new(),
            negative_prefix: "-".to_string(),
            negative_suffix: String::new(),
        }
    }

    pub fn is_currency(&self) -> bool {
        self.kind == FormatKind::Currency
    }

    /// This rule with the currency symbol and the whitespace around it
    /// removed from every affix. Returns `None` when there is no symbol.
    pub fn without_symbol(&self) -> Option<FormatRule> {
        let symbol = self.symbol.as_deref()?;
        let strip = |affix: &str| affix.replace(symbol, "").trim().to_string();
        Some(FormatRule {
            symbol: None,
            positive_prefix: strip(&self.positive_prefix),
            positive_suffix: strip(&self.positive_suffix),
            negative_prefix: strip(&self.negative_prefix),
            negative_suffix: strip(&self.negative_suffix),
            ..self.clone()
        })
    }
}

impl fmt::Display for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} format ===", self.kind)?;
        if let Some(currency) = &self.currency {
            writeln!(f, "Currency:          {}", currency)?;
        }
        if let Some(symbol) = &self.symbol {
            writeln!(f, "Symbol:            {}", symbol)?;
        }
        writeln!(f, "Decimal separator: {:?}", self.decimal_separator)?;
        writeln!(
            f,
            "Grouping:          {:?} every {}/{}",
            self.grouping_separator, self.grouping_size, self.secondary_grouping_size
        )?;
        writeln!(
            f,
            "Fraction digits:   {}..={}",
            self.min_fraction_digits, self.max_fraction_digits
        )?;
        writeln!(
            f,
            "Positive affixes:  {:?} {:?}",
            self.positive_prefix, self.positive_suffix
        )?;
        write!(
            f,
            "Negative affixes:  {:?} {:?}",
            self.negative_prefix, self.negative_suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> Locale {
        Locale::new("en", Some("US"))
    }

    #[test]
    fn test_us_currency_rule() {
        let rule = FormatRule::currency_for(&us());
        assert_eq!(rule.kind, FormatKind::Currency);
        assert_eq!(rule.currency, Some(CurrencyCode::new("USD")));
        assert_eq!(rule.positive_prefix, "$");
        assert_eq!(rule.negative_prefix, "-$");
        assert_eq!(rule.decimal_separator, '.');
        assert_eq!(rule.grouping_separator, ',');
        assert_eq!(rule.max_fraction_digits, 2);
    }

    #[test]
    fn test_german_suffix_symbol() {
        let rule = FormatRule::currency_for(&Locale::new("de", Some("DE")));
        assert_eq!(rule.positive_prefix, "");
        assert_eq!(rule.positive_suffix, "\u{a0}€");
        assert_eq!(rule.decimal_separator, ',');
        assert_eq!(rule.grouping_separator, '.');
    }

    #[test]
    fn test_japanese_has_no_fraction_digits() {
        let rule = FormatRule::currency_for(&Locale::new("ja", Some("JP")));
        assert_eq!(rule.min_fraction_digits, 0);
        assert_eq!(rule.max_fraction_digits, 0);
    }

    #[test]
    fn test_number_rule_is_not_currency() {
        let rule = FormatRule::number_for(&us());
        assert_eq!(rule.kind, FormatKind::Number);
        assert!(rule.symbol.is_none());
        assert_eq!(rule.negative_prefix, "-");
        assert_eq!(rule.max_fraction_digits, 3);
    }

    #[test]
    fn test_language_only_falls_back_to_default_region() {
        let rule = FormatRule::currency_for(&Locale::new("de", None));
        assert_eq!(rule, FormatRule::currency_for(&Locale::new("de", Some("DE"))));

        let rule = FormatRule::currency_for(&Locale::new("en", Some("NZ")));
        assert_eq!(rule, FormatRule::currency_for(&us()));
    }

    #[test]
    fn test_unknown_language_uses_root() {
        let rule = FormatRule::currency_for(&Locale::new("xx", Some("YY")));
        assert_eq!(rule.kind, FormatKind::Currency);
        assert_eq!(rule.currency, None);
        assert_eq!(rule.symbol.as_deref(), Some(GENERIC_SYMBOL));
        assert_eq!(rule.positive_prefix, "¤\u{a0}");
    }

    #[test]
    fn test_without_symbol() {
        let rule = FormatRule::currency_for(&Locale::new("pt", Some("BR")))
            .without_symbol()
            .unwrap();
        assert_eq!(rule.positive_prefix, "");
        assert_eq!(rule.negative_prefix, "-");
        assert!(rule.symbol.is_none());

        assert!(FormatRule::number_for(&us()).without_symbol().is_none());
    }

    #[test]
    fn test_display_summary() {
        let text = FormatRule::currency_for(&Locale::new("en", Some("IN"))).to_string();
        assert!(text.starts_with("=== currency format ===\n"));
        assert!(text.contains("Grouping:          ',' every 3/2\n"));
        assert!(text.contains("Fraction digits:   2..=2\n"));
        assert!(text.ends_with("Negative affixes:  \"-₹\" \"\""));
    }

    #[test]
    fn test_every_table_entry_resolves_to_itself() {
        for data in LOCALES {
            let locale = Locale::new(data.language, Some(data.region));
            let rule = FormatRule::currency_for(&locale);
            assert_eq!(rule.currency.as_ref().map(|c| c.as_str()), Some(data.currency));
        }
    }
}
