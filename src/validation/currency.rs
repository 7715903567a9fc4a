use crate::core::format::FormatRule;
use crate::core::locale::Locale;
use crate::error::ParseError;
use crate::validation::decimal::{DecimalValidator, FormatSource};
use rust_decimal::Decimal;
use std::sync::OnceLock;

static INSTANCE: OnceLock<CurrencyValidator> = OnceLock::new();

/// The currency rule of each locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyFormat;

impl FormatSource for CurrencyFormat {
    fn format_rule(&self, locale: &Locale) -> FormatRule {
        FormatRule::currency_for(locale)
    }
}

/// Validates currency amounts such as `"$1,234.56"` or `"1.234,56 €"` and
/// converts them to exact decimals.
///
/// A [`DecimalValidator`] driven by the locale's currency rule rather than
/// its plain number rule. Parse failures come straight from the engine.
///
/// # Examples
///
/// ```
/// use currency_validator::core::locale::Locale;
/// use currency_validator::validation::currency::CurrencyValidator;
/// use rust_decimal_macros::dec;
///
/// let us = Locale::new("en", Some("US"));
/// let validator = CurrencyValidator::get_instance();
/// assert_eq!(validator.validate("$1,234.56", Some(&us)), Ok(dec!(1234.56)));
/// assert!(validator.validate("1234.56", Some(&us)).is_err());
///
/// let lenient = CurrencyValidator::new(false);
/// assert_eq!(lenient.validate("$1,234.56 extra", Some(&us)), Ok(dec!(1234.56)));
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyValidator {
    engine: DecimalValidator<CurrencyFormat>,
}

impl CurrencyValidator {
    /// The shared strict instance.
    pub fn get_instance() -> &'static CurrencyValidator {
        INSTANCE.get_or_init(|| CurrencyValidator::new(true))
    }

    pub fn new(strict: bool) -> Self {
        Self {
            engine: DecimalValidator::new(CurrencyFormat, strict),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.engine.is_strict()
    }

    /// The currency rule for `locale`, or for the current default locale
    /// when `None`.
    pub fn format_rule(&self, locale: Option<&Locale>) -> FormatRule {
        self.engine.format_rule(locale)
    }

    pub fn validate(&self, text: &str, locale: Option<&Locale>) -> Result<Decimal, ParseError> {
        self.engine.validate(text, locale)
    }

    pub fn is_valid(&self, text: &str, locale: Option<&Locale>) -> bool {
        self.engine.is_valid(text, locale)
    }

    pub fn format(&self, value: Decimal, locale: Option<&Locale>) -> String {
        self.engine.format(value, locale)
    }

    pub fn is_in_range(&self, value: Decimal, min: Decimal, max: Decimal) -> bool {
        self.engine.is_in_range(value, min, max)
    }

    pub fn min_value(&self, value: Decimal, min: Decimal) -> bool {
        self.engine.min_value(value, min)
    }

    pub fn max_value(&self, value: Decimal, max: Decimal) -> bool {
        self.engine.max_value(value, max)
    }
}

impl Default for CurrencyValidator {
    fn default() -> Self {
        Self::new(true)
    }
}
