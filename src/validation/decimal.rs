use crate::core::format::FormatRule;
use crate::core::locale::Locale;
use crate::error::ParseError;
use crate::validation::codec;
use rust_decimal::Decimal;

/// Supplies the format rule a [`DecimalValidator`] parses and formats with.
pub trait FormatSource {
    fn format_rule(&self, locale: &Locale) -> FormatRule;
}

/// The generic number rule of each locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormat;

impl FormatSource for NumberFormat {
    fn format_rule(&self, locale: &Locale) -> FormatRule {
        FormatRule::number_for(locale)
    }
}

/// Validates text amounts and converts them to exact decimals.
///
/// Which rule applies to a locale is decided by the [`FormatSource`]; the
/// strictness is fixed at construction. A `None` locale means the process
/// default, read once per call.
///
/// # Examples
///
/// ```
/// use currency_validator::core::locale::Locale;
/// use currency_validator::validation::decimal::{DecimalValidator, NumberFormat};
/// use rust_decimal_macros::dec;
///
/// let validator = DecimalValidator::new(NumberFormat, true);
/// let de = Locale::new("de", Some("DE"));
/// assert_eq!(validator.validate("1.234,5", Some(&de)), Ok(dec!(1234.5)));
/// ```
#[derive(Debug, Clone)]
pub struct DecimalValidator<S = NumberFormat> {
    source: S,
    strict: bool,
}

impl<S: FormatSource> DecimalValidator<S> {
    pub fn new(source: S, strict: bool) -> Self {
        Self { source, strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The rule for `locale`, or for the current default locale when `None`.
    pub fn format_rule(&self, locale: Option<&Locale>) -> FormatRule {
        match locale {
            Some(locale) => self.source.format_rule(locale),
            None => self.source.format_rule(&Locale::default_locale()),
        }
    }

    /// Parse `text` into a decimal.
    pub fn validate(&self, text: &str, locale: Option<&Locale>) -> Result<Decimal, ParseError> {
        let rule = self.format_rule(locale);
        codec::parse(text, &rule, self.strict).map_err(|e| {
            log::trace!("rejected {:?} ({} rule): {}", text, rule.kind, e);
            e
        })
    }

    pub fn is_valid(&self, text: &str, locale: Option<&Locale>) -> bool {
        self.validate(text, locale).is_ok()
    }

    /// Render `value` as text.
    pub fn format(&self, value: Decimal, locale: Option<&Locale>) -> String {
        codec::format(value, &self.format_rule(locale))
    }

    /// Whether `min <= value <= max`.
    pub fn is_in_range(&self, value: Decimal, min: Decimal, max: Decimal) -> bool {
        value >= min && value <= max
    }

    /// Whether `value >= min`.
    pub fn min_value(&self, value: Decimal, min: Decimal) -> bool {
        value >= min
    }

    /// Whether `value <= max`.
    pub fn max_value(&self, value: Decimal, max: Decimal) -> bool {
        value <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::FormatKind;
    use rust_decimal_macros::dec;

    fn us() -> Locale {
        Locale::new("en", Some("US"))
    }

    /// Always hands out the rule of one fixed locale.
    struct Fixed(Locale);

    impl FormatSource for Fixed {
        fn format_rule(&self, _locale: &Locale) -> FormatRule {
            FormatRule::number_for(&self.0)
        }
    }

    #[test]
    fn test_number_validator_uses_number_rule() {
        let validator = DecimalValidator::new(NumberFormat, true);
        assert_eq!(validator.format_rule(Some(&us())).kind, FormatKind::Number);
    }

    #[test]
    fn test_validate_and_format() {
        let validator = DecimalValidator::new(NumberFormat, true);
        assert_eq!(validator.validate("1,234.5", Some(&us())), Ok(dec!(1234.5)));
        assert_eq!(validator.format(dec!(1234.5), Some(&us())), "1,234.5");
        assert!(!validator.is_valid("12 apples", Some(&us())));
    }

    #[test]
    fn test_lenient_validator() {
        let validator = DecimalValidator::new(NumberFormat, false);
        assert!(!validator.is_strict());
        assert_eq!(validator.validate("12 apples", Some(&us())), Ok(dec!(12)));
    }

    #[test]
    fn test_source_decides_rule() {
        let validator = DecimalValidator::new(Fixed(Locale::new("de", Some("DE"))), true);
        assert_eq!(validator.validate("1.234,5", Some(&us())), Ok(dec!(1234.5)));
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let validator = DecimalValidator::new(NumberFormat, true);
        let rule = FormatRule::number_for(&us());
        assert_eq!(
            validator.validate("1,2", Some(&us())),
            codec::parse("1,2", &rule, true)
        );
    }

    #[test]
    fn test_range_checks() {
        let validator = DecimalValidator::new(NumberFormat, true);
        assert!(validator.is_in_range(dec!(10), dec!(10), dec!(20)));
        assert!(validator.is_in_range(dec!(20), dec!(10), dec!(20)));
        assert!(!validator.is_in_range(dec!(20.01), dec!(10), dec!(20)));
        assert!(validator.min_value(dec!(5), dec!(5)));
        assert!(!validator.min_value(dec!(4.99), dec!(5)));
        assert!(validator.max_value(dec!(5), dec!(5)));
        assert!(!validator.max_value(dec!(5.01), dec!(5)));
    }
}
