//! Runs in its own test binary because it replaces the process-wide
//! default locale.

use currency_validator::core::locale::Locale;
use currency_validator::validation::currency::CurrencyValidator;
use rust_decimal_macros::dec;

#[test]
fn absent_locale_follows_current_default() {
    let validator = CurrencyValidator::get_instance();
    let us = Locale::new("en", Some("US"));
    let de = Locale::new("de", Some("DE"));

    // Whatever the environment chose, the absent locale resolves to it
    let initial = Locale::default_locale();
    assert_eq!(validator.format_rule(None), validator.format_rule(Some(&initial)));

    Locale::set_default(us.clone());
    assert_eq!(Locale::default_locale(), us);
    assert_eq!(validator.format_rule(None), validator.format_rule(Some(&us)));
    assert_eq!(validator.validate("$1,234.56", None), Ok(dec!(1234.56)));
    assert_eq!(validator.format(dec!(1234.5), None), "$1,234.50");

    // A change is visible to the very next call
    Locale::set_default(de.clone());
    assert_eq!(validator.format_rule(None), validator.format_rule(Some(&de)));
    assert_eq!(validator.validate("1.234,56 €", None), Ok(dec!(1234.56)));
    assert!(validator.validate("$1,234.56", None).is_err());

    Locale::set_default(initial);
}
