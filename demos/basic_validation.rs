//! Basic currency validation example.
//!
//! Parses the same kind of invoice total under several locales, shows how
//! strict and lenient validators differ, and formats amounts back to text.

use currency_validator::core::locale::Locale;
use currency_validator::validation::currency::CurrencyValidator;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  currency-validator: Basic Validation Example ║");
    println!("╚══════════════════════════════════════════════╝\n");

    // --- Scenario 1: One validator, many locales ---
    println!("━━━ Scenario 1: Locale-specific parsing ━━━\n");

    let validator = CurrencyValidator::get_instance();
    for (tag, text) in [
        ("en_US", "$1,234.56"),
        ("de_DE", "1.234,56 €"),
        ("fr_FR", "1 234,56 €"),
        ("en_IN", "₹12,34,567.89"),
        ("ja_JP", "￥1,235"),
    ] {
        let locale: Locale = tag.parse().expect("valid locale tag");
        match validator.validate(text, Some(&locale)) {
            Ok(amount) => println!("  {:<6} {:>18}  →  {}", tag, text, amount),
            Err(e) => println!("  {:<6} {:>18}  →  INVALID ({})", tag, text, e),
        }
    }
    println!();

    // --- Scenario 2: Strict vs lenient ---
    println!("━━━ Scenario 2: Strict vs lenient ━━━\n");

    let us = Locale::new("en", Some("US"));
    let lenient = CurrencyValidator::new(false);
    for text in ["$1,234.56 extra", "1234.56", "$1,23,456"] {
        let strict_result = validator
            .validate(text, Some(&us))
            .map(|d| d.to_string())
            .unwrap_or_else(|e| format!("INVALID ({})", e));
        let lenient_result = lenient
            .validate(text, Some(&us))
            .map(|d| d.to_string())
            .unwrap_or_else(|e| format!("INVALID ({})", e));
        println!("  {:<18} strict: {:<40} lenient: {}", text, strict_result, lenient_result);
    }
    println!();

    // --- Scenario 3: Formatting ---
    println!("━━━ Scenario 3: Formatting ━━━\n");

    let amount = dec!(-1234567.125);
    for tag in ["en_US", "de_CH", "nl_NL", "sv_SE", "pt_BR"] {
        let locale: Locale = tag.parse().expect("valid locale tag");
        println!("  {:<6} {}", tag, validator.format(amount, Some(&locale)));
    }
}
