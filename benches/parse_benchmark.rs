use criterion::{black_box, criterion_group, criterion_main, Criterion};
use currency_validator::core::locale::Locale;
use currency_validator::validation::currency::CurrencyValidator;
use rust_decimal_macros::dec;

fn bench_parse_strict(c: &mut Criterion) {
    let validator = CurrencyValidator::get_instance();
    let us = Locale::new("en", Some("US"));

    c.bench_function("parse_strict_en_us", |b| {
        b.iter(|| validator.validate(black_box("$1,234,567.89"), Some(&us)))
    });
}

fn bench_parse_lenient_fallback(c: &mut Criterion) {
    let validator = CurrencyValidator::new(false);
    let de = Locale::new("de", Some("DE"));

    // Missing symbol forces the symbol-less retry
    c.bench_function("parse_lenient_de_de_no_symbol", |b| {
        b.iter(|| validator.validate(black_box("1.234.567,89"), Some(&de)))
    });
}

fn bench_format(c: &mut Criterion) {
    let validator = CurrencyValidator::get_instance();
    let inr = Locale::new("en", Some("IN"));

    c.bench_function("format_en_in", |b| {
        b.iter(|| validator.format(black_box(dec!(123456789.125)), Some(&inr)))
    });
}

criterion_group!(
    benches,
    bench_parse_strict,
    bench_parse_lenient_fallback,
    bench_format
);
criterion_main!(benches);
