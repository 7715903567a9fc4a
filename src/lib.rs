//! # currency-validator
//!
//! Locale-aware validation of currency amounts, converting text such as
//! `"$1,234.56"` or `"1.234,56 €"` into exact `rust_decimal::Decimal` values.
//!
//! ## Architecture
//!
//! - **core**: Locales, currency codes, and per-locale format rules
//! - **validation**: The generic decimal validation engine and the currency
//!   validator built on it
//! - **config**: Serializable validator settings
//! - **error**: Parse failure reasons

pub mod config;
pub mod core;
pub mod error;
pub mod validation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::ValidatorConfig;
    pub use crate::core::currency::CurrencyCode;
    pub use crate::core::format::{FormatKind, FormatRule};
    pub use crate::core::locale::Locale;
    pub use crate::error::ParseError;
    pub use crate::validation::currency::{CurrencyFormat, CurrencyValidator};
    pub use crate::validation::decimal::{DecimalValidator, FormatSource, NumberFormat};
}
