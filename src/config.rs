//! Validator settings, loadable from JSON.

use crate::core::locale::Locale;
use crate::validation::currency::CurrencyValidator;
use serde::{Deserialize, Serialize};

/// How to build a [`CurrencyValidator`] and which locale to apply it with.
///
/// # Examples
///
/// ```
/// use currency_validator::config::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json(r#"{ "locale": "de_DE" }"#).unwrap();
/// assert!(config.strict);
/// assert_eq!(config.resolved_locale().to_string(), "de_DE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Locale to validate against; the process default when absent.
    #[serde(default)]
    pub locale: Option<Locale>,
    /// Strict parsing requires the whole input to match the format.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            locale: None,
            strict: default_strict(),
        }
    }
}

impl ValidatorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The configured locale, or the current default locale.
    pub fn resolved_locale(&self) -> Locale {
        self.locale.clone().unwrap_or_else(Locale::default_locale)
    }

    pub fn validator(&self) -> CurrencyValidator {
        CurrencyValidator::new(self.strict)
    }
}
