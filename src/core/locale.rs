use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};
use thiserror::Error;

/// Environment variables consulted, in order, for the initial default locale.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

static DEFAULT_LOCALE: OnceLock<RwLock<Locale>> = OnceLock::new();

/// Errors arising from locale tag parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale tag cannot be empty")]
    Empty,
    #[error("invalid language subtag '{0}', expected 2-3 ASCII letters")]
    InvalidLanguage(String),
    #[error("invalid region subtag '{0}', expected 2 ASCII letters or 3 digits")]
    InvalidRegion(String),
    #[error("unexpected subtag '{0}' after region")]
    UnexpectedSubtag(String),
}

/// A language plus optional region identifying a set of formatting conventions.
///
/// Accepts POSIX (`en_US.UTF-8`, `de_DE@euro`) and BCP-47 style (`en-US`,
/// `zh-Hant-TW`) tags. A script subtag is skipped. The language is stored
/// lowercase and the region uppercase.
///
/// # Examples
///
/// ```
/// use currency_validator::core::locale::Locale;
///
/// let us: Locale = "en-US".parse().unwrap();
/// assert_eq!(us, Locale::new("en", Some("US")));
/// assert_eq!(us.to_string(), "en_US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Create a locale from already-validated subtags.
    pub fn new(language: &str, region: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: region.map(|r| r.to_ascii_uppercase()),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The current process-wide default locale.
    ///
    /// Initialized on first use from `LC_ALL`, `LC_MONETARY` or `LANG`,
    /// falling back to `en_US`. Every call reads the current value, so a
    /// change made through [`Locale::set_default`] is visible immediately.
    pub fn default_locale() -> Locale {
        let lock = default_cell();
        match lock.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the process-wide default locale.
    pub fn set_default(locale: Locale) {
        log::debug!("default locale set to {}", locale);
        let lock = default_cell();
        match lock.write() {
            Ok(mut guard) => *guard = locale,
            Err(poisoned) => *poisoned.into_inner() = locale,
        }
    }

    fn from_env() -> Locale {
        locale_from_lookup(|var| std::env::var(var).ok())
    }
}

/// First non-empty, parseable value among [`LOCALE_ENV_VARS`], else `en_US`.
fn locale_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    for var in LOCALE_ENV_VARS {
        let Some(value) = lookup(var) else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }
        match value.parse::<Locale>() {
            Ok(locale) => {
                log::debug!("default locale {} taken from {}", locale, var);
                return locale;
            }
            Err(e) => log::debug!("ignoring {}={:?}: {}", var, value, e),
        }
    }
    log::debug!("no usable locale in environment, defaulting to en_US");
    Locale::new("en", Some("US"))
}

fn default_cell() -> &'static RwLock<Locale> {
    DEFAULT_LOCALE.get_or_init(|| RwLock::new(Locale::from_env()))
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Drop POSIX codeset and modifier: en_US.UTF-8, de_DE@euro
        let tag = s.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        if tag == "C" || tag == "POSIX" {
            return Ok(Locale::new("en", Some("US")));
        }

        let mut parts = tag.split(['_', '-']).peekable();
        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleError::InvalidLanguage(language.to_string()));
        }

        parts.next_if(|p| is_script(p));

        let region = match parts.next() {
            None => None,
            Some(r) => {
                let alpha = r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic());
                let numeric = r.len() == 3 && r.chars().all(|c| c.is_ascii_digit());
                if !(alpha || numeric) {
                    return Err(LocaleError::InvalidRegion(r.to_string()));
                }
                Some(r)
            }
        };

        if let Some(extra) = parts.next() {
            return Err(LocaleError::UnexpectedSubtag(extra.to_string()));
        }

        Ok(Locale::new(language, region))
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}
