//! Reading and writing decimal amounts under a [`FormatRule`].
//!
//! Parsing works on the trimmed input in three steps: a sign-selecting
//! prefix, the digits (grouping separators only in the integer part), then
//! the suffix belonging to that sign. Strict parsing additionally requires
//! the whole input to be consumed, well-formed digit groups, and for
//! currency rules no more fraction digits than the currency's minor unit.
//! Lenient parsing tolerates all of that plus a missing currency symbol.

use crate::core::format::{FormatKind, FormatRule};
use crate::error::ParseError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Significant digits a `Decimal` holds.
const MAX_PRECISION: u32 = 28;

/// Digits read from the input, before conversion.
struct Scan {
    negative: bool,
    integer: String,
    fraction: String,
    /// Digit count of each integer group, left to right.
    groups: Vec<usize>,
    /// Input index of each grouping separator.
    separators: Vec<usize>,
    /// Index just past the suffix.
    end: usize,
}

/// Parse `text` into an exact decimal under `rule`.
///
/// # Examples
///
/// ```
/// use currency_validator::core::format::FormatRule;
/// use currency_validator::core::locale::Locale;
/// use currency_validator::validation::codec::parse;
/// use rust_decimal_macros::dec;
///
/// let rule = FormatRule::currency_for(&Locale::new("en", Some("US")));
/// assert_eq!(parse("$1,234.56", &rule, true), Ok(dec!(1234.56)));
/// assert!(parse("$1,234.56 extra", &rule, true).is_err());
/// assert_eq!(parse("$1,234.56 extra", &rule, false), Ok(dec!(1234.56)));
/// ```
pub fn parse(text: &str, rule: &FormatRule, strict: bool) -> Result<Decimal, ParseError> {
    let input: Vec<char> = text.trim().chars().collect();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    match parse_chars(&input, rule, strict) {
        Err(e @ (ParseError::MissingPrefix { .. } | ParseError::MissingSuffix { .. }))
            if !strict =>
        {
            // Retry as a bare number; report the original failure if that fails too
            match rule.without_symbol() {
                Some(bare) => parse_chars(&input, &bare, strict).map_err(|_| e),
                None => Err(e),
            }
        }
        other => other,
    }
}

fn parse_chars(input: &[char], rule: &FormatRule, strict: bool) -> Result<Decimal, ParseError> {
    let scan = scan(input, rule)?;

    if strict {
        if scan.end < input.len() {
            return Err(ParseError::TrailingInput { index: scan.end });
        }
        if let Some(index) = misplaced_separator(&scan, rule) {
            return Err(ParseError::Grouping { index });
        }
        let found = scan.fraction.chars().count() as u32;
        if rule.kind == FormatKind::Currency && found > rule.max_fraction_digits {
            return Err(ParseError::TooManyFractionDigits {
                found,
                max: rule.max_fraction_digits,
            });
        }
    }

    to_decimal(scan, strict)
}

fn scan(input: &[char], rule: &FormatRule) -> Result<Scan, ParseError> {
    let positive = match_affix(input, 0, &rule.positive_prefix);
    let negative = match_affix(input, 0, &rule.negative_prefix);
    let (negative, mut pos) = match (positive, negative) {
        (Some(p), Some(n)) if n > p => (true, n),
        (Some(p), _) => (false, p),
        (None, Some(n)) => (true, n),
        (None, None) => {
            return Err(ParseError::MissingPrefix {
                expected: rule.positive_prefix.clone(),
            })
        }
    };

    let start = pos;
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut groups = Vec::new();
    let mut separators = Vec::new();
    let mut current = 0usize;
    let mut in_fraction = false;

    while let Some(&c) = input.get(pos) {
        if c.is_ascii_digit() {
            if in_fraction {
                fraction.push(c);
            } else {
                integer.push(c);
                current += 1;
            }
        } else if !in_fraction && c == rule.decimal_separator {
            in_fraction = true;
        } else if !in_fraction
            && current > 0
            && is_grouping(c, rule)
            && input.get(pos + 1).is_some_and(|n| n.is_ascii_digit())
        {
            groups.push(current);
            separators.push(pos);
            current = 0;
        } else {
            break;
        }
        pos += 1;
    }
    groups.push(current);

    if integer.is_empty() && fraction.is_empty() {
        return Err(ParseError::NoDigits { index: start });
    }

    let suffix = if negative {
        &rule.negative_suffix
    } else {
        &rule.positive_suffix
    };
    let end = match_affix(input, pos, suffix).ok_or_else(|| ParseError::MissingSuffix {
        expected: suffix.clone(),
        index: pos,
    })?;

    Ok(Scan {
        negative,
        integer,
        fraction,
        groups,
        separators,
        end,
    })
}

fn is_grouping(c: char, rule: &FormatRule) -> bool {
    if rule.grouping_size == 0 {
        return false;
    }
    let separator = rule.grouping_separator;
    c == separator
        || (separator.is_whitespace() && c.is_whitespace())
        || (is_apostrophe(separator) && is_apostrophe(c))
}

/// Swiss grouping is typed with either the typographic or the ASCII apostrophe.
fn is_apostrophe(c: char) -> bool {
    c == '’' || c == '\''
}

/// Match `affix` at `start`, returning the index just past it.
fn match_affix(input: &[char], start: usize, affix: &str) -> Option<usize> {
    let mut pos = start;
    for expected in affix.chars() {
        let actual = *input.get(pos)?;
        let matches = if expected.is_whitespace() {
            actual.is_whitespace()
        } else {
            actual == expected
        };
        if !matches {
            return None;
        }
        pos += 1;
    }
    Some(pos)
}

/// Index of the first separator whose neighbouring group has the wrong size.
fn misplaced_separator(scan: &Scan, rule: &FormatRule) -> Option<usize> {
    let last = scan.groups.len() - 1;
    if last == 0 {
        return None;
    }
    let primary = rule.grouping_size as usize;
    let secondary = match rule.secondary_grouping_size {
        0 => primary,
        n => n as usize,
    };

    for (i, &len) in scan.groups.iter().enumerate() {
        let ok = if i == last {
            len == primary
        } else if i == 0 {
            len <= secondary
        } else {
            len == secondary
        };
        if !ok {
            return Some(scan.separators[i.saturating_sub(1)]);
        }
    }
    None
}

/// Strict conversion refuses to drop digits; lenient conversion rounds
/// digits beyond the decimal's precision.
fn to_decimal(scan: Scan, strict: bool) -> Result<Decimal, ParseError> {
    let integer = if scan.integer.is_empty() {
        "0".to_string()
    } else {
        scan.integer
    };
    let mut digits = integer.clone();
    if !scan.fraction.is_empty() {
        digits.push('.');
        digits.push_str(&scan.fraction);
    }

    let value = if strict {
        Decimal::from_str_exact(&digits).map_err(|_| {
            if Decimal::from_str_exact(&integer).is_ok() {
                ParseError::Precision { max: MAX_PRECISION }
            } else {
                ParseError::OutOfRange
            }
        })?
    } else {
        Decimal::from_str(&digits).map_err(|_| ParseError::OutOfRange)?
    };
    Ok(if scan.negative { -value } else { value })
}

/// Render `value` under `rule`, rounding half-even to the rule's maximum
/// fraction digits.
///
/// # Examples
///
/// ```
/// use currency_validator::core::format::FormatRule;
/// use currency_validator::core::locale::Locale;
/// use currency_validator::validation::codec::format;
/// use rust_decimal_macros::dec;
///
/// let rule = FormatRule::currency_for(&Locale::new("en", Some("US")));
/// assert_eq!(format(dec!(1234.5), &rule), "$1,234.50");
/// ```
pub fn format(value: Decimal, rule: &FormatRule) -> String {
    let rounded = value.round_dp_with_strategy(
        rule.max_fraction_digits,
        RoundingStrategy::MidpointNearestEven,
    );
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = rounded.abs().to_string();
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let mut fraction = fraction.trim_end_matches('0').to_string();
    while (fraction.len() as u32) < rule.min_fraction_digits {
        fraction.push('0');
    }

    let (prefix, suffix) = if negative {
        (&rule.negative_prefix, &rule.negative_suffix)
    } else {
        (&rule.positive_prefix, &rule.positive_suffix)
    };

    let mut out = String::new();
    out.push_str(prefix);
    out.push_str(&group(integer, rule));
    if !fraction.is_empty() {
        out.push(rule.decimal_separator);
        out.push_str(&fraction);
    }
    out.push_str(suffix);
    out
}

fn group(integer: &str, rule: &FormatRule) -> String {
    if rule.grouping_size == 0 {
        return integer.to_string();
    }
    let digits: Vec<char> = integer.chars().collect();
    let secondary = match rule.secondary_grouping_size {
        0 => rule.grouping_size as usize,
        n => n as usize,
    };

    let mut parts: Vec<String> = Vec::new();
    let mut end = digits.len();
    let mut size = rule.grouping_size as usize;
    while end > size {
        parts.push(digits[end - size..end].iter().collect());
        end -= size;
        size = secondary;
    }
    parts.push(digits[..end].iter().collect());
    parts.reverse();
    let separator = rule.grouping_separator.to_string();
    parts.join(separator.as_str())
}
