use serde::Serialize;
use thiserror::Error;

/// Reasons a text amount fails to parse against a format rule.
///
/// Indices count characters of the trimmed input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected prefix '{expected}' at start of input")]
    MissingPrefix { expected: String },
    #[error("no digits found at index {index}")]
    NoDigits { index: usize },
    #[error("expected suffix '{expected}' at index {index}")]
    MissingSuffix { expected: String, index: usize },
    #[error("unparsed input remains at index {index}")]
    TrailingInput { index: usize },
    #[error("misplaced grouping separator at index {index}")]
    Grouping { index: usize },
    #[error("{found} fraction digits exceed the maximum of {max}")]
    TooManyFractionDigits { found: u32, max: u32 },
    #[error("amount has more digits than the {max} a decimal can hold")]
    Precision { max: u32 },
    #[error("amount is outside the representable decimal range")]
    OutOfRange,
}
