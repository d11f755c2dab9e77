#![forbid(unsafe_code)]

//! The calculation core: input validation, the rule itself, and
//! assembly of the localized result message. Nothing here touches the
//! terminal, which keeps the whole module testable as plain functions.

use std::fmt;

use r72_i18n::{Lang, Segment, expand, format_currency, format_rate, format_years, strings};

/// Why a submission was rejected.
///
/// Validation runs in a fixed order: the amount is checked first and a
/// failure there short-circuits, so the rate is never even parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount missing, non-numeric, non-finite, or not positive.
    InvalidAmount,
    /// Interest rate missing, non-numeric, non-finite, or not positive.
    InvalidRate,
}

impl ValidationError {
    /// The user-facing message in the given language.
    #[must_use]
    pub fn message(self, lang: Lang) -> &'static str {
        let table = strings(lang);
        match self {
            ValidationError::InvalidAmount => table.amount_error,
            ValidationError::InvalidRate => table.rate_error,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidAmount => write!(f, "invalid amount"),
            ValidationError::InvalidRate => write!(f, "invalid interest rate"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// What the message area below the button is showing.
///
/// A result keeps its segment structure so the renderer can embolden
/// the substituted values without re-parsing the text.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayMessage {
    Result(Vec<Segment>),
    Error(&'static str),
}

impl DisplayMessage {
    /// The message as plain text, emphasis dropped. Used for logging
    /// and assertions.
    #[must_use]
    pub fn plain(&self) -> String {
        match self {
            DisplayMessage::Result(segments) => {
                segments.iter().map(Segment::text).collect()
            }
            DisplayMessage::Error(text) => (*text).to_string(),
        }
    }
}

/// The rule of 72: years for an investment to double at `rate` percent
/// compound interest.
#[must_use]
pub fn years_to_double(rate: f64) -> f64 {
    72.0 / rate
}

/// Validates both raw inputs and produces the localized result message.
///
/// The amount is formatted as the language's currency, the doubling
/// time with one decimal, and the rate exactly as the shortest form of
/// the parsed value (so `"8.0"` comes back as `8`, not `8.0`).
pub fn calculate_years(
    amount_raw: &str,
    rate_raw: &str,
    lang: Lang,
) -> Result<DisplayMessage, ValidationError> {
    let amount = parse_positive(amount_raw).ok_or(ValidationError::InvalidAmount)?;
    let rate = parse_positive(rate_raw).ok_or(ValidationError::InvalidRate)?;
    let years = years_to_double(rate);

    let table = strings(lang);
    let amount_text = format_currency(amount, table.currency);
    let years_text = format_years(years);
    let rate_text = format_rate(rate);
    let segments = expand(
        table.result_template,
        &[
            ("amount", &amount_text),
            ("years", &years_text),
            ("rate", &rate_text),
        ],
    );
    Ok(DisplayMessage::Result(segments))
}

/// Parses a strictly positive finite number. Rust's float parser also
/// accepts `inf` and `NaN` spellings; both count as invalid here.
fn parse_positive(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
