/*!
Decimal text coercion.

Two classifiers cover text typed one character at a time: a permissive
prefix check that gates keystrokes, and the strict parse used when a value
is submitted for encoding.
*/

use crate::error::{ConvertError, Result};
use std::borrow::Cow;
use tracing::warn;

/// Keystroke gate: accepts `""`, `"-"`, or any complete real-number literal
///
/// Looser than [`parse_float`] so that editing can pass through states that
/// are not yet submittable.
pub fn accepts_prefix(text: &str) -> bool {
    text.is_empty() || text == "-" || is_literal(text)
}

/// Strict parse of a complete real-number literal
///
/// Surrounding whitespace is ignored. Accepts signed decimal and exponent
/// forms, single underscores between digits (`1_000.5`), and `inf`,
/// `infinity` and `nan` in any case.
pub fn parse_float(text: &str) -> Result<f64> {
    parse_literal(text).ok_or_else(|| {
        warn!(input = text, "rejected float text");
        ConvertError::invalid_float()
    })
}

/// Parse submitted float text, treating blank text as `0.0`
pub fn parse_submitted(text: &str) -> Result<f64> {
    if text.trim().is_empty() {
        Ok(0.0)
    } else {
        parse_float(text)
    }
}

/// Render a value as the shortest text that parses back to the same `f64`
///
/// Integral values keep a trailing `.0`; specials render as `inf`, `-inf`
/// and `NaN`.
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

fn is_literal(text: &str) -> bool {
    parse_literal(text).is_some()
}

fn parse_literal(text: &str) -> Option<f64> {
    strip_digit_separators(text.trim())?.parse::<f64>().ok()
}

/// Remove `_` digit separators; `None` unless each one sits between two digits
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let well_placed = bytes.iter().enumerate().filter(|(_, b)| **b == b'_').all(|(i, _)| {
        i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(|next| next.is_ascii_digit())
    });

    well_placed.then(|| Cow::Owned(text.replace('_', "")))
}
