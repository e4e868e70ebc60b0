/*!
Hex text normalization.

Arbitrary user hex text is mapped onto the fixed digit width of a precision:
short input is left-padded with zeros, long input keeps only its rightmost
digits (the last digits typed win).
*/

use crate::error::{ConvertError, Result};
use crate::precision::Precision;
use tracing::warn;

/// Normalize raw hex text to exactly `precision.hex_digit_width()` upper-case digits
pub fn normalize(raw: &str, precision: Precision) -> Result<String> {
    fit_width(raw.trim(), precision)
}

/// Like [`normalize`], but first drops space characters so byte-grouped text
/// such as `"3F 80 00 00"` is accepted. Other separators are still rejected.
pub fn normalize_grouped(raw: &str, precision: Precision) -> Result<String> {
    let compact: String = raw.trim().chars().filter(|&c| c != ' ').collect();
    fit_width(&compact, precision)
}

fn fit_width(trimmed: &str, precision: Precision) -> Result<String> {
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .to_uppercase();

    if let Some(bad) = digits.chars().find(|c| !matches!(c, '0'..='9' | 'A'..='F')) {
        warn!(input = trimmed, "rejected hex text");
        return Err(ConvertError::input(format!("invalid hex input: unexpected character {bad:?}")));
    }

    let digits = if digits.is_empty() { "0".to_string() } else { digits };
    let width = precision.hex_digit_width();

    // Only ASCII remains, so byte offsets are char offsets
    let fitted = if digits.len() < width {
        format!("{digits:0>width$}")
    } else {
        digits[digits.len() - width..].to_string()
    };

    Ok(fitted)
}

/// Decode normalized hex text into raw bytes
pub fn to_bytes(hex_text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex_text)?)
}

/// Render bytes as upper-case hex with no separators
pub fn format_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Split canonical hex text into space-separated byte pairs
pub fn group_bytes(hex_text: &str) -> String {
    hex_text
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
