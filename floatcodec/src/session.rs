/*!
Request boundary for a float/HEX converter front end.

A [`Session`] holds the selection and the two text fields a front end
displays. Hosts own the session and pass it to each handler; nothing here
reads ambient state.
*/

use crate::codec;
use crate::error::Result;
use crate::float_text;
use crate::hex_text;
use crate::precision::{Endianness, Precision};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Text both fields show after a selection change
pub const RESET_TEXT: &str = "0";

/// Convert float text to canonical hex text
pub fn float_to_hex(raw_float: &str, precision: Precision, endian: Endianness) -> Result<String> {
    let value = float_text::parse_submitted(raw_float)?;
    let bytes = codec::encode(value, precision, endian);
    Ok(hex_text::format_hex(&bytes))
}

/// Convert hex text to float text
pub fn hex_to_float(raw_hex: &str, precision: Precision, endian: Endianness) -> Result<String> {
    let normalized = hex_text::normalize_grouped(raw_hex, precision)?;
    let bytes = hex_text::to_bytes(&normalized)?;
    let value = codec::decode(&bytes, precision, endian)?;
    Ok(float_text::format_float(value))
}

/// Result of one conversion, as reported to a front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub mode: Precision,
    pub endian: Endianness,
    pub float: String,
    pub hex: String,
}

/// Converter state: selected precision and byte order plus both text fields
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    precision: Precision,
    endianness: Endianness,
    float_text: String,
    hex_text: String,
}

impl Session {
    /// Create a session with the given selection and both fields at `"0"`
    pub fn new(precision: Precision, endianness: Endianness) -> Self {
        Self {
            precision,
            endianness,
            float_text: RESET_TEXT.to_string(),
            hex_text: RESET_TEXT.to_string(),
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn float_text(&self) -> &str {
        &self.float_text
    }

    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Select a precision; both fields reset
    pub fn set_mode(&mut self, precision: Precision) {
        self.precision = precision;
        self.reset_fields();
    }

    /// Select a byte order; both fields reset
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
        self.reset_fields();
    }

    /// Encode `raw_float` with the current selection
    ///
    /// On success the float field holds the submitted text and the hex field
    /// the result. On failure both fields are left as they were.
    pub fn float_to_hex(&mut self, raw_float: &str) -> Result<String> {
        let hex = float_to_hex(raw_float, self.precision, self.endianness)?;
        self.float_text = raw_float.to_string();
        self.hex_text = hex.clone();
        Ok(hex)
    }

    /// Decode `raw_hex` with the current selection
    ///
    /// On success the hex field holds the submitted text and the float field
    /// the result. On failure both fields are left as they were.
    pub fn hex_to_float(&mut self, raw_hex: &str) -> Result<String> {
        let float = hex_to_float(raw_hex, self.precision, self.endianness)?;
        self.hex_text = raw_hex.to_string();
        self.float_text = float.clone();
        Ok(float)
    }

    /// Snapshot of the current selection and fields
    pub fn report(&self) -> ConversionReport {
        ConversionReport {
            mode: self.precision,
            endian: self.endianness,
            float: self.float_text.clone(),
            hex: self.hex_text.clone(),
        }
    }

    fn reset_fields(&mut self) {
        debug!(precision = %self.precision, endian = %self.endianness, "selection changed, fields reset");
        self.float_text = RESET_TEXT.to_string();
        self.hex_text = RESET_TEXT.to_string();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Precision::default(), Endianness::default())
    }
}
