/*!
Precision registry and byte order selection.

Each IEEE 754 interchange width the converter supports is a closed variant
carrying its byte width and the number of hex digits that represent it.
*/

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Floating point precision (IEEE 754 binary16/32/64)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Half,
    #[default]
    Single,
    Double,
}

impl Precision {
    /// All supported precisions, narrowest first
    pub const ALL: [Precision; 3] = [Self::Half, Self::Single, Self::Double];

    /// Size of an encoded value in bytes
    pub const fn byte_width(self) -> usize {
        match self {
            Self::Half => 2,
            Self::Single => 4,
            Self::Double => 8,
        }
    }

    /// Number of hex digits in the canonical text form
    pub const fn hex_digit_width(self) -> usize {
        self.byte_width() * 2
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Half => "half",
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = ConvertError;

    /// Parse a precision name (case-insensitive)
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "half" => Ok(Self::Half),
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            other => Err(ConvertError::conversion(format!("unknown mode: {other:?}"))),
        }
    }
}

/// Byte order of the encoded value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Most significant byte first
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

impl Endianness {
    pub const ALL: [Endianness; 2] = [Self::Big, Self::Little];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Little => "little",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endianness {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "big" => Ok(Self::Big),
            "little" => Ok(Self::Little),
            other => Err(ConvertError::conversion(format!("unknown byte order: {other:?}"))),
        }
    }
}
