/*!
Common error types for the float/HEX conversion core.
*/

use thiserror::Error;

/// Common result type used throughout the conversion library
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Message reported when float text fails the final parse
pub const INVALID_FLOAT_INPUT: &str = "invalid float input";

/// Error type for all conversion requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Text is not a valid decimal literal, or hex text has a non-hex digit
    #[error("{0}")]
    Input(String),

    /// Unsupported precision/endianness, or a buffer that cannot be produced
    #[error("conversion failed: {0}")]
    Conversion(String),
}

impl ConvertError {
    /// Create a new input error with a message
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a new conversion error with a message
    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::Conversion(msg.into())
    }

    /// The error raised when float text cannot be parsed
    pub fn invalid_float() -> Self {
        Self::Input(INVALID_FLOAT_INPUT.to_string())
    }

    /// Check if this is an input error
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// Check if this is a conversion error
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion(_))
    }
}

impl From<hex::FromHexError> for ConvertError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Conversion(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_float_message() {
        let err = ConvertError::invalid_float();
        assert!(err.is_input());
        assert_eq!(err.to_string(), "invalid float input");
    }

    #[test]
    fn test_hex_error_is_conversion() {
        let err: ConvertError = hex::decode("ABC").unwrap_err().into();
        assert!(err.is_conversion());
        assert!(err.to_string().starts_with("conversion failed:"));
    }
}
