/*!
# Float/HEX Conversion Core

This crate converts between decimal floating point values and their IEEE 754
byte representation in half, single and double precision, in either byte
order. It is pure and synchronous; front ends own a [`Session`] and call into
it per request.

## Core Types

- [`Precision`] - Half/Single/Double with byte and hex digit widths
- [`Endianness`] - Big or little byte order
- [`Session`] - Selection plus float and hex text fields
- [`ConvertError`] - Input and conversion failures

## Modules

- [`codec`] - IEEE 754 encode/decode
- [`hex_text`] - Fixed-width hex normalization
- [`float_text`] - Keystroke gate, strict parse and rendering of decimal text
- [`session`] - Request boundary for front ends
- [`error`] - Common error types
*/

pub mod codec;
pub mod error;
pub mod float_text;
pub mod hex_text;
pub mod precision;
pub mod session;

// Re-export commonly used types
pub use codec::{decode, encode};
pub use error::{ConvertError, Result};
pub use hex_text::normalize;
pub use precision::{Endianness, Precision};
pub use session::{float_to_hex, hex_to_float, ConversionReport, Session};

/// Version information for the conversion library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
