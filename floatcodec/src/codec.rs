/*!
IEEE 754 encoding and decoding.

Values are carried as `f64` and narrowed to the requested precision on
encode. Narrowing to half precision rounds to nearest, ties to even, in a
single rounding step; decoded half and single values are widened to `f64`
without loss.
*/

use crate::error::{ConvertError, Result};
use crate::precision::{Endianness, Precision};
use half::f16;
use tracing::debug;

/// Encode a value as the IEEE 754 bit pattern of `precision` in `endian` order
pub fn encode(value: f64, precision: Precision, endian: Endianness) -> Vec<u8> {
    let bytes = match (precision, endian) {
        (Precision::Half, Endianness::Big) => to_half(value).to_be_bytes().to_vec(),
        (Precision::Half, Endianness::Little) => to_half(value).to_le_bytes().to_vec(),
        (Precision::Single, Endianness::Big) => (value as f32).to_be_bytes().to_vec(),
        (Precision::Single, Endianness::Little) => (value as f32).to_le_bytes().to_vec(),
        (Precision::Double, Endianness::Big) => value.to_be_bytes().to_vec(),
        (Precision::Double, Endianness::Little) => value.to_le_bytes().to_vec(),
    };

    debug!(%precision, %endian, value, bytes = ?bytes, "encoded value");
    bytes
}

/// Narrow to binary16 with a single round-to-nearest-even
///
/// `f16::from_f64` can take a hardware path through `f32` that rounds twice.
/// Rounding to `f32` with round-to-odd first keeps the result exact.
fn to_half(value: f64) -> f16 {
    f16::from_f32(to_single_round_odd(value))
}

/// `f64` to `f32`, rounding inexact results to the neighbour with an odd significand
fn to_single_round_odd(value: f64) -> f32 {
    let nearest = value as f32;
    if !nearest.is_finite() || f64::from(nearest) == value {
        return nearest;
    }

    // Truncate toward zero, then mark the discarded bits as inexact
    let mut bits = nearest.to_bits();
    if f64::from(nearest).abs() > value.abs() {
        bits -= 1;
    }
    f32::from_bits(bits | 1)
}

/// Decode `bytes` as an IEEE 754 value of `precision` in `endian` order
///
/// The buffer must hold exactly `precision.byte_width()` bytes.
pub fn decode(bytes: &[u8], precision: Precision, endian: Endianness) -> Result<f64> {
    let value = match precision {
        Precision::Half => {
            let raw = fixed::<2>(bytes, precision)?;
            let half = match endian {
                Endianness::Big => f16::from_be_bytes(raw),
                Endianness::Little => f16::from_le_bytes(raw),
            };
            half.to_f64()
        }
        Precision::Single => {
            let raw = fixed::<4>(bytes, precision)?;
            let single = match endian {
                Endianness::Big => f32::from_be_bytes(raw),
                Endianness::Little => f32::from_le_bytes(raw),
            };
            f64::from(single)
        }
        Precision::Double => {
            let raw = fixed::<8>(bytes, precision)?;
            match endian {
                Endianness::Big => f64::from_be_bytes(raw),
                Endianness::Little => f64::from_le_bytes(raw),
            }
        }
    };

    debug!(%precision, %endian, bytes = ?bytes, value, "decoded value");
    Ok(value)
}

fn fixed<const N: usize>(bytes: &[u8], precision: Precision) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        ConvertError::conversion(format!(
            "{precision} precision needs {} bytes, got {}",
            precision.byte_width(),
            bytes.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_one_big_endian() {
        assert_eq!(encode(1.0, Precision::Single, Endianness::Big), [0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(
            decode(&[0x3F, 0x80, 0x00, 0x00], Precision::Single, Endianness::Big).unwrap(),
            1.0
        );
    }

    #[test]
    fn test_single_one_little_endian() {
        assert_eq!(encode(1.0, Precision::Single, Endianness::Little), [0x00, 0x00, 0x80, 0x3F]);
    }

    #[test]
    fn test_half_zero() {
        let bytes = encode(0.0, Precision::Half, Endianness::Big);
        assert_eq!(bytes, [0x00, 0x00]);
        assert_eq!(decode(&bytes, Precision::Half, Endianness::Big).unwrap(), 0.0);
    }

    #[test]
    fn test_double_known_patterns() {
        assert_eq!(
            encode(-2.5, Precision::Double, Endianness::Big),
            [0xC0, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
        assert_eq!(
            decode(&[0, 0, 0, 0, 0, 0, 0xF0, 0x3F], Precision::Double, Endianness::Little).unwrap(),
            1.0
        );
    }

    #[test]
    fn test_half_rounds_to_nearest_even() {
        // 1 + 2^-11 sits halfway between 0x3C00 and 0x3C01
        let low_tie = 1.0 + 2f64.powi(-11);
        assert_eq!(encode(low_tie, Precision::Half, Endianness::Big), [0x3C, 0x00]);

        // 1 + 3 * 2^-11 sits halfway between 0x3C01 and 0x3C02
        let high_tie = 1.0 + 3.0 * 2f64.powi(-11);
        assert_eq!(encode(high_tie, Precision::Half, Endianness::Big), [0x3C, 0x02]);
    }

    #[test]
    fn test_half_rounds_once_from_double() {
        // Offsets below f32 precision must still decide which side of the tie wins
        let tiny = 2f64.powi(-30);
        let above_tie = 1.0 + 2f64.powi(-11) + tiny;
        assert_eq!(encode(above_tie, Precision::Half, Endianness::Big), [0x3C, 0x01]);
        assert_eq!(encode(-above_tie, Precision::Half, Endianness::Big), [0xBC, 0x01]);

        let below_tie = 1.0 + 3.0 * 2f64.powi(-11) - tiny;
        assert_eq!(encode(below_tie, Precision::Half, Endianness::Big), [0x3C, 0x01]);

        // Just under the overflow threshold stays finite
        assert_eq!(encode(65520.0 - 2f64.powi(-20), Precision::Half, Endianness::Big), [0x7B, 0xFF]);

        // Just above half of the smallest subnormal rounds up to it
        let above_half_min = 2f64.powi(-25) + 2f64.powi(-60);
        assert_eq!(encode(above_half_min, Precision::Half, Endianness::Big), [0x00, 0x01]);
        assert_eq!(encode(2f64.powi(-25), Precision::Half, Endianness::Big), [0x00, 0x00]);
    }

    #[test]
    fn test_round_odd_keeps_exact_values() {
        assert_eq!(to_single_round_odd(1.5), 1.5f32);
        assert_eq!(to_single_round_odd(0.0).to_bits(), 0);
        assert!(to_single_round_odd(f64::NAN).is_nan());
        assert_eq!(to_single_round_odd(1e300), f32::INFINITY);
    }

    #[test]
    fn test_half_overflow_and_specials() {
        assert_eq!(encode(65504.0, Precision::Half, Endianness::Big), [0x7B, 0xFF]);
        assert_eq!(encode(65520.0, Precision::Half, Endianness::Big), [0x7C, 0x00]);
        assert_eq!(encode(f64::NEG_INFINITY, Precision::Half, Endianness::Big), [0xFC, 0x00]);
        assert_eq!(encode(-0.0, Precision::Half, Endianness::Big), [0x80, 0x00]);

        let nan = decode(&[0x7E, 0x00], Precision::Half, Endianness::Big).unwrap();
        assert!(nan.is_nan());
        let bytes = encode(f64::NAN, Precision::Half, Endianness::Big);
        assert!(decode(&bytes, Precision::Half, Endianness::Big).unwrap().is_nan());
    }

    #[test]
    fn test_half_subnormal_promotes_exactly() {
        let smallest = decode(&[0x00, 0x01], Precision::Half, Endianness::Big).unwrap();
        assert_eq!(smallest, 2f64.powi(-24));
    }

    #[test]
    fn test_single_overflow_to_infinity() {
        assert_eq!(
            encode(1e300, Precision::Single, Endianness::Big),
            [0x7F, 0x80, 0x00, 0x00]
        );
    }

    #[test]
    fn test_wrong_length_is_conversion_error() {
        let err = decode(&[0x3F, 0x80], Precision::Single, Endianness::Big).unwrap_err();
        assert!(err.is_conversion());
        assert!(decode(&[], Precision::Half, Endianness::Little).is_err());
        assert!(decode(&[0; 9], Precision::Double, Endianness::Big).is_err());
    }

    fn endianness() -> impl Strategy<Value = Endianness> {
        prop_oneof![Just(Endianness::Big), Just(Endianness::Little)]
    }

    proptest! {
        #[test]
        fn prop_half_roundtrip(bits in any::<u16>(), endian in endianness()) {
            let value = f16::from_bits(bits);
            prop_assume!(!value.is_nan());
            let v = value.to_f64();
            let decoded = decode(&encode(v, Precision::Half, endian), Precision::Half, endian).unwrap();
            prop_assert_eq!(decoded.to_bits(), v.to_bits());
        }

        #[test]
        fn prop_single_roundtrip(bits in any::<u32>(), endian in endianness()) {
            let value = f32::from_bits(bits);
            prop_assume!(!value.is_nan());
            let v = f64::from(value);
            let decoded = decode(&encode(v, Precision::Single, endian), Precision::Single, endian).unwrap();
            prop_assert_eq!(decoded.to_bits(), v.to_bits());
        }

        #[test]
        fn prop_double_roundtrip(bits in any::<u64>(), endian in endianness()) {
            let v = f64::from_bits(bits);
            let bytes = encode(v, Precision::Double, endian);
            let decoded = decode(&bytes, Precision::Double, endian).unwrap();
            prop_assert_eq!(decoded.to_bits(), v.to_bits());
        }

        #[test]
        fn prop_big_is_reversed_little(v in any::<f64>()) {
            for precision in Precision::ALL {
                let mut little = encode(v, precision, Endianness::Little);
                little.reverse();
                prop_assert_eq!(encode(v, precision, Endianness::Big), little);
            }
        }
    }
}
