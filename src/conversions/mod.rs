//! Bit and byte conversion functions
//!
//! Free functions over plain numbers that validate unit tokens and move
//! magnitudes between raw bits, bytes and the SI multiples of each.
//!
//! Every function re-checks its own inputs. A rejected input yields `Err`,
//! never a number, so a legitimate `0.0` cannot be confused with a failure:
//!
//! - a `NaN` magnitude fails with [`Error::NotANumber`]
//! - an unknown unit token fails with [`Error::UnknownUnit`]
//! - a zero magnitude converts to `0.0` in every unit
//! - a negative magnitude fails with [`Error::NegativeMagnitude`], except in
//!   [`bits_to_bytes`] and [`bytes_to_bits`] which clamp it to `0.0`
//!
//! # Examples
//!
//! ```rust
//! use data_quantity::conversions::{bits_to_bytes, convert_bit_to_byte, convert_from_bit};
//!
//! assert_eq!(bits_to_bytes(1000).unwrap(), 125.0);
//! assert_eq!(convert_from_bit(10_u64.pow(15), "Pbit").unwrap(), 1.0);
//! assert_eq!(convert_bit_to_byte(1000, "GB").unwrap(), 1.25e-7);
//! assert!(convert_from_bit(-1, "kbit").is_err());
//! ```

/// Conversion constants
pub mod constants;

/// Typed bit and byte units
pub mod units;

pub use units::*;

use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use constants::BITS_PER_BYTE;

mod private {
    pub trait Sealed {}
}

/// A primitive number accepted as a magnitude.
///
/// Implemented for the integer and floating point types a caller is likely to
/// hold a bit or byte count in. Values are widened to `f64`.
pub trait Scalar: Copy + private::Sealed {
    /// Widens the value to `f64`
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Scalar for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(f64, f32, i32, i64, u32, u64);

fn numeric<N: Scalar>(value: N) -> Result<f64> {
    let value = value.to_f64();
    if value.is_nan() {
        debug!("rejected NaN magnitude");
        return Err(Error::NotANumber);
    }
    Ok(value)
}

fn convert_with<N, U>(value: N, token: &str, convert: impl FnOnce(U, f64) -> f64) -> Result<f64>
where
    N: Scalar,
    U: FromStr<Err = Error>,
{
    let value = numeric(value)?;
    let unit = token.parse::<U>().inspect_err(|_| debug!(token, "rejected unknown unit"))?;

    if value == 0.0 {
        return Ok(0.0);
    }
    if value < 0.0 {
        debug!(value, token, "rejected negative magnitude");
        return Err(Error::negative_magnitude(value));
    }
    Ok(convert(unit, value))
}

/// Converts bits to bytes.
///
/// Zero and negative inputs give `0.0`.
pub fn bits_to_bytes<N: Scalar>(bits: N) -> Result<f64> {
    let bits = numeric(bits)?;
    if bits <= 0.0 {
        return Ok(0.0);
    }
    Ok(bits / BITS_PER_BYTE)
}

/// Converts bytes to bits.
///
/// Zero and negative inputs give `0.0`.
pub fn bytes_to_bits<N: Scalar>(bytes: N) -> Result<f64> {
    let bytes = numeric(bytes)?;
    if bytes <= 0.0 {
        return Ok(0.0);
    }
    Ok(bytes * BITS_PER_BYTE)
}

/// Returns true if `token` is exactly one of `bit`, `kbit`, `Mbit`, `Gbit`, `Tbit`, `Pbit`
pub fn is_bit_unit_valid(token: &str) -> bool {
    token.parse::<BitUnit>().is_ok()
}

/// Returns true if `token` is exactly one of `B`, `kB`, `MB`, `GB`, `TB`, `PB`
pub fn is_byte_unit_valid(token: &str) -> bool {
    token.parse::<ByteUnit>().is_ok()
}

/// Expresses a raw bit count in the bit unit named by `unit`
///
/// ```rust
/// use data_quantity::conversions::convert_from_bit;
///
/// assert_eq!(convert_from_bit(100, "kbit").unwrap(), 0.1);
/// assert_eq!(convert_from_bit(100, "bit").unwrap(), 100.0);
/// assert!(convert_from_bit(100, "kB").is_err());
/// ```
pub fn convert_from_bit<N: Scalar>(bits: N, unit: &str) -> Result<f64> {
    convert_with(bits, unit, BitUnit::from_bits)
}

/// Converts a magnitude in the bit unit named by `unit` back to raw bits
pub fn convert_to_bit<N: Scalar>(value: N, unit: &str) -> Result<f64> {
    convert_with(value, unit, BitUnit::to_bits)
}

/// Converts a magnitude in the byte unit named by `unit` to raw bits
pub fn convert_byte_to_bit<N: Scalar>(bytes: N, unit: &str) -> Result<f64> {
    convert_with(bytes, unit, ByteUnit::to_bits)
}

/// Expresses a raw bit count in the byte unit named by `unit`
pub fn convert_bit_to_byte<N: Scalar>(bits: N, unit: &str) -> Result<f64> {
    convert_with(bits, unit, ByteUnit::from_bits)
}
