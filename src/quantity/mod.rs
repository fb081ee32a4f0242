//! Data quantity value type
//!
//! [`DataQuantity`] wraps a non-negative number of bits. Construction and
//! arithmetic never fail: any input or result that is zero, negative or `NaN`
//! is clamped to exactly 0 bits.
//!
//! # Examples
//!
//! ```rust
//! use data_quantity::DataQuantity;
//!
//! let sent = DataQuantity::new(1000);
//! assert_eq!(sent.to_string(), "1000 bits");
//! assert_eq!(DataQuantity::new(100).describe_as("kbit"), "0.1 kbit");
//! assert_eq!(sent.describe_rate(2, "bit"), "500 bit/s");
//!
//! let total = sent + DataQuantity::new(24) - 512;
//! assert_eq!(total.bits(), 512.0);
//!
//! assert!((sent / 0).is_none());
//! ```

/// Arithmetic operator implementations
mod ops;

pub use ops::Operand;

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::conversions::constants::{DEFAULT_DESCRIBE_UNIT, DEFAULT_RATE_SECONDS};
use crate::conversions::{
    bytes_to_bits, convert_bit_to_byte, convert_byte_to_bit, convert_from_bit, convert_to_bit, DataUnit,
    Scalar,
};
use crate::error::{Error, Result};

/// An amount of digital information, stored as a bit count
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct DataQuantity {
    bits: f64,
}

impl DataQuantity {
    /// Creates a quantity of `bits` bits.
    ///
    /// Zero, negative and `NaN` inputs all give an empty quantity.
    pub fn new<N: Scalar>(bits: N) -> Self {
        let bits = bits.to_f64();
        if bits > 0.0 {
            Self { bits }
        } else {
            Self { bits: 0.0 }
        }
    }

    /// Creates a quantity from a byte count, clamped like [`DataQuantity::new`]
    pub fn from_bytes<N: Scalar>(bytes: N) -> Self {
        bytes_to_bits(bytes).map(Self::new).unwrap_or_default()
    }

    /// Creates a quantity from a magnitude in any bit or byte unit
    ///
    /// ```rust
    /// use data_quantity::DataQuantity;
    ///
    /// assert_eq!(DataQuantity::from_unit(1.5, "kB").unwrap().bits(), 12_000.0);
    /// assert_eq!(DataQuantity::from_unit(2, "Mbit").unwrap().bits(), 2e6);
    /// assert!(DataQuantity::from_unit(1, "bytes").is_err());
    /// ```
    pub fn from_unit<N: Scalar>(value: N, unit: &str) -> Result<Self> {
        let bits = match DataUnit::parse(unit)? {
            DataUnit::Bit(_) => convert_to_bit(value, unit)?,
            DataUnit::Byte(_) => convert_byte_to_bit(value, unit)?,
        };
        Ok(Self::new(bits))
    }

    /// The stored bit count
    pub fn bits(&self) -> f64 {
        self.bits
    }

    /// The stored bit count expressed in `unit`
    pub fn in_unit(&self, unit: DataUnit) -> f64 {
        unit.from_bits(self.bits)
    }

    /// Same as `describe_as("bits")`, i.e. `"<bits> bits"`
    pub fn describe(&self) -> String {
        self.describe_as(DEFAULT_DESCRIBE_UNIT)
    }

    /// Describes the quantity in `unit`, e.g. `"0.1 kbit"`.
    ///
    /// Byte units are tried before bit units. An unknown token falls back to
    /// `"<bits> bits"`.
    pub fn describe_as(&self, unit: &str) -> String {
        match self.magnitude_in(unit) {
            Some((value, unit)) => format!("{value} {unit}"),
            None => self.plain(),
        }
    }

    /// Describes the quantity spread over `seconds` as a rate, e.g. `"500 bit/s"`.
    ///
    /// Unit resolution is the same as [`DataQuantity::describe_as`]. A
    /// non-positive or `NaN` interval yields the message
    /// `"Number of seconds invalid."` instead of a rate.
    pub fn describe_rate<S: Scalar>(&self, seconds: S, unit: &str) -> String {
        let seconds = seconds.to_f64();
        if seconds <= 0.0 || seconds.is_nan() {
            return Error::invalid_duration(seconds).to_string();
        }
        match self.magnitude_in(unit) {
            Some((value, unit)) => format!("{} {unit}/s", value / seconds),
            None => self.plain(),
        }
    }

    /// Rate over the default one second interval
    pub fn describe_per_second(&self, unit: &str) -> String {
        self.describe_rate(DEFAULT_RATE_SECONDS, unit)
    }

    /// [`DataQuantity::describe_rate`] over an elapsed [`Duration`]
    pub fn describe_rate_over(&self, elapsed: Duration, unit: &str) -> String {
        self.describe_rate(elapsed.as_secs_f64(), unit)
    }

    /// Bits per second when this quantity is transferred over `seconds`
    pub fn bits_per_second<S: Scalar>(&self, seconds: S) -> Result<f64> {
        let seconds = seconds.to_f64();
        if seconds <= 0.0 || seconds.is_nan() {
            return Err(Error::invalid_duration(seconds));
        }
        Ok(self.bits / seconds)
    }

    fn magnitude_in(&self, token: &str) -> Option<(f64, DataUnit)> {
        let unit = DataUnit::parse(token).ok()?;
        trace!(token, bits = self.bits, "describing data quantity");
        let value = match unit {
            DataUnit::Byte(_) => convert_bit_to_byte(self.bits, token),
            DataUnit::Bit(_) => convert_from_bit(self.bits, token),
        };
        value.ok().map(|value| (value, unit))
    }

    fn plain(&self) -> String {
        format!("{} bits", self.bits)
    }
}

impl fmt::Display for DataQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bits <= 0.0 {
            write!(f, "0 bits")
        } else if self.bits == 1.0 {
            write!(f, "1 bit")
        } else {
            write!(f, "{} bits", self.bits)
        }
    }
}

impl From<f64> for DataQuantity {
    fn from(bits: f64) -> Self {
        Self::new(bits)
    }
}

impl From<DataQuantity> for f64 {
    fn from(quantity: DataQuantity) -> Self {
        quantity.bits
    }
}
