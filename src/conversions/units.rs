use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{BITS_PER_BYTE, SI_POWERS};
use crate::error::{Error, Result};

/// An SI multiple of the bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum BitUnit {
    /// bit
    Bit,
    /// kbit, 10^3 bits
    Kilobit,
    /// Mbit, 10^6 bits
    Megabit,
    /// Gbit, 10^9 bits
    Gigabit,
    /// Tbit, 10^12 bits
    Terabit,
    /// Pbit, 10^15 bits
    Petabit,
}

impl BitUnit {
    /// Every bit unit, smallest first
    pub const ALL: [BitUnit; 6] =
        [Self::Bit, Self::Kilobit, Self::Megabit, Self::Gigabit, Self::Terabit, Self::Petabit];

    /// The case-sensitive token naming this unit, e.g. `"kbit"`
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Bit => "bit",
            Self::Kilobit => "kbit",
            Self::Megabit => "Mbit",
            Self::Gigabit => "Gbit",
            Self::Terabit => "Tbit",
            Self::Petabit => "Pbit",
        }
    }

    /// The SI power `k` such that one unit is `10^(3k)` bits
    pub const fn exponent(self) -> usize {
        self as usize
    }

    /// Number of bits in one of this unit
    pub const fn factor(self) -> f64 {
        SI_POWERS[self.exponent()]
    }

    /// Magnitude of `bits` raw bits expressed in this unit.
    ///
    /// Plain bits pass through untouched so integral inputs stay exact.
    pub fn from_bits(self, bits: f64) -> f64 {
        match self {
            Self::Bit => bits,
            _ => bits / self.factor(),
        }
    }

    /// Raw bit count of `value` expressed in this unit
    pub fn to_bits(self, value: f64) -> f64 {
        match self {
            Self::Bit => value,
            _ => value * self.factor(),
        }
    }
}

impl fmt::Display for BitUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BitUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| Error::unknown_unit(s))
    }
}

impl TryFrom<String> for BitUnit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<BitUnit> for &'static str {
    fn from(unit: BitUnit) -> Self {
        unit.symbol()
    }
}

/// An SI multiple of the byte (1 byte = 8 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum ByteUnit {
    /// B
    Byte,
    /// kB, 10^3 bytes
    Kilobyte,
    /// MB, 10^6 bytes
    Megabyte,
    /// GB, 10^9 bytes
    Gigabyte,
    /// TB, 10^12 bytes
    Terabyte,
    /// PB, 10^15 bytes
    Petabyte,
}

impl ByteUnit {
    /// Every byte unit, smallest first
    pub const ALL: [ByteUnit; 6] = [
        Self::Byte,
        Self::Kilobyte,
        Self::Megabyte,
        Self::Gigabyte,
        Self::Terabyte,
        Self::Petabyte,
    ];

    /// The case-sensitive token naming this unit, e.g. `"kB"`
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kilobyte => "kB",
            Self::Megabyte => "MB",
            Self::Gigabyte => "GB",
            Self::Terabyte => "TB",
            Self::Petabyte => "PB",
        }
    }

    /// The SI power `k` such that one unit is `10^(3k)` bytes
    pub const fn exponent(self) -> usize {
        self as usize
    }

    /// Number of bytes in one of this unit
    pub const fn factor(self) -> f64 {
        SI_POWERS[self.exponent()]
    }

    /// Magnitude of `bits` raw bits expressed in this unit.
    ///
    /// Divides by 8 first, then by the SI factor.
    pub fn from_bits(self, bits: f64) -> f64 {
        (bits / BITS_PER_BYTE) / self.factor()
    }

    /// Raw bit count of `value` expressed in this unit
    pub fn to_bits(self, value: f64) -> f64 {
        (value * BITS_PER_BYTE) * self.factor()
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ByteUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| Error::unknown_unit(s))
    }
}

impl TryFrom<String> for ByteUnit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ByteUnit> for &'static str {
    fn from(unit: ByteUnit) -> Self {
        unit.symbol()
    }
}

/// Either a bit unit or a byte unit.
///
/// The two token sets are disjoint, so a token resolves to at most one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum DataUnit {
    Bit(BitUnit),
    Byte(ByteUnit),
}

impl DataUnit {
    /// Resolves a token, checking byte units before bit units
    pub fn parse(token: &str) -> Result<Self> {
        if let Ok(unit) = token.parse::<ByteUnit>() {
            return Ok(Self::Byte(unit));
        }
        token.parse::<BitUnit>().map(Self::Bit)
    }

    /// The token naming this unit
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Bit(unit) => unit.symbol(),
            Self::Byte(unit) => unit.symbol(),
        }
    }

    /// Magnitude of `bits` raw bits expressed in this unit
    pub fn from_bits(self, bits: f64) -> f64 {
        match self {
            Self::Bit(unit) => unit.from_bits(bits),
            Self::Byte(unit) => unit.from_bits(bits),
        }
    }

    /// Raw bit count of `value` expressed in this unit
    pub fn to_bits(self, value: f64) -> f64 {
        match self {
            Self::Bit(unit) => unit.to_bits(value),
            Self::Byte(unit) => unit.to_bits(value),
        }
    }
}

impl fmt::Display for DataUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for DataUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DataUnit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DataUnit> for &'static str {
    fn from(unit: DataUnit) -> Self {
        unit.symbol()
    }
}

impl From<BitUnit> for DataUnit {
    fn from(unit: BitUnit) -> Self {
        Self::Bit(unit)
    }
}

impl From<ByteUnit> for DataUnit {
    fn from(unit: ByteUnit) -> Self {
        Self::Byte(unit)
    }
}
