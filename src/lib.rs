//! Data Quantity - bit and byte quantities with SI unit conversion
//!
//! This crate converts amounts of digital information between bits, bytes and
//! their SI multiples, and provides a [`DataQuantity`] value type that wraps a
//! non-negative bit count with arithmetic and human-readable rendering.
//!
//! # Features
//!
//! - **Unit validation**: exact, case-sensitive bit units (`bit` through `Pbit`)
//!   and byte units (`B` through `PB`)
//! - **Conversions**: free functions between raw bits, bytes and any SI unit
//! - **Value type**: `+`, `-`, `*`, `/` and floor division on quantities and
//!   plain numbers, clamped so a quantity is never negative
//! - **Rendering**: `"1000 bits"`, `"0.1 kbit"`, `"500 bit/s"`
//! - **serde** (optional feature): quantities serialize as their bit count,
//!   units as their token
//!
//! # Examples
//!
//! ```rust
//! use data_quantity::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let bits = convert_byte_to_bit(1.5, "kB")?;
//!     assert_eq!(bits, 12_000.0);
//!
//!     let transferred = DataQuantity::new(bits) + DataQuantity::from_bytes(500);
//!     assert_eq!(transferred.describe_as("kB"), "2 kB");
//!     assert_eq!(transferred.describe_rate(4, "kbit"), "4 kbit/s");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Conversion functions return [`Result`], so a legitimate zero is never
//! confused with a rejected input:
//!
//! ```rust
//! use data_quantity::{convert_from_bit, Error};
//!
//! assert_eq!(convert_from_bit(0, "kbit"), Ok(0.0));
//! assert_eq!(convert_from_bit(-1, "kbit"), Err(Error::NegativeMagnitude(-1.0)));
//! assert_eq!(convert_from_bit(1, "kbits"), Err(Error::UnknownUnit("kbits".to_string())));
//! ```
//!
//! The value type never fails: negative results clamp to zero, and true
//! division by a non-positive divisor yields `None`.
//!
//! # Logging
//!
//! Rejected conversions are reported through [`tracing`] at `debug` level.
//! The crate never installs a subscriber.

#![doc(html_root_url = "https://docs.rs/data-quantity/0.1.0")]

pub mod conversions;
pub mod error;
pub mod quantity;

pub use conversions::{
    bits_to_bytes, bytes_to_bits, convert_bit_to_byte, convert_byte_to_bit, convert_from_bit, convert_to_bit,
    is_bit_unit_valid, is_byte_unit_valid, BitUnit, ByteUnit, DataUnit, Scalar,
};
pub use error::{Error, Result};
pub use quantity::{DataQuantity, Operand};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::conversions::{
        bits_to_bytes, bytes_to_bits, convert_bit_to_byte, convert_byte_to_bit, convert_from_bit, convert_to_bit,
        is_bit_unit_valid, is_byte_unit_valid, BitUnit, ByteUnit, DataUnit,
    };
    pub use crate::error::{Error, Result};
    pub use crate::quantity::DataQuantity;
}
