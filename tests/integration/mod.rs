mod conversions;
mod quantity;
#[cfg(feature = "serde")]
mod serialization;
