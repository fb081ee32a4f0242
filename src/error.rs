/// Error type for data-quantity operations
///
/// Conversion functions return these instead of a bare number so that a
/// legitimate `0.0` result is never mistaken for a rejected input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Not a number")]
    NotANumber,

    #[error("Negative magnitude: {0}")]
    NegativeMagnitude(f64),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Number of seconds invalid.")]
    InvalidDuration(f64),
}

impl Error {
    pub(crate) fn negative_magnitude(value: f64) -> Self {
        Error::NegativeMagnitude(value)
    }

    pub(crate) fn unknown_unit<S: Into<String>>(unit: S) -> Self {
        Error::UnknownUnit(unit.into())
    }

    pub(crate) fn invalid_duration(seconds: f64) -> Self {
        Error::InvalidDuration(seconds)
    }
}

/// Result type for data-quantity operations
pub type Result<T> = std::result::Result<T, Error>;
