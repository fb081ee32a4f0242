/// Number of bits in one byte
pub const BITS_PER_BYTE: f64 = 8.0;

/// `10^(3k)` for k = 0..=5, indexed by a unit's exponent.
///
/// Literals rather than `powi` so every factor is exact.
pub const SI_POWERS: [f64; 6] = [1.0, 1e3, 1e6, 1e9, 1e12, 1e15];

/// Unit token used when a quantity is described without an explicit unit.
///
/// Not a valid bit or byte unit, so it selects the plain `"<bits> bits"` form.
pub const DEFAULT_DESCRIBE_UNIT: &str = "bits";

/// Interval used for rate descriptions when none is given (seconds)
pub const DEFAULT_RATE_SECONDS: f64 = 1.0;
