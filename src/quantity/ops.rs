use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use tracing::warn;

use super::DataQuantity;
use crate::conversions::Scalar;

/// Anything a [`DataQuantity`] can be combined with: another quantity or a plain number
pub trait Operand: Copy {
    /// The operand as a bit count; plain numbers are taken as bits
    fn operand_bits(self) -> f64;
}

impl Operand for DataQuantity {
    fn operand_bits(self) -> f64 {
        self.bits
    }
}

impl<N: Scalar> Operand for N {
    fn operand_bits(self) -> f64 {
        self.to_f64()
    }
}

impl DataQuantity {
    /// Divides by a positive divisor; zero, negative and `NaN` divisors give `None`
    pub fn checked_div<D: Operand>(self, divisor: D) -> Option<Self> {
        let divisor = divisor.operand_bits();
        if divisor > 0.0 {
            Some(Self::new(self.bits / divisor))
        } else {
            None
        }
    }

    /// Floor division, `floor(self / divisor)`.
    ///
    /// Negative results clamp to 0 bits like every other operation.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero. Unlike [`DataQuantity::checked_div`] there
    /// is no guard.
    pub fn div_floor<D: Operand>(self, divisor: D) -> Self {
        let divisor = divisor.operand_bits();
        if divisor == 0.0 {
            warn!(bits = self.bits, "floor division of a data quantity by zero");
            panic!("attempt to floor-divide a data quantity by zero");
        }
        Self::new((self.bits / divisor).floor())
    }
}

impl Add for DataQuantity {
    type Output = DataQuantity;

    fn add(self, rhs: DataQuantity) -> Self::Output {
        DataQuantity::new(self.bits + rhs.bits)
    }
}

impl Sub for DataQuantity {
    type Output = DataQuantity;

    fn sub(self, rhs: DataQuantity) -> Self::Output {
        DataQuantity::new(self.bits - rhs.bits)
    }
}

impl Mul for DataQuantity {
    type Output = DataQuantity;

    fn mul(self, rhs: DataQuantity) -> Self::Output {
        DataQuantity::new(self.bits * rhs.bits)
    }
}

impl Div for DataQuantity {
    type Output = Option<DataQuantity>;

    fn div(self, rhs: DataQuantity) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl Sum for DataQuantity {
    fn sum<I: Iterator<Item = DataQuantity>>(iter: I) -> Self {
        iter.fold(DataQuantity::default(), |total, quantity| total + quantity)
    }
}

// Scalars on either side. One integer and one float type only, so bare
// literals like `q + 1` infer. Reflected subtraction and division compute
// `lhs - rhs` and `lhs / rhs`, not the forward operation.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for DataQuantity {
                type Output = DataQuantity;

                fn add(self, rhs: $t) -> Self::Output {
                    DataQuantity::new(self.bits + rhs.to_f64())
                }
            }

            impl Add<DataQuantity> for $t {
                type Output = DataQuantity;

                fn add(self, rhs: DataQuantity) -> Self::Output {
                    rhs + self
                }
            }

            impl Sub<$t> for DataQuantity {
                type Output = DataQuantity;

                fn sub(self, rhs: $t) -> Self::Output {
                    DataQuantity::new(self.bits - rhs.to_f64())
                }
            }

            impl Sub<DataQuantity> for $t {
                type Output = DataQuantity;

                fn sub(self, rhs: DataQuantity) -> Self::Output {
                    DataQuantity::new(self.to_f64() - rhs.bits)
                }
            }

            impl Mul<$t> for DataQuantity {
                type Output = DataQuantity;

                fn mul(self, rhs: $t) -> Self::Output {
                    DataQuantity::new(self.bits * rhs.to_f64())
                }
            }

            impl Mul<DataQuantity> for $t {
                type Output = DataQuantity;

                fn mul(self, rhs: DataQuantity) -> Self::Output {
                    rhs * self
                }
            }

            impl Div<$t> for DataQuantity {
                type Output = Option<DataQuantity>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.checked_div(rhs)
                }
            }

            impl Div<DataQuantity> for $t {
                type Output = Option<DataQuantity>;

                fn div(self, rhs: DataQuantity) -> Self::Output {
                    DataQuantity::new(self).checked_div(rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(f64, i64);
