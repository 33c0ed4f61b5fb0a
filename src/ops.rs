use std::ops::*;

use num::complex::Complex64;
use num::traits::{Inv, One, Pow, Zero};
use quat_utils_base::{Real, forward_ref_binop, impl_product, impl_sum};

use crate::Quaternion;

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let [a1, b1, c1, d1] = self.components();
        let [a2, b2, c2, d2] = rhs.components();
        Self::from_components([a1 + a2, b1 + b2, c1 + c2, d1 + d2])
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let [a1, b1, c1, d1] = self.components();
        let [a2, b2, c2, d2] = rhs.components();
        Self::from_components([a1 - a2, b1 - b2, c1 - c2, d1 - d2])
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product, `self` on the left.
    fn mul(self, rhs: Self) -> Self::Output {
        let [a1, b1, c1, d1] = self.components();
        let [a2, b2, c2, d2] = rhs.components();
        Self::from_components([
            a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
            a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
            a1 * c2 + c1 * a2 - b1 * d2 + d1 * b2,
            a1 * d2 + d1 * a2 + b1 * c2 - c1 * b2,
        ])
    }
}

impl Div for Quaternion {
    type Output = Self;

    /// `self * rhs⁻¹`
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse()
    }
}

forward_ref_binop!(impl Add, add for Quaternion, Quaternion);
forward_ref_binop!(impl Sub, sub for Quaternion, Quaternion);
forward_ref_binop!(impl Mul, mul for Quaternion, Quaternion);
forward_ref_binop!(impl Div, div for Quaternion, Quaternion);

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_components(self.components().map(Neg::neg))
    }
}

impl Neg for &Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Self::Output {
        -*self
    }
}

// Scalars on either side are coerced with `Quaternion::from` and then take
// their place in the operation, so `x - q` is `Quaternion::from(x) - q`.
macro_rules! impl_scalar_ops {
    (@op $t:ty, $Op:ident, $op:ident) => {
        impl $Op<$t> for Quaternion {
            type Output = Quaternion;

            #[inline]
            fn $op(self, rhs: $t) -> Quaternion {
                $Op::$op(self, Quaternion::from(rhs))
            }
        }

        impl $Op<$t> for &Quaternion {
            type Output = Quaternion;

            #[inline]
            fn $op(self, rhs: $t) -> Quaternion {
                $Op::$op(*self, Quaternion::from(rhs))
            }
        }

        impl $Op<Quaternion> for $t {
            type Output = Quaternion;

            #[inline]
            fn $op(self, rhs: Quaternion) -> Quaternion {
                $Op::$op(Quaternion::from(self), rhs)
            }
        }

        impl $Op<&Quaternion> for $t {
            type Output = Quaternion;

            #[inline]
            fn $op(self, rhs: &Quaternion) -> Quaternion {
                $Op::$op(Quaternion::from(self), *rhs)
            }
        }
    };
    ($($t:ty),+$(,)?) => {
        $(
            impl_scalar_ops!(@op $t, Add, add);
            impl_scalar_ops!(@op $t, Sub, sub);
            impl_scalar_ops!(@op $t, Mul, mul);
            impl_scalar_ops!(@op $t, Div, div);

            impl PartialEq<$t> for Quaternion {
                fn eq(&self, other: &$t) -> bool {
                    *self == Quaternion::from(*other)
                }
            }

            impl PartialEq<Quaternion> for $t {
                fn eq(&self, other: &Quaternion) -> bool {
                    Quaternion::from(*self) == *other
                }
            }
        )*
    };
}

impl_scalar_ops!(i64, f64, Real, Complex64);

macro_rules! impl_pow_for_quaternion {
    ($($t:ty),+$(,)?) => {
        $(
            impl Pow<$t> for Quaternion {
                type Output = Self;

                fn pow(self, exp: $t) -> Self {
                    self.powi(i64::from(exp))
                }
            }

            impl Pow<$t> for &Quaternion {
                type Output = Quaternion;

                fn pow(self, exp: $t) -> Quaternion {
                    self.powi(i64::from(exp))
                }
            }
        )*
    };
}

impl_pow_for_quaternion!(i32, i64, u32);

impl Inv for Quaternion {
    type Output = Self;

    fn inv(self) -> Self {
        self.inverse()
    }
}

impl Zero for Quaternion {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl One for Quaternion {
    fn one() -> Self {
        Self::ONE
    }
}

impl_sum!(Quaternion);
impl_product!(Quaternion);
