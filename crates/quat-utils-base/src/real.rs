use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::*,
    str::FromStr,
};

use approx::{AbsDiffEq, RelativeEq};
use num::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::{forward_ref_binop, impl_product, impl_sum, parsing::*, traits::*};

// 2^63, the first float past `i64::MAX`
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// A real number that remembers whether it is an integer.
///
/// Integer arithmetic stays integral until a float takes part or the result
/// leaves the `i64` range, at which point it continues in `f64`. Division
/// always yields a float. Comparisons are numeric across both variants, so
/// `Int(17) == Float(17.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Real {
    Int(i64),
    Float(f64),
}

impl Real {
    pub const ZERO: Self = Real::Int(0);
    pub const ONE: Self = Real::Int(1);

    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Real::Int(n) => n as f64,
            Real::Float(x) => x,
        }
    }

    #[inline]
    pub fn is_int(self) -> bool {
        matches!(self, Real::Int(_))
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Real::Float(_))
    }

    #[inline]
    pub fn to_float(self) -> Self {
        Real::Float(self.to_f64())
    }

    #[inline]
    pub fn sqrt(self) -> f64 {
        self.to_f64().sqrt()
    }
}

fn cmp_int_float(n: i64, x: f64) -> Option<Ordering> {
    use Ordering::*;
    if x.is_nan() {
        None
    } else if x >= I64_END {
        Some(Less)
    } else if x < -I64_END {
        Some(Greater)
    } else {
        let whole = x.trunc();
        match n.cmp(&(whole as i64)) {
            Equal => 0.0_f64.partial_cmp(&(x - whole)),
            ordering => Some(ordering),
        }
    }
}

impl SignStrict for Real {
    fn sign_strict(&self) -> Ordering {
        match *self {
            Real::Int(n) if n < 0 => Ordering::Less,
            Real::Int(_) => Ordering::Greater,
            Real::Float(x) => x.sign_strict(),
        }
    }
}

impl ExtendedNumber for Real {
    #[inline]
    fn is_nan(&self) -> bool {
        match *self {
            Real::Int(_) => false,
            Real::Float(x) => x.is_nan(),
        }
    }

    #[inline]
    fn is_infinite(&self) -> bool {
        match *self {
            Real::Int(_) => false,
            Real::Float(x) => x.is_infinite(),
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Real::ZERO
    }
}

impl FromStr for Real {
    type Err = ParseRealError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        parse_real(src)
    }
}

macro_rules! impl_real_from_int {
    ($($t:ty),+$(,)?) => {
        $(impl From<$t> for Real {
            fn from(value: $t) -> Self {
                Real::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_real_from_float {
    ($($t:ty),+$(,)?) => {
        $(impl From<$t> for Real {
            fn from(value: $t) -> Self {
                Real::Float(f64::from(value))
            }
        })*
    };
}

impl_real_from_int!(i8, i16, i32, i64, u8, u16, u32);
impl_real_from_float!(f32, f64);

impl From<Real> for f64 {
    fn from(value: Real) -> Self {
        value.to_f64()
    }
}

impl Default for Real {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for Real {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        ExtendedNumber::is_zero(self)
    }
}

impl One for Real {
    fn one() -> Self {
        Self::ONE
    }
}

macro_rules! impl_arith_for_real {
    ($Op:ident, $op:ident, $checked:ident, $float_op:tt) => {
        impl $Op for Real {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self::Output {
                use Real::*;
                match (self, rhs) {
                    (Int(a), Int(b)) => match a.$checked(b) {
                        Some(n) => Int(n),
                        None => Float(a as f64 $float_op b as f64),
                    },
                    (a, b) => Float(a.to_f64() $float_op b.to_f64()),
                }
            }
        }

        forward_ref_binop!(impl $Op, $op for Real, Real);
    };
}

impl_arith_for_real!(Add, add, checked_add, +);
impl_arith_for_real!(Sub, sub, checked_sub, -);
impl_arith_for_real!(Mul, mul, checked_mul, *);

impl Div for Real {
    type Output = Self;

    /// True division, IEEE-754 on a zero divisor.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Real::Float(self.to_f64() / rhs.to_f64())
    }
}

forward_ref_binop!(impl Div, div for Real, Real);

impl_sum!(Real);
impl_product!(Real);

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Self::Output {
        use Real::*;
        match self {
            Int(n) => n.checked_neg().map_or(Float(-(n as f64)), Int),
            Float(x) => Float(-x),
        }
    }
}

impl Neg for &Real {
    type Output = Real;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Real::*;
        match (*self, *other) {
            (Int(a), Int(b)) => Some(a.cmp(&b)),
            (Float(a), Float(b)) => a.partial_cmp(&b),
            (Int(n), Float(x)) => cmp_int_float(n, x),
            (Float(x), Int(n)) => cmp_int_float(n, x).map(Ordering::reverse),
        }
    }
}

macro_rules! impl_real_eq_primitive {
    ($($t:ty),+$(,)?) => {
        $(
            impl PartialEq<$t> for Real {
                fn eq(&self, other: &$t) -> bool {
                    *self == Real::from(*other)
                }
            }

            impl PartialEq<Real> for $t {
                fn eq(&self, other: &Real) -> bool {
                    Real::from(*self) == *other
                }
            }
        )*
    };
}
impl_real_eq_primitive!(i32, i64, f64);

impl Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Real::Int(n) => Display::fmt(&n, f),
            Real::Float(x) => fmt_float(x, f),
        }
    }
}

/// Shortest round-trip decimal, `.0` on integral values, and a signed
/// exponent of at least two digits outside `[1e-4, 1e16)`.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }
    let repr = format!("{x:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&repr),
    }
}

impl AbsDiffEq for Real {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_f64().abs_diff_eq(&other.to_f64(), epsilon)
    }
}

impl RelativeEq for Real {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_f64()
            .relative_eq(&other.to_f64(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Real::*;

    #[test]
    fn integer_arithmetic_stays_integral() {
        assert!(matches!(Int(3) + Int(4), Int(7)));
        assert!(matches!(Int(3) - Int(4), Int(-1)));
        assert!(matches!(Int(3) * Int(4), Int(12)));
        assert!(matches!(-Int(5), Int(-5)));
    }

    #[test]
    fn floats_are_contagious() {
        assert!(matches!(Int(3) + Float(0.5), Float(x) if x == 3.5));
        assert!(matches!(Float(2.0) * Int(3), Float(x) if x == 6.0));
        assert!(matches!(Int(1) - Float(1.0), Float(x) if x == 0.0));
    }

    #[test]
    fn division_always_yields_float() {
        assert!(matches!(Int(6) / Int(3), Float(x) if x == 2.0));
        assert!(matches!(Int(1) / Int(0), Float(x) if x == f64::INFINITY));
        assert!(matches!(Int(0) / Int(0), Float(x) if x.is_nan()));
    }

    #[test]
    fn overflow_promotes_to_float() {
        assert!(matches!(Int(i64::MAX) + Int(1), Float(x) if x == I64_END));
        assert!(matches!(Int(i64::MAX) * Int(2), Float(_)));
        assert!(matches!(-Int(i64::MIN), Float(x) if x == I64_END));
    }

    #[test]
    fn zero_times_negative_float_is_negative_zero() {
        let product = Int(0) * Float(-0.5);
        assert!(product.is_float());
        assert!(product.is_sign_negative());
        assert_eq!(product, 0);
    }

    #[test]
    fn equality_is_numeric_across_variants() {
        assert_eq!(Int(17), Float(17.0));
        assert_eq!(Float(17.0), 17);
        assert_eq!(17i64, Int(17));
        assert_ne!(Int(17), Float(17.5));
        assert_ne!(Float(f64::NAN), Float(f64::NAN));
        assert_ne!(Int(i64::MAX), Float(I64_END));
    }

    #[test]
    fn ordering_is_numeric_across_variants() {
        assert!(Int(2) < Float(2.5));
        assert!(Float(-2.5) < Int(-2));
        assert!(Int(i64::MAX) < Float(f64::INFINITY));
        assert!(Int(i64::MIN) > Float(f64::NEG_INFINITY));
        assert_eq!(Int(1).partial_cmp(&Float(f64::NAN)), None);
    }

    #[test]
    fn strict_sign_separates_zeros() {
        assert!(Int(0).is_sign_positive());
        assert!(Float(0.0).is_sign_positive());
        assert!(Float(-0.0).is_sign_negative());
        assert!(!Float(f64::NAN).is_sign_negative());
        assert!(!Float(f64::NAN).is_sign_positive());
    }

    #[test]
    fn displays_integers_and_floats_distinctly() {
        assert_eq!(Int(3).to_string(), "3");
        assert_eq!(Int(-3).to_string(), "-3");
        assert_eq!(Float(3.0).to_string(), "3.0");
        assert_eq!(Float(-0.0).to_string(), "-0.0");
        assert_eq!(Float(0.1).to_string(), "0.1");
        assert_eq!(Float(0.03333333333333333).to_string(), "0.03333333333333333");
    }

    #[test]
    fn displays_float_exponents_with_sign() {
        assert_eq!(Float(1e16).to_string(), "1e+16");
        assert_eq!(Float(1.5e16).to_string(), "1.5e+16");
        assert_eq!(Float(1e-5).to_string(), "1e-05");
        assert_eq!(Float(1e100).to_string(), "1e+100");
        assert_eq!(Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Float(1e-4).to_string(), "0.0001");
    }

    #[test]
    fn displays_non_finite_floats() {
        assert_eq!(Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Float(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn sums_and_products_fold_in_order() {
        let xs = [Int(1), Int(2), Float(0.5)];
        assert!(matches!(xs.iter().sum::<Real>(), Float(x) if x == 3.5));
        assert!(matches!(xs.iter().product::<Real>(), Float(x) if x == 1.0));
        assert!(matches!([Int(2), Int(3)].into_iter().product::<Real>(), Int(6)));
    }

    #[test]
    fn parses_from_str() {
        assert!(matches!("12".parse::<Real>(), Ok(Int(12))));
        assert!(matches!("12.0".parse::<Real>(), Ok(Float(x)) if x == 12.0));
    }

    #[test]
    fn approx_compares_numerically() {
        approx::assert_abs_diff_eq!(Float(0.1 + 0.2), Float(0.3));
        approx::assert_relative_eq!(Int(3), Float(3.0000000000000004));
    }
}
