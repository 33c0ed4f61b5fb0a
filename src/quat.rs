use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::Index,
    slice::SliceIndex,
};

use approx::{AbsDiffEq, RelativeEq};
use log::trace;
use quat_utils_base::{Real, traits::ExtendedNumber};
use serde::{Deserialize, Serialize};

use crate::error::QuaternionError;

/// Wire form of a [`Quaternion`], one named field per component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuaternionData<T> {
    pub re: T,
    pub i: T,
    pub j: T,
    pub k: T,
}

/// The quaternion `a + bi + cj + dk`.
///
/// Components are [`Real`]s, so integer inputs stay integers until a float
/// takes part in an operation. Every operation returns a new value.
///
/// Equality is exact and numeric per component. Use the [`approx`] traits for
/// tolerance-based comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuaternionData<Real>", into = "QuaternionData<Real>")]
pub struct Quaternion {
    q: [Real; 4],
}

impl Quaternion {
    pub const ZERO: Self = Self::from_components([Real::ZERO; 4]);
    pub const ONE: Self = Self::from_components([Real::ONE, Real::ZERO, Real::ZERO, Real::ZERO]);
    pub const I: Self = Self::from_components([Real::ZERO, Real::ONE, Real::ZERO, Real::ZERO]);
    pub const J: Self = Self::from_components([Real::ZERO, Real::ZERO, Real::ONE, Real::ZERO]);
    pub const K: Self = Self::from_components([Real::ZERO, Real::ZERO, Real::ZERO, Real::ONE]);

    pub fn new(
        a: impl Into<Real>,
        b: impl Into<Real>,
        c: impl Into<Real>,
        d: impl Into<Real>,
    ) -> Self {
        Self::from_components([a.into(), b.into(), c.into(), d.into()])
    }

    #[inline]
    pub const fn from_components(q: [Real; 4]) -> Self {
        Self { q }
    }

    /// `(x, 0, 0, 0)`
    pub fn from_real(x: impl Into<Real>) -> Self {
        Self::from_components([x.into(), Real::ZERO, Real::ZERO, Real::ZERO])
    }

    #[inline]
    pub fn components(&self) -> [Real; 4] {
        self.q
    }

    pub fn get(&self, index: usize) -> Result<Real, QuaternionError> {
        self.q
            .get(index)
            .copied()
            .ok_or(QuaternionError::IndexOutOfRange { index })
    }

    #[inline]
    pub fn real(&self) -> Real {
        self.q[0]
    }

    #[inline]
    pub fn imag(&self) -> Real {
        self.q[1]
    }

    #[inline]
    pub fn jmag(&self) -> Real {
        self.q[2]
    }

    #[inline]
    pub fn kmag(&self) -> Real {
        self.q[3]
    }

    #[inline]
    pub fn scalar(&self) -> Real {
        self.q[0]
    }

    #[inline]
    pub fn vector(&self) -> (Real, Real, Real) {
        (self.q[1], self.q[2], self.q[3])
    }

    /// Unary plus.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    pub fn conjugate(&self) -> Self {
        let [a, b, c, d] = self.q;
        Self::from_components([a, -b, -c, -d])
    }

    /// Sum of the squared components.
    pub fn norm_sqr(&self) -> Real {
        let [a, b, c, d] = self.q;
        a * a + b * b + c * c + d * d
    }

    /// Euclidean norm.
    pub fn abs(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// `conjugate / |q|²`, component by component. A zero quaternion yields
    /// NaN components; see [`Quaternion::checked_inverse`].
    pub fn inverse(&self) -> Self {
        let norm = self.abs();
        let v = Real::Float(norm * norm);
        let [a, b, c, d] = self.conjugate().q;
        Self::from_components([a / v, b / v, c / v, d / v])
    }

    /// Fails only on the zero quaternion. A non-zero quaternion whose squared
    /// norm underflows still inverts, to infinite components.
    pub fn checked_inverse(&self) -> Result<Self, QuaternionError> {
        if self.q.iter().all(ExtendedNumber::is_zero) {
            return Err(QuaternionError::ZeroDivision);
        }
        Ok(self.inverse())
    }

    pub fn checked_div(self, rhs: impl Into<Quaternion>) -> Result<Self, QuaternionError> {
        Ok(self * rhs.into().checked_inverse()?)
    }

    /// Integer power.
    ///
    /// `q^n` is `q * q^(n-1)` for positive `n` and `q⁻¹ * q^(n+1)` for negative
    /// `n`; `q^0` is the integer identity `(1, 0, 0, 0)`.
    pub fn powi(self, n: i64) -> Self {
        trace!("raising {self} to the power {n}");
        match n.cmp(&0) {
            Ordering::Equal => Self::ONE,
            Ordering::Greater => nest_left(self, n.unsigned_abs()),
            Ordering::Less => nest_left(self.inverse(), n.unsigned_abs()),
        }
    }

    /// [`Quaternion::powi`] that fails on negative powers of a zero quaternion.
    pub fn checked_pow(self, n: i64) -> Result<Self, QuaternionError> {
        if n < 0 {
            Ok(nest_left(self.checked_inverse()?, n.unsigned_abs()))
        } else {
            Ok(self.powi(n))
        }
    }
}

// base * (base * (... * base)), `times` factors
fn nest_left(base: Quaternion, times: u64) -> Quaternion {
    (1..times).fold(base, |acc, _| base * acc)
}

impl From<QuaternionData<Real>> for Quaternion {
    fn from(value: QuaternionData<Real>) -> Self {
        let QuaternionData { re, i, j, k } = value;
        Self::from_components([re, i, j, k])
    }
}

impl From<Quaternion> for QuaternionData<Real> {
    fn from(value: Quaternion) -> Self {
        let [re, i, j, k] = value.q;
        QuaternionData { re, i, j, k }
    }
}

impl From<quaternion::Quaternion<f64>> for Quaternion {
    fn from(value: quaternion::Quaternion<f64>) -> Self {
        let (re, [i, j, k]) = value;
        Self::new(re, i, j, k)
    }
}

impl From<Quaternion> for quaternion::Quaternion<f64> {
    fn from(value: Quaternion) -> Self {
        let [re, i, j, k] = value.q.map(Real::to_f64);
        (re, [i, j, k])
    }
}

macro_rules! impl_quaternion_from_real {
    ($($t:ty),+$(,)?) => {
        $(impl From<$t> for Quaternion {
            fn from(value: $t) -> Self {
                Self::from_real(value)
            }
        })*
    };
}
impl_quaternion_from_real!(i32, i64, f64, Real);

impl<I> Index<I> for Quaternion
where
    I: SliceIndex<[Real]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.q[index]
    }
}

// `+` on non-negative values only, so `-0.0` gets one and NaN does not
fn explicit_sign(x: Real) -> &'static str {
    if x >= Real::ZERO { "+" } else { "" }
}

impl Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.q;
        write!(
            f,
            "({a}{}{b}i{}{c}j{}{d}k)",
            explicit_sign(b),
            explicit_sign(c),
            explicit_sign(d)
        )
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.q
            .iter()
            .zip(&other.q)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.q
            .iter()
            .zip(&other.q)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
