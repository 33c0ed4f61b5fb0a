/// Implements `op(&a, b)`, `op(a, &b)` and `op(&a, &b)` for a `Copy` type in
/// terms of the by-value implementation.
#[macro_export]
macro_rules! forward_ref_binop {
    (impl $Op:ident, $op:ident for $t:ty, $u:ty) => {
        impl ::core::ops::$Op<$u> for &$t {
            type Output = <$t as ::core::ops::$Op<$u>>::Output;

            #[inline]
            fn $op(self, rhs: $u) -> Self::Output {
                ::core::ops::$Op::$op(*self, rhs)
            }
        }

        impl ::core::ops::$Op<&$u> for $t {
            type Output = <$t as ::core::ops::$Op<$u>>::Output;

            #[inline]
            fn $op(self, rhs: &$u) -> Self::Output {
                ::core::ops::$Op::$op(self, *rhs)
            }
        }

        impl ::core::ops::$Op<&$u> for &$t {
            type Output = <$t as ::core::ops::$Op<$u>>::Output;

            #[inline]
            fn $op(self, rhs: &$u) -> Self::Output {
                ::core::ops::$Op::$op(*self, *rhs)
            }
        }
    };
}

/// Left-to-right sum starting from zero.
#[macro_export]
macro_rules! impl_sum {
    ($t:ty) => {
        impl ::core::iter::Sum for $t {
            fn sum<I>(xs: I) -> $t
            where
                I: Iterator<Item = $t>,
            {
                xs.fold(<$t as ::num::Zero>::zero(), |acc, x| acc + x)
            }
        }

        impl<'a> ::core::iter::Sum<&'a $t> for $t {
            fn sum<I>(xs: I) -> $t
            where
                I: Iterator<Item = &'a $t>,
            {
                xs.fold(<$t as ::num::Zero>::zero(), |acc, x| acc + *x)
            }
        }
    };
}

/// Left-to-right product starting from one. The fold keeps operand order, so
/// it is also correct for non-commutative multiplication.
#[macro_export]
macro_rules! impl_product {
    ($t:ty) => {
        impl ::core::iter::Product for $t {
            fn product<I>(xs: I) -> $t
            where
                I: Iterator<Item = $t>,
            {
                xs.fold(<$t as ::num::One>::one(), |acc, x| acc * x)
            }
        }

        impl<'a> ::core::iter::Product<&'a $t> for $t {
            fn product<I>(xs: I) -> $t
            where
                I: Iterator<Item = &'a $t>,
            {
                xs.fold(<$t as ::num::One>::one(), |acc, x| acc * *x)
            }
        }
    };
}
