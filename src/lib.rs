//! Quaternions with integer-preserving components.
//!
//! A [`Quaternion`] holds four [`Real`] components, each an `i64` or an `f64`.
//! Integer arithmetic stays integral until a float enters or a division is
//! performed, so `(1+2i+3j+4k)` and `(1.0+2.0i+3.0j+4.0k)` are equal but print
//! differently. Reals and [`Complex64`] values mix freely with quaternions in
//! every arithmetic operator.
//!
//! When built for `wasm32` the crate exports the functions of [`plugin`] as
//! a Typst plugin.

mod complex;
mod error;
mod operand;
mod ops;
mod parse;
pub mod plugin;
mod quat;

pub use error::QuaternionError;
pub use num::complex::Complex64;
pub use operand::Operand;
pub use parse::ParseQuaternionError;
pub use quat::{Quaternion, QuaternionData};
pub use quat_utils_base::{
    Real,
    parsing::{ParseComplexError, ParseRealError, parse_complex},
    traits::{ExtendedNumber, SignStrict},
};

#[cfg(target_arch = "wasm32")]
mod exports {
    use paste::paste;
    use wasm_minimal_protocol::*;

    use crate::plugin;

    initiate_protocol!();

    macro_rules! export_unary {
        ($($op:ident),+$(,)?) => {
            $(paste! {
                #[wasm_func]
                fn [<quaternion_ $op>](arg: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
                    plugin::$op(arg)
                }
            })*
        };
    }

    macro_rules! export_binary {
        ($($op:ident),+$(,)?) => {
            $(paste! {
                #[wasm_func]
                fn [<quaternion_ $op>](arg1: &[u8], arg2: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
                    plugin::$op(arg1, arg2)
                }
            })*
        };
    }

    export_unary!(neg, conjugate, inverse, abs, format, parse, matrix, complex_pair);
    export_binary!(add, sub, mul, div, pow, eq);
}
