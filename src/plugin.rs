//! Byte-level codec behind the plugin functions exported on `wasm32`.
//!
//! Operands arrive CBOR-encoded and are decoded into an [`Operand`], so every
//! function accepts reals, complex numbers and quaternions alike. Exponents
//! are little-endian `i64`, literals are UTF-8. Results are CBOR except for
//! [`abs`] (little-endian `f64`) and [`format`] (UTF-8).
//!
//! Division, inversion and negative powers use the checked API, so a zero
//! divisor is reported as an error instead of NaN components.

use anyhow::Context;
use ciborium::value::Value;
use log::debug;
use num::complex::Complex64;
use serde::Serialize;

use crate::{Operand, Quaternion};

pub trait FromWasmInput: Sized {
    fn from_wasm_input(arg: &[u8]) -> Result<Self, anyhow::Error>;
}

pub trait IntoWasmOutput {
    fn into_wasm_output(self) -> Result<Vec<u8>, anyhow::Error>;
}

impl FromWasmInput for Operand {
    fn from_wasm_input(arg: &[u8]) -> Result<Self, anyhow::Error> {
        let value: Value = ciborium::de::from_reader(arg).context("Malformed CBOR operand")?;
        let operand = Operand::try_from(&value)?;
        debug!("decoded {} operand", operand.kind());
        Ok(operand)
    }
}

impl FromWasmInput for Quaternion {
    fn from_wasm_input(arg: &[u8]) -> Result<Self, anyhow::Error> {
        Operand::from_wasm_input(arg).map(Quaternion::from)
    }
}

impl FromWasmInput for i64 {
    fn from_wasm_input(arg: &[u8]) -> Result<Self, anyhow::Error> {
        let bytes = arg.try_into().context("Expected an 8-byte integer")?;
        Ok(i64::from_le_bytes(bytes))
    }
}

impl FromWasmInput for String {
    fn from_wasm_input(arg: &[u8]) -> Result<Self, anyhow::Error> {
        let src = String::from_utf8(arg.to_vec()).context("Literal is not valid UTF-8")?;
        Ok(src.replace('\u{2212}', "-"))
    }
}

fn encode_cbor<T: Serialize>(value: &T) -> Result<Vec<u8>, anyhow::Error> {
    let mut out = Vec::new();
    ciborium::ser::into_writer(value, &mut out)?;
    Ok(out)
}

impl IntoWasmOutput for f64 {
    fn into_wasm_output(self) -> Result<Vec<u8>, anyhow::Error> {
        Ok(self.to_le_bytes().to_vec())
    }
}

impl IntoWasmOutput for String {
    fn into_wasm_output(self) -> Result<Vec<u8>, anyhow::Error> {
        Ok(self.into_bytes())
    }
}

macro_rules! impl_cbor_output {
    ($($t:ty),+$(,)?) => {
        $(impl IntoWasmOutput for $t {
            fn into_wasm_output(self) -> Result<Vec<u8>, anyhow::Error> {
                encode_cbor(&self)
            }
        })*
    };
}
impl_cbor_output!(bool, Quaternion, (Complex64, Complex64), [[Complex64; 2]; 2]);

macro_rules! define_unary_op {
    ($name:ident, |$q:ident| $body:expr) => {
        pub fn $name(arg: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
            let $q = Quaternion::from_wasm_input(arg).context("Invalid operand")?;
            $body.into_wasm_output()
        }
    };
}

macro_rules! define_binary_op {
    ($name:ident, |$p:ident, $q:ident| $body:expr) => {
        pub fn $name(arg1: &[u8], arg2: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
            let $p = Quaternion::from_wasm_input(arg1).context("Invalid first operand")?;
            let $q = Quaternion::from_wasm_input(arg2).context("Invalid second operand")?;
            $body.into_wasm_output()
        }
    };
}

define_unary_op!(neg, |q| -q);
define_unary_op!(conjugate, |q| q.conjugate());
define_unary_op!(inverse, |q| q.checked_inverse()?);
define_unary_op!(abs, |q| q.abs());
define_unary_op!(format, |q| q.to_string());
define_unary_op!(matrix, |q| q.matrix());
define_unary_op!(complex_pair, |q| q.complex_pair());

define_binary_op!(add, |p, q| p + q);
define_binary_op!(sub, |p, q| p - q);
define_binary_op!(mul, |p, q| p * q);
define_binary_op!(div, |p, q| p.checked_div(q)?);
define_binary_op!(eq, |p, q| p == q);

pub fn pow(arg1: &[u8], arg2: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
    let q = Quaternion::from_wasm_input(arg1).context("Invalid base")?;
    let n = i64::from_wasm_input(arg2).context("Invalid exponent")?;
    q.checked_pow(n)?.into_wasm_output()
}

/// Reads any operand literal and returns it as a quaternion.
pub fn parse(arg: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
    let src = String::from_wasm_input(arg)?;
    let operand: Operand = src
        .parse()
        .with_context(|| format!("Cannot read `{src}` as a quaternion"))?;
    Quaternion::from(operand).into_wasm_output()
}
