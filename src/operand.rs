use std::str::FromStr;

use ciborium::value::Value;
use log::warn;
use num::complex::Complex64;
use quat_utils_base::{
    Real,
    parsing::{parse_complex, parse_real},
};

use crate::{Quaternion, QuaternionError};

/// The kinds of value a quaternion operation accepts, for inputs whose type is
/// only known at runtime. Converting into [`Quaternion`] applies the coercion
/// used by every binary operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Real(Real),
    Complex(Complex64),
    Quaternion(Quaternion),
}

impl Operand {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Real(Real::Int(_)) => "integer",
            Operand::Real(Real::Float(_)) => "float",
            Operand::Complex(_) => "complex",
            Operand::Quaternion(_) => "quaternion",
        }
    }
}

impl From<Operand> for Quaternion {
    fn from(value: Operand) -> Self {
        match value {
            Operand::Real(x) => Quaternion::from_real(x),
            Operand::Complex(z) => Quaternion::from(z),
            Operand::Quaternion(q) => q,
        }
    }
}

macro_rules! impl_operand_from {
    ($variant:ident: $($t:ty),+$(,)?) => {
        $(impl From<$t> for Operand {
            fn from(value: $t) -> Self {
                Operand::$variant(value.into())
            }
        })*
    };
}
impl_operand_from!(Real: i32, i64, f64, Real);
impl_operand_from!(Complex: Complex64);
impl_operand_from!(Quaternion: Quaternion);

fn unsupported(kind: impl Into<String>) -> QuaternionError {
    let kind = kind.into();
    warn!("rejecting operand of unsupported type {kind}");
    QuaternionError::UnsupportedOperand { kind }
}

/// Reads a real, complex (`1+2i`) or quaternion (`(1+2i+3j+4k)`) literal.
impl FromStr for Operand {
    type Err = QuaternionError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.trim();
        if src.starts_with('(') {
            return Ok(Operand::Quaternion(src.parse()?));
        }
        if let Ok(x) = parse_real(src) {
            return Ok(Operand::Real(x));
        }
        if let Ok(z) = parse_complex(src) {
            return Ok(Operand::Complex(z));
        }
        src.parse()
            .map(Operand::Quaternion)
            .map_err(|_| unsupported(format!("text `{src}`")))
    }
}

fn real_from_value(value: &Value) -> Result<Real, QuaternionError> {
    match value {
        Value::Integer(n) => Ok(match i64::try_from(*n) {
            Ok(n) => Real::Int(n),
            Err(_) => Real::Float(i128::from(*n) as f64),
        }),
        Value::Float(x) => Ok(Real::Float(*x)),
        other => Err(unsupported(value_kind(other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Text(_) => "text",
        Value::Bytes(_) => "bytes",
        Value::Bool(_) => "bool",
        Value::Null => "null",
        Value::Tag(..) => "tag",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        _ => "unknown",
    }
}

fn operand_from_map(entries: &[(Value, Value)]) -> Result<Operand, QuaternionError> {
    // re, i, j, k, im
    let mut fields: [Option<Real>; 5] = [None; 5];
    for (key, value) in entries {
        let slot = match key.as_text() {
            Some("re") => 0,
            Some("i") => 1,
            Some("j") => 2,
            Some("k") => 3,
            Some("im") => 4,
            _ => return Err(unsupported("map with unknown keys")),
        };
        fields[slot] = Some(real_from_value(value)?);
    }
    let zero = |x: Option<Real>| x.unwrap_or(Real::ZERO);
    match fields {
        [None, None, None, None, None] => Err(unsupported("empty map")),
        [Some(re), None, None, None, None] => Ok(Operand::Real(re)),
        [re, None, None, None, Some(im)] => Ok(Operand::Complex(Complex64::new(
            zero(re).to_f64(),
            im.to_f64(),
        ))),
        [re, i, j, k, None] => Ok(Operand::Quaternion(Quaternion::from_components(
            [re, i, j, k].map(zero),
        ))),
        _ => Err(unsupported("map mixing complex and quaternion keys")),
    }
}

/// Decodes a CBOR value: numbers are reals, `{re, im}` maps and `[re, im]`
/// arrays are complex numbers, `{re, i, j, k}` maps and four-element arrays
/// are quaternions, and text is parsed as a literal.
impl TryFrom<&Value> for Operand {
    type Error = QuaternionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(_) | Value::Float(_) => real_from_value(value).map(Operand::Real),
            Value::Text(text) => text.parse(),
            Value::Map(entries) => operand_from_map(entries),
            Value::Array(items) if items.len() == 2 => {
                let re = real_from_value(&items[0])?;
                let im = real_from_value(&items[1])?;
                Ok(Operand::Complex(Complex64::new(re.to_f64(), im.to_f64())))
            }
            Value::Array(items) if items.len() == 4 => {
                let mut components = [Real::ZERO; 4];
                for (component, item) in components.iter_mut().zip(items) {
                    *component = real_from_value(item)?;
                }
                Ok(Operand::Quaternion(Quaternion::from_components(components)))
            }
            Value::Array(items) => Err(unsupported(format!("array of length {}", items.len()))),
            other => Err(unsupported(value_kind(other))),
        }
    }
}
