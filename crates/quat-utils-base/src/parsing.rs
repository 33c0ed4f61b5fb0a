use num::complex::Complex64;
use thiserror::Error;

use crate::Real;

const COMPLEX_SYMBOL: char = 'i';
const SIGNS: [u8; 2] = [b'-', b'+'];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseRealError {
    #[error("Empty number literal")]
    Empty,
    #[error("Invalid number literal `{0}`")]
    Invalid(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseComplexError {
    #[error("Invalid complex number format")]
    InvalidFormat,
    #[error("Invalid complex component")]
    Component(#[from] ParseRealError),
}

/// Parses an integer literal into [`Real::Int`] and anything else `f64`
/// accepts (`2.5`, `1e-3`, `inf`, `nan`) into [`Real::Float`]. Integer
/// literals outside the `i64` range fall back to a float.
pub fn parse_real(src: &str) -> Result<Real, ParseRealError> {
    let src = src.trim();
    if src.is_empty() {
        return Err(ParseRealError::Empty);
    }
    if let Ok(n) = src.parse::<i64>() {
        return Ok(Real::Int(n));
    }
    src.parse::<f64>()
        .map(Real::Float)
        .map_err(|_| ParseRealError::Invalid(src.to_string()))
}

/// Parses the coefficient in front of an imaginary unit. A bare sign (or
/// nothing) stands for a unit coefficient, so `-i` is `-1i`.
pub fn parse_coefficient(src: &str) -> Result<Real, ParseRealError> {
    match src {
        "" | "+" => Ok(Real::Int(1)),
        "-" => Ok(Real::Int(-1)),
        _ => parse_real(src),
    }
}

/// Splits `src` before every `+`/`-` that starts a new term. Signs at the very
/// start and signs of a float exponent (`1e-5`) do not split.
pub fn split_terms(src: &str) -> Vec<&str> {
    let bytes = src.as_bytes();
    let mut terms = Vec::new();
    let mut start = 0;
    for idx in 1..bytes.len() {
        if SIGNS.contains(&bytes[idx]) && !matches!(bytes[idx - 1], b'e' | b'E') {
            terms.push(&src[start..idx]);
            start = idx;
        }
    }
    terms.push(&src[start..]);
    terms
}

/// Parses `a+bi`, `bi` or `a`. Whitespace is ignored.
pub fn parse_complex(src: &str) -> Result<Complex64, ParseComplexError> {
    let compact: String = src.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ParseRealError::Empty.into());
    }
    let (mut re, mut im) = (None, None);
    for term in split_terms(&compact) {
        let (slot, value) = match term.strip_suffix(COMPLEX_SYMBOL) {
            Some(coefficient) => (&mut im, parse_coefficient(coefficient)?),
            None => (&mut re, parse_real(term)?),
        };
        if slot.replace(value.to_f64()).is_some() {
            return Err(ParseComplexError::InvalidFormat);
        }
    }
    Ok(Complex64::new(re.unwrap_or(0.0), im.unwrap_or(0.0)))
}
