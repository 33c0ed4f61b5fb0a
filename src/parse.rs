use std::str::FromStr;

use quat_utils_base::{
    Real,
    parsing::{ParseRealError, parse_coefficient, parse_real, split_terms},
};
use thiserror::Error;

use crate::Quaternion;

const UNITS: [&str; 4] = ["real", "i", "j", "k"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseQuaternionError {
    #[error("Empty quaternion literal")]
    Empty,
    #[error("Unbalanced parentheses")]
    Unbalanced,
    #[error("The {0} component appears more than once")]
    DuplicateComponent(&'static str),
    #[error("Invalid quaternion component")]
    Component(#[from] ParseRealError),
}

/// Parses the format written by `Display`, e.g. `(1+2.5i-3j+4k)`.
///
/// Parentheses are optional, whitespace is ignored, terms may come in any
/// order and missing terms are integer zeros.
impl FromStr for Quaternion {
    type Err = ParseQuaternionError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.trim();
        let body = match src.strip_prefix('(') {
            Some(rest) => rest
                .strip_suffix(')')
                .ok_or(ParseQuaternionError::Unbalanced)?,
            None if src.ends_with(')') => return Err(ParseQuaternionError::Unbalanced),
            None => src,
        };
        let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(ParseQuaternionError::Empty);
        }

        let mut components: [Option<Real>; 4] = [None; 4];
        for term in split_terms(&compact) {
            let (slot, value) = match term.char_indices().last() {
                Some((idx, unit @ ('i' | 'j' | 'k'))) => {
                    let slot = (unit as usize) - ('i' as usize) + 1;
                    (slot, parse_coefficient(&term[..idx])?)
                }
                _ => (0, parse_real(term)?),
            };
            if components[slot].replace(value).is_some() {
                return Err(ParseQuaternionError::DuplicateComponent(UNITS[slot]));
            }
        }
        Ok(Quaternion::from_components(
            components.map(|c| c.unwrap_or(Real::ZERO)),
        ))
    }
}
