use thiserror::Error;

use crate::parse::ParseQuaternionError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuaternionError {
    #[error("Component index {index} out of range, expected 0..4")]
    IndexOutOfRange { index: usize },
    #[error("Unsupported operand type: {kind}")]
    UnsupportedOperand { kind: String },
    #[error("Division by a quaternion of zero norm")]
    ZeroDivision,
    #[error("Invalid quaternion literal")]
    Parse(#[from] ParseQuaternionError),
}
