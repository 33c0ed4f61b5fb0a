mod macros;
pub mod parsing;
mod real;
pub mod traits;

pub use real::Real;
