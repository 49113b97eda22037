#![cfg_attr(not(test), no_std)]

#[cfg(test)]
pub mod runtime;

mod bridge;
pub mod comptime;
mod error;
mod matrix;
mod normal;
mod scalar;
mod vector;

pub use error::{NormalizeError, ShapeError};
pub use matrix::{transpose, Matrix};
pub use normal::Normal;
pub use scalar::{pow, sqrt, sqrt_with_iterations, Scalar};
pub use vector::{cross, perpendicular, Vector};

pub use const_soft_float;
