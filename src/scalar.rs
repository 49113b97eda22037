//! The scalar element trait and the generic forms of the numeric kernel.

use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::comptime::{self, SQRT_ITERATIONS};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// The floating point element type of every container in this crate.
///
/// Implemented for [`f32`] and [`f64`]. The power and square root functions
/// forward to the `const` kernel in [`comptime`](crate::comptime).
pub trait Scalar:
    sealed::Sealed
    + Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// `self` raised to `exponent` by repeated multiplication.
    fn powu(self, exponent: u32) -> Self;

    /// Square root by `iterations` Newton-Raphson steps.
    fn sqrt_iter(self, iterations: usize) -> Self;

    /// IEEE 754 `totalOrder`.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn powu(self, exponent: u32) -> Self {
        comptime::pow_f32(self, exponent)
    }

    #[inline]
    fn sqrt_iter(self, iterations: usize) -> Self {
        comptime::sqrt_f32(self, iterations)
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn powu(self, exponent: u32) -> Self {
        comptime::pow_f64(self, exponent)
    }

    #[inline]
    fn sqrt_iter(self, iterations: usize) -> Self {
        comptime::sqrt_f64(self, iterations)
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// `base` raised to a non-negative integer power.
/// ```
/// # use fixgebra::pow;
/// assert_eq!(1.0, pow(f64::NAN, 0));
/// assert_eq!(128.0_f32, pow(2.0_f32, 7));
/// ```
#[inline]
pub fn pow<T: Scalar>(base: T, exponent: u32) -> T {
    base.powu(exponent)
}

/// Square root with the default number of Newton-Raphson steps.
/// ```
/// # use fixgebra::sqrt;
/// assert_eq!(3.0, sqrt(9.0_f64));
/// assert_eq!(0.0, sqrt(0.0_f64));
/// assert!(sqrt(-9.0_f64).is_nan());
/// ```
#[inline]
pub fn sqrt<T: Scalar>(arg: T) -> T {
    arg.sqrt_iter(SQRT_ITERATIONS)
}

/// Square root with an explicit number of Newton-Raphson steps. Zero steps
/// return the seed, `arg / 2`.
/// ```
/// # use fixgebra::sqrt_with_iterations;
/// assert_eq!(26.0, sqrt_with_iterations(100.0_f64, 1));
/// ```
#[inline]
pub fn sqrt_with_iterations<T: Scalar>(arg: T, iterations: usize) -> T {
    arg.sqrt_iter(iterations)
}
