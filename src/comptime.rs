//! The numeric kernel, usable in `const` contexts.
//!
//! Floating point arithmetic goes through `const_soft_float`, so every
//! function here gives the same bits at compile time and at runtime. The
//! generic entry points are [`pow`](crate::pow) and [`sqrt`](crate::sqrt).

use core::cmp::Ordering;

use const_soft_float::soft_f32::SoftF32 as Sf32;
use const_soft_float::soft_f64::SoftF64 as Sf64;

/// Number of Newton-Raphson steps taken by [`sqrt`](crate::sqrt).
pub const SQRT_ITERATIONS: usize = 100;

/// `base` raised to a non-negative integer power by repeated multiplication.
/// ```
/// # use fixgebra::comptime::pow_f64;
/// const RESULT: f64 = pow_f64(2.0, 7);
/// assert_eq!(128.0, RESULT);
/// ```
pub const fn pow_f64(base: f64, exponent: u32) -> f64 {
    if exponent == 0 {
        return 1.0;
    }

    let base = Sf64(base);
    let mut acc = base;
    let mut i = 1;
    while i < exponent {
        acc = acc.mul(base);
        i += 1;
    }
    acc.to_f64()
}

/// `f32` version of [`pow_f64`].
pub const fn pow_f32(base: f32, exponent: u32) -> f32 {
    if exponent == 0 {
        return 1.0;
    }

    let base = Sf32(base);
    let mut acc = base;
    let mut i = 1;
    while i < exponent {
        acc = acc.mul(base);
        i += 1;
    }
    acc.to_f32()
}

/// Square root by a fixed number of Newton-Raphson steps, seeded with `arg / 2`.
///
/// There is no convergence test, so with the default iteration count the
/// result is only accurate for arguments within about `1e-60..1e60`. Zero
/// (of either sign) is returned as is, negative and NaN arguments give NaN,
/// and positive infinity gives positive infinity.
/// ```
/// # use fixgebra::comptime::{sqrt_f64, SQRT_ITERATIONS};
/// const ROOT: f64 = sqrt_f64(16.0, SQRT_ITERATIONS);
/// assert_eq!(4.0, ROOT);
///
/// assert!(sqrt_f64(-1.0, SQRT_ITERATIONS).is_nan());
/// ```
pub const fn sqrt_f64(arg: f64, iterations: usize) -> f64 {
    let arg = Sf64(arg);
    match arg.cmp(Sf64(0.0)) {
        None | Some(Ordering::Less) => return f64::NAN,
        Some(Ordering::Equal) => return arg.to_f64(),
        Some(Ordering::Greater) => {}
    }
    if matches!(arg.cmp(Sf64(f64::INFINITY)), Some(Ordering::Equal)) {
        return f64::INFINITY;
    }

    let two = Sf64(2.0);
    let mut x = arg.div(two);
    let mut i = 0;
    while i < iterations {
        // x - (x^2 - arg) / 2x, rearranged so x^2 never overflows
        x = x.add(arg.div(x)).div(two);
        i += 1;
    }
    x.to_f64()
}

/// `f32` version of [`sqrt_f64`].
pub const fn sqrt_f32(arg: f32, iterations: usize) -> f32 {
    let arg = Sf32(arg);
    match arg.cmp(Sf32(0.0)) {
        None | Some(Ordering::Less) => return f32::NAN,
        Some(Ordering::Equal) => return arg.to_f32(),
        Some(Ordering::Greater) => {}
    }
    if matches!(arg.cmp(Sf32(f32::INFINITY)), Some(Ordering::Equal)) {
        return f32::INFINITY;
    }

    let two = Sf32(2.0);
    let mut x = arg.div(two);
    let mut i = 0;
    while i < iterations {
        // x - (x^2 - arg) / 2x, rearranged so x^2 never overflows
        x = x.add(arg.div(x)).div(two);
        i += 1;
    }
    x.to_f32()
}
