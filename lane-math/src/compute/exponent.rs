//! Decompose/compose float into/from mantissa and binary exponent
//!
//! The exponent is stored in a [`Vector`] of [`ExponentElement`], either the native `i32`
//! or the narrow `i16`. Narrow exponents are decomposed into the native width first and
//! narrowed afterward, every exponent of `f32` and `f64` fits in `i16`

#[cfg(not(feature = "libm"))]
use super::portable;
use crate::types::{ExponentElement, FloatElement};
use crate::vector::Vector;

/// Mantissa and exponent of a float, produced together by [`frexp`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed<T, E> {
    /// Mantissa in `[0.5, 1)`, with the sign of the input. Zero, infinity and NaN are
    /// stored unchanged
    pub mantissa: Vector<T>,
    /// Binary exponent, `0` for zero, infinity and NaN
    pub exponent: Vector<E>,
}

/// Decompose `x` into mantissa and binary exponent, such that
/// `x = mantissa * 2^exponent`
#[inline]
pub fn frexp<T: FloatElement, E: ExponentElement>(x: Vector<T>) -> Decomposed<T, E> {
    #[cfg(feature = "libm")]
    let (mantissa, exponent) = x.data().frexp_libm();

    #[cfg(not(feature = "libm"))]
    let (mantissa, exponent) = portable::frexp_bits(x.data());

    Decomposed {
        mantissa: Vector::new(mantissa),
        exponent: Vector::new(E::from_native(exponent)),
    }
}

/// Decompose `x`, write the exponent into `exponent` and return the mantissa. The previous
/// content of `exponent` is discarded
#[inline]
pub fn frexp_into<T: FloatElement, E: ExponentElement>(
    x: Vector<T>,
    exponent: &mut Vector<E>,
) -> Vector<T> {
    let decomposed = frexp(x);
    *exponent = decomposed.exponent;
    decomposed.mantissa
}

/// Compose `x * 2^exponent`, the inverse of [`frexp`]
#[inline]
pub fn ldexp<T: FloatElement, E: ExponentElement>(
    x: Vector<T>,
    exponent: Vector<E>,
) -> Vector<T> {
    let exponent = exponent.data().to_native();

    #[cfg(feature = "libm")]
    let value = x.data().ldexp_libm(exponent);

    #[cfg(not(feature = "libm"))]
    let value = portable::ldexp_bits(x.data(), exponent);

    Vector::new(value)
}
