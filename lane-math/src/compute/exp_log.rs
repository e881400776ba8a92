//! Exponential and logarithm

#[cfg(not(feature = "native_log2"))]
use super::portable;
use crate::types::FloatElement;
use crate::vector::Vector;

/// Natural logarithm. NaN for negative input, negative infinity for zero
#[inline]
pub fn log<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().ln())
}

/// Base-10 logarithm
#[inline]
pub fn log10<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().log10())
}

/// Base-2 logarithm
///
/// With feature `native_log2`, the native primitive is used. Otherwise, it is computed as
/// `ln(x) / ln(2)`, see [`portable::log2_via_ln`](super::portable::log2_via_ln)
#[inline]
pub fn log2<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    #[cfg(feature = "native_log2")]
    let value = x.data().log2();

    #[cfg(not(feature = "native_log2"))]
    let value = portable::log2_via_ln(x.data());

    Vector::new(value)
}

/// `e^x`
#[inline]
pub fn exp<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().exp())
}
