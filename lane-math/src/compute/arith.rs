//! Arithmetic on FloatElement
//!
//! `min` and `max` follow IEEE 754 `minNum`/`maxNum`: if exactly one of the operands is
//! NaN, the other one is returned. The result is NaN only if both of them are NaN. They
//! come in three shapes like the arithmetic of the array: `vector op vector`,
//! `vector op scalar` and `scalar op vector`

use crate::types::FloatElement;
use crate::vector::Vector;

/// Minimum of two vectors
#[inline]
pub fn min<T: FloatElement>(lhs: Vector<T>, rhs: Vector<T>) -> Vector<T> {
    Vector::new(lhs.data().min(rhs.data()))
}

/// Minimum of a vector and a scalar
#[inline]
pub fn min_scalar<T: FloatElement>(lhs: Vector<T>, rhs: T) -> Vector<T> {
    Vector::new(lhs.data().min(rhs))
}

/// Minimum of a scalar and a vector
#[inline]
pub fn scalar_min<T: FloatElement>(lhs: T, rhs: Vector<T>) -> Vector<T> {
    Vector::new(lhs.min(rhs.data()))
}

/// Maximum of two vectors
#[inline]
pub fn max<T: FloatElement>(lhs: Vector<T>, rhs: Vector<T>) -> Vector<T> {
    Vector::new(lhs.data().max(rhs.data()))
}

/// Maximum of a vector and a scalar
#[inline]
pub fn max_scalar<T: FloatElement>(lhs: Vector<T>, rhs: T) -> Vector<T> {
    Vector::new(lhs.data().max(rhs))
}

/// Maximum of a scalar and a vector
#[inline]
pub fn scalar_max<T: FloatElement>(lhs: T, rhs: Vector<T>) -> Vector<T> {
    Vector::new(lhs.max(rhs.data()))
}

/// Square root, NaN for negative input
#[inline]
pub fn sqrt<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().sqrt())
}

/// `1 / sqrt(x)`. It is not an approximation, the reciprocal is computed with full
/// precision
#[inline]
pub fn rsqrt<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(T::one() / x.data().sqrt())
}

/// Absolute value
#[inline]
pub fn abs<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().abs())
}

/// `1 / x`. Zero produces infinity with the sign of the zero
#[inline]
pub fn reciprocal<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(T::one() / x.data())
}
