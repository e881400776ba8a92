//! Classify the vector
//!
//! On `msvc` targets, or with feature `bit_classify`, the lane is classified by testing its
//! bit pattern. Everywhere else the predicates of the standard library are used. They are
//! functionally equivalent, the choice is made at build time

#[cfg(any(target_env = "msvc", feature = "bit_classify"))]
use super::portable;
use crate::types::FloatElement;
use crate::vector::{Mask, Vector};

/// Returns the mask that is set if `x` is NaN
#[inline]
pub fn isnan<T: FloatElement>(x: Vector<T>) -> Mask<T> {
    #[cfg(any(target_env = "msvc", feature = "bit_classify"))]
    let value = portable::is_nan_bits(x.data());

    #[cfg(not(any(target_env = "msvc", feature = "bit_classify")))]
    let value = x.data().is_nan();

    Mask::new(value)
}

/// Returns the mask that is set if `x` is neither infinite nor NaN
#[inline]
pub fn isfinite<T: FloatElement>(x: Vector<T>) -> Mask<T> {
    #[cfg(any(target_env = "msvc", feature = "bit_classify"))]
    let value = portable::is_finite_bits(x.data());

    #[cfg(not(any(target_env = "msvc", feature = "bit_classify")))]
    let value = x.data().is_finite();

    Mask::new(value)
}
