//! Element types of the [`Vector`](crate::Vector)
//!
//! [`FloatElement`] binds each operation to the platform routine of the concrete type. The
//! operations in [`compute`](crate::compute) are written once against this trait, the
//! type specific behaviour lives in the per type impls below.

use std::fmt::{Debug, Display};

use num_traits::Float;

use crate::macros::{for_all_exponent_types, for_all_float_types};
use crate::private::Sealed;
use crate::types::ElementType;

/// Float types the math operates on: `f32` and `f64`
pub trait FloatElement:
    Float + Sealed + Debug + Display + Default + Into<f64> + Send + Sync + 'static
{
    /// Element type of this float
    const ELEMENT_TYPE: ElementType;
    /// `0.5`
    const HALF: Self;
    /// `2.0`
    const TWO: Self;
    /// Natural logarithm of `2`
    const LN_2: Self;
    /// Smallest exponent returned by `frexp` for a normal number
    const MIN_EXP: i32;
    /// Largest exponent returned by `frexp` for a finite number
    const MAX_EXP: i32;

    /// Sine and cosine from the combined `sincos` primitive
    #[cfg(feature = "libm")]
    fn sin_cos_libm(self) -> (Self, Self);

    /// `frexp` of the C library
    #[cfg(feature = "libm")]
    fn frexp_libm(self) -> (Self, i32);

    /// `ldexp` of the C library
    #[cfg(feature = "libm")]
    fn ldexp_libm(self, exponent: i32) -> Self;

    /// Decompose self into mantissa in `[0.5, 1)` and exponent by reading the IEEE bit
    /// pattern. Zero, infinity and NaN are returned unchanged with exponent `0`
    fn frexp_bits(self) -> (Self, i32);

    /// Compute `self * 2^exponent` by building the power of two from its bit pattern.
    /// Large exponents are applied in steps, result is rounded only once
    fn ldexp_bits(self, exponent: i32) -> Self;

    /// Returns true if the exponent field is all ones and the fraction is not zero
    fn is_nan_bits(self) -> bool;

    /// Returns true if the exponent field is not all ones
    fn is_finite_bits(self) -> bool;

    /// Map the bit pattern to a signed integer that has the same order as the float.
    /// `-0.0` and `0.0` are both mapped to `0`, adjacent floats differ by `1`
    fn ordered_bits(self) -> i64;
}

macro_rules! impl_float_element {
    ($({$ty:ident, $bits:ident, $sbits:ident, $variant:ident, $mant:literal, $bias:literal, $sincos:ident, $frexp:ident, $ldexp:ident}),+) => {
        $(
            impl Sealed for $ty {}

            impl FloatElement for $ty {
                const ELEMENT_TYPE: ElementType = ElementType::$variant;
                const HALF: Self = 0.5;
                const TWO: Self = 2.0;
                const LN_2: Self = std::$ty::consts::LN_2;
                const MIN_EXP: i32 = <$ty>::MIN_EXP;
                const MAX_EXP: i32 = <$ty>::MAX_EXP;

                #[cfg(feature = "libm")]
                #[inline]
                fn sin_cos_libm(self) -> (Self, Self) {
                    libm::$sincos(self)
                }

                #[cfg(feature = "libm")]
                #[inline]
                fn frexp_libm(self) -> (Self, i32) {
                    libm::$frexp(self)
                }

                #[cfg(feature = "libm")]
                #[inline]
                fn ldexp_libm(self, exponent: i32) -> Self {
                    libm::$ldexp(self, exponent)
                }

                #[inline]
                fn frexp_bits(self) -> (Self, i32) {
                    const EXP_MAX: $bits = (1 << (<$bits>::BITS - 1 - $mant)) - 1;
                    const TWO_POW_64: $ty = 18446744073709551616.0;

                    let bits = self.to_bits();
                    let biased = ((bits >> $mant) & EXP_MAX) as i32;
                    if biased == 0 {
                        if self == 0.0 {
                            return (self, 0);
                        }
                        // Subnormal, scale it into the normal range first
                        let (mantissa, exponent) = (self * TWO_POW_64).frexp_bits();
                        return (mantissa, exponent - 64);
                    }
                    if biased == EXP_MAX as i32 {
                        return (self, 0);
                    }

                    let mantissa = (bits & !(EXP_MAX << $mant)) | ((($bias - 1) as $bits) << $mant);
                    (<$ty>::from_bits(mantissa), biased - ($bias - 1))
                }

                #[inline]
                fn ldexp_bits(self, exponent: i32) -> Self {
                    const MAX_SCALE: i32 = $bias;
                    const MIN_SCALE: i32 = 1 - $bias;
                    const PRECISION: i32 = $mant + 1;

                    // 2^MAX_SCALE
                    let scale_up = <$ty>::from_bits(((MAX_SCALE + $bias) as $bits) << $mant);
                    // 2^(MIN_SCALE + PRECISION), keeps the intermediate normal such that
                    // rounding into the subnormal range happens in the last multiplication
                    let scale_down =
                        <$ty>::from_bits(((MIN_SCALE + PRECISION + $bias) as $bits) << $mant);

                    let mut y = self;
                    let mut n = exponent;
                    if n > MAX_SCALE {
                        y *= scale_up;
                        n -= MAX_SCALE;
                        if n > MAX_SCALE {
                            y *= scale_up;
                            n -= MAX_SCALE;
                            if n > MAX_SCALE {
                                n = MAX_SCALE;
                            }
                        }
                    } else if n < MIN_SCALE {
                        y *= scale_down;
                        n -= MIN_SCALE + PRECISION;
                        if n < MIN_SCALE {
                            y *= scale_down;
                            n -= MIN_SCALE + PRECISION;
                            if n < MIN_SCALE {
                                n = MIN_SCALE;
                            }
                        }
                    }
                    y * <$ty>::from_bits(((n + $bias) as $bits) << $mant)
                }

                #[inline]
                fn is_nan_bits(self) -> bool {
                    const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                    const EXP_FIELD: $bits = !SIGN & !((1 << $mant) - 1);
                    (self.to_bits() & !SIGN) > EXP_FIELD
                }

                #[inline]
                fn is_finite_bits(self) -> bool {
                    const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                    const EXP_FIELD: $bits = !SIGN & !((1 << $mant) - 1);
                    self.to_bits() & EXP_FIELD != EXP_FIELD
                }

                #[inline]
                fn ordered_bits(self) -> i64 {
                    let bits = self.to_bits() as $sbits;
                    let ordered = if bits < 0 { <$sbits>::MIN - bits } else { bits };
                    ordered as i64
                }
            }
        )+
    };
}

for_all_float_types!(impl_float_element);

/// Integer types that store the binary exponent of a [`FloatElement`]: `i32` is the
/// native width, `i16` is the narrow one
pub trait ExponentElement:
    Copy + Sealed + Debug + Default + PartialEq + Send + Sync + 'static
{
    /// Element type of this exponent
    const ELEMENT_TYPE: ElementType;

    /// Narrow the native exponent into this type
    fn from_native(exponent: i32) -> Self;

    /// Widen self into the native exponent
    fn to_native(self) -> i32;
}

macro_rules! impl_exponent_element {
    ($({$ty:ident, $variant:ident}),+) => {
        $(
            impl Sealed for $ty {}

            impl ExponentElement for $ty {
                const ELEMENT_TYPE: ElementType = ElementType::$variant;

                #[inline]
                fn from_native(exponent: i32) -> Self {
                    #[cfg(feature = "verify")]
                    assert!(
                        <$ty>::try_from(exponent).is_ok(),
                        "Exponent `{}` can not be narrowed into `{}`",
                        exponent,
                        stringify!($ty)
                    );
                    exponent as $ty
                }

                #[inline]
                fn to_native(self) -> i32 {
                    i32::from(self)
                }
            }
        )+
    };
}

for_all_exponent_types!(impl_exponent_element);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::float_tests;

    float_tests! {
        fn test_frexp_bits_special_values() {
            assert_eq!((0.0 as T).frexp_bits(), (0.0, 0));
            assert!((-0.0 as T).frexp_bits().0.is_sign_negative());
            assert_eq!(T::INFINITY.frexp_bits(), (T::INFINITY, 0));
            assert_eq!(T::NEG_INFINITY.frexp_bits(), (T::NEG_INFINITY, 0));
            let (mantissa, exponent) = T::NAN.frexp_bits();
            assert!(mantissa.is_nan());
            assert_eq!(exponent, 0);
        }

        fn test_frexp_bits_normal_and_subnormal() {
            assert_eq!((1.0 as T).frexp_bits(), (0.5, 1));
            assert_eq!((-6.0 as T).frexp_bits(), (-0.75, 3));
            assert_eq!((0.125 as T).frexp_bits(), (0.5, -2));
            assert_eq!(T::MAX.frexp_bits().1, T::MAX_EXP);
            assert_eq!(T::MIN_POSITIVE.frexp_bits(), (0.5, T::MIN_EXP));

            // Smallest subnormal is 2^(MIN_EXP - MANTISSA_DIGITS)
            let smallest = T::from_bits(1);
            let digits = T::MANTISSA_DIGITS as i32;
            assert_eq!(smallest.frexp_bits(), (0.5, T::MIN_EXP - digits + 1));
        }

        fn test_ldexp_bits() {
            assert_eq!((0.5 as T).ldexp_bits(1), 1.0);
            assert_eq!((-0.75 as T).ldexp_bits(3), -6.0);
            assert_eq!((1.0 as T).ldexp_bits(T::MAX_EXP), T::INFINITY);
            assert_eq!((-1.0 as T).ldexp_bits(i32::MAX), T::NEG_INFINITY);
            assert_eq!((1.0 as T).ldexp_bits(i32::MIN), 0.0);
            assert_eq!((0.5 as T).ldexp_bits(T::MIN_EXP), T::MIN_POSITIVE);

            let digits = T::MANTISSA_DIGITS as i32;
            assert_eq!((0.5 as T).ldexp_bits(T::MIN_EXP - digits + 1), T::from_bits(1));
            // Scale down and up again, crossing both step thresholds
            let half_max = T::MAX.ldexp_bits(-T::MAX_EXP);
            assert!(half_max < 1.0 && half_max > 0.5);
            assert_eq!(half_max.ldexp_bits(T::MAX_EXP), T::MAX);
            assert!(T::NAN.ldexp_bits(10).is_nan());
        }

        fn test_classify_bits() {
            assert!(T::NAN.is_nan_bits());
            assert!((-T::NAN).is_nan_bits());
            assert!(!T::INFINITY.is_nan_bits());
            assert!(!(1.0 as T).is_nan_bits());

            assert!(T::MAX.is_finite_bits());
            assert!(T::from_bits(1).is_finite_bits());
            assert!((-0.0 as T).is_finite_bits());
            assert!(!T::INFINITY.is_finite_bits());
            assert!(!T::NEG_INFINITY.is_finite_bits());
            assert!(!T::NAN.is_finite_bits());
        }

        fn test_ordered_bits() {
            assert_eq!((0.0 as T).ordered_bits(), (-0.0 as T).ordered_bits());
            assert_eq!(T::from_bits(1).ordered_bits(), 1);
            assert_eq!((-T::from_bits(1)).ordered_bits(), -1);
            assert!((1.0 as T).ordered_bits() < (1.5 as T).ordered_bits());
            assert!((-1.5 as T).ordered_bits() < (-1.0 as T).ordered_bits());
            assert_eq!(
                (1.0 as T).ordered_bits() + 1,
                T::from_bits((1.0 as T).to_bits() + 1).ordered_bits()
            );
        }
    }

    #[cfg(feature = "libm")]
    float_tests! {
        fn test_bits_agree_with_libm() {
            let values: [T; 8] = [
                1.0,
                -3.75,
                1e-30,
                12345.678,
                T::MAX,
                T::MIN_POSITIVE,
                T::from_bits(3),
                -T::from_bits(0x1234),
            ];
            for value in values {
                assert_eq!(value.frexp_bits(), value.frexp_libm(), "frexp({value:e})");
                for exponent in [-1100, -150, -10, 0, 10, 150, 1100] {
                    assert_eq!(
                        value.ldexp_bits(exponent).to_bits(),
                        value.ldexp_libm(exponent).to_bits(),
                        "ldexp({value:e}, {exponent})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_exponent_narrowing() {
        assert_eq!(i16::from_native(-1074), -1074_i16);
        assert_eq!(i32::from_native(1024), 1024);
        assert_eq!((-149_i16).to_native(), -149);
        assert_eq!(<i16 as ExponentElement>::ELEMENT_TYPE, ElementType::Int16);
    }

    #[cfg(feature = "verify")]
    #[test]
    #[should_panic(expected = "can not be narrowed into `i16`")]
    fn test_lossy_exponent_narrowing() {
        let _ = i16::from_native(40000);
    }
}
