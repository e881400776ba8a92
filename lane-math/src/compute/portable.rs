//! Portable implementations that are chosen when the native primitive is not selected at
//! build time.
//!
//! All of them are always compiled, such that the oracle can compare them with the
//! selected ones on any build. They operate on the element directly

use crate::types::FloatElement;

/// Sine and cosine computed by two independent calls
#[inline]
pub fn sincos_split<T: FloatElement>(x: T) -> (T, T) {
    (x.sin(), x.cos())
}

/// Base-2 logarithm computed as `ln(x) / ln(2)`
#[inline]
pub fn log2_via_ln<T: FloatElement>(x: T) -> T {
    x.ln() / T::LN_2
}

/// Decompose `x` into mantissa in `[0.5, 1)` and exponent from its bit pattern
#[inline]
pub fn frexp_bits<T: FloatElement>(x: T) -> (T, i32) {
    x.frexp_bits()
}

/// Compute `x * 2^exponent` from the bit pattern of the power of two
#[inline]
pub fn ldexp_bits<T: FloatElement>(x: T, exponent: i32) -> T {
    x.ldexp_bits(exponent)
}

/// Returns true if `x` is NaN, decided by its bit pattern
#[inline]
pub fn is_nan_bits<T: FloatElement>(x: T) -> bool {
    x.is_nan_bits()
}

/// Returns true if `x` is neither infinite nor NaN, decided by its bit pattern
#[inline]
pub fn is_finite_bits<T: FloatElement>(x: T) -> bool {
    x.is_finite_bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::float_tests;
    use crate::oracle::ulp_distance;

    float_tests! {
        fn test_log2_via_ln_exact_powers() {
            assert_eq!(log2_via_ln::<T>(1.0), 0.0);
            assert_eq!(log2_via_ln::<T>(2.0), 1.0);
            assert!(log2_via_ln::<T>(-1.0).is_nan());
            assert_eq!(log2_via_ln::<T>(0.0), T::NEG_INFINITY);
            assert_eq!(log2_via_ln(T::INFINITY), T::INFINITY);
        }

        fn test_log2_via_ln_agrees_with_native() {
            let mut samples: Vec<T> = vec![
                1.0 + T::EPSILON,
                1.0 - T::EPSILON,
                0.999,
                1.001,
                T::MIN_POSITIVE,
                T::from_bits(1),
                T::MAX,
                1e-20,
                1e20,
                12345.678,
            ];
            samples.extend((T::MIN_EXP..T::MAX_EXP).step_by(7).map(|exponent| {
                (0.75 as T).ldexp_bits(exponent)
            }));

            for x in samples {
                let native = x.log2();
                let fallback = log2_via_ln(x);
                let ulps = ulp_distance(native, fallback);
                assert!(
                    ulps <= 4,
                    "log2({x:e}): native {native:e}, fallback {fallback:e}, {ulps} ulps"
                );
            }
        }

        fn test_bits_wrappers() {
            assert_eq!(frexp_bits::<T>(8.0), (0.5, 4));
            assert_eq!(ldexp_bits::<T>(0.5, 4), 8.0);
            assert!(is_nan_bits(T::NAN));
            assert!(!is_finite_bits(T::INFINITY));
            assert!(is_finite_bits::<T>(-0.0));
        }
    }
}
