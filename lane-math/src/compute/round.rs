//! Rounding
//!
//! [`round`] rounds half to even (banker's rounding), it is not `f64::round` that rounds
//! half away from zero. It is computed as
//!
//! ```text
//! floor(x + 0.5) - (is_even_half(x) ? 1 : 0)
//! is_even_half(x) = x - floor(x * 0.5) * 2 == 0.5
//! ```
//!
//! The same formula is applied to every input, including negative halves and large values,
//! such that the result is identical to the lanes of the hardware backends

use crate::types::FloatElement;
use crate::vector::Vector;

/// Largest integer less than or equal to `x`
#[inline]
pub fn floor<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().floor())
}

/// Smallest integer greater than or equal to `x`
#[inline]
pub fn ceil<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().ceil())
}

/// Round to the nearest integer, ties to even
#[inline]
pub fn round<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    let x = x.data();
    let adjustment = if is_even_half(x) { T::one() } else { T::zero() };
    Vector::new((x + T::HALF).floor() - adjustment)
}

/// Returns true if `x` is exactly `2k + 0.5`, in which case `floor(x + 0.5)` rounds up to
/// the odd neighbour
#[inline(always)]
fn is_even_half<T: FloatElement>(x: T) -> bool {
    x - (x * T::HALF).floor() * T::TWO == T::HALF
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::float_tests;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn round_value<T: FloatElement>(x: T) -> T {
        round(Vector::new(x)).data()
    }

    float_tests! {
        fn test_round_ties_to_even() {
            let cases: [(T, T); 12] = [
                (0.5, 0.0),
                (1.5, 2.0),
                (2.5, 2.0),
                (3.5, 4.0),
                (4.5, 4.0),
                (-0.5, 0.0),
                (-1.5, -2.0),
                (-2.5, -2.0),
                (-3.5, -4.0),
                (1023.5, 1024.0),
                (1024.5, 1024.0),
                (-1024.5, -1024.0),
            ];
            for (x, expected) in cases {
                assert_eq!(round_value(x), expected, "round({x})");
            }
        }

        fn test_round_not_halfway() {
            let cases: [(T, T); 8] = [
                (0.0, 0.0),
                (0.4, 0.0),
                (0.6, 1.0),
                (2.25, 2.0),
                (2.75, 3.0),
                (-2.25, -2.0),
                (-2.75, -3.0),
                (7.0, 7.0),
            ];
            for (x, expected) in cases {
                assert_eq!(round_value(x), expected, "round({x})");
            }
        }

        fn test_round_special_values() {
            assert_eq!(round_value(T::INFINITY), T::INFINITY);
            assert_eq!(round_value(T::NEG_INFINITY), T::NEG_INFINITY);
            assert!(round_value(T::NAN).is_nan());
            // Already integral and even, the formula keeps it
            let large: T = 16777216.0;
            assert_eq!(round_value(large), large);
            assert_eq!(round_value(-large), -large);
        }

        fn test_round_matches_ties_even_on_quarters() {
            let mut rng = StdRng::seed_from_u64(0x726f756e64);
            for _ in 0..5000 {
                let quarters: i32 = rng.gen_range(-400_000..400_000);
                let x = quarters as T * 0.25;
                assert_eq!(round_value(x), x.round_ties_even(), "round({x})");
            }
        }

        fn test_floor_ceil() {
            assert_eq!(floor(Vector::<T>::new(-1.5)).data(), -2.0);
            assert_eq!(ceil(Vector::<T>::new(-1.5)).data(), -1.0);
            assert_eq!(floor(Vector::<T>::new(2.0)).data(), 2.0);
            assert_eq!(ceil(Vector::<T>::new(2.01)).data(), 3.0);
            assert!(ceil(Vector::<T>::new(-0.5)).data().is_sign_negative());
            assert!(floor(Vector::new(T::NAN)).data().is_nan());
        }
    }
}
