//! Trigonometric functions

#[cfg(not(feature = "libm"))]
use super::portable;
use crate::types::FloatElement;
use crate::vector::Vector;

/// Sine
#[inline]
pub fn sin<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().sin())
}

/// Cosine
#[inline]
pub fn cos<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().cos())
}

/// Arcsine, NaN outside of `[-1, 1]`
#[inline]
pub fn asin<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().asin())
}

/// Arctangent
#[inline]
pub fn atan<T: FloatElement>(x: Vector<T>) -> Vector<T> {
    Vector::new(x.data().atan())
}

/// Two argument arctangent, computes `x.atan2(y)`
#[inline]
pub fn atan2<T: FloatElement>(x: Vector<T>, y: Vector<T>) -> Vector<T> {
    Vector::new(x.data().atan2(y.data()))
}

/// Sine and cosine of the same vector, produced together by [`sincos`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinCos<T> {
    /// `sin(x)`
    pub sin: Vector<T>,
    /// `cos(x)`
    pub cos: Vector<T>,
}

/// Compute sine and cosine in one call
///
/// With feature `libm`, the combined `sincos` primitive is used such that the range
/// reduction is shared. Otherwise, sine and cosine are computed independently
#[inline]
pub fn sincos<T: FloatElement>(x: Vector<T>) -> SinCos<T> {
    #[cfg(feature = "libm")]
    let (sin, cos) = x.data().sin_cos_libm();

    #[cfg(not(feature = "libm"))]
    let (sin, cos) = portable::sincos_split(x.data());

    SinCos {
        sin: Vector::new(sin),
        cos: Vector::new(cos),
    }
}

/// Compute sine and cosine in one call, write them into the output vectors. Both of the
/// outputs are always written, their previous content is discarded
#[inline]
pub fn sincos_into<T: FloatElement>(x: Vector<T>, sin: &mut Vector<T>, cos: &mut Vector<T>) {
    let result = sincos(x);
    *sin = result.sin;
    *cos = result.cos;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::portable;
    use crate::macros::float_tests;
    use crate::oracle::ulp_distance;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    float_tests! {
        fn test_sincos_matches_sin_and_cos() {
            let mut rng = StdRng::seed_from_u64(0x736325);
            for _ in 0..2000 {
                let x = Vector::<T>::new(rng.gen_range(-100.0..100.0));
                let result = sincos(x);
                assert!(ulp_distance(result.sin.data(), sin(x).data()) <= 2, "sin({})", x.data());
                assert!(ulp_distance(result.cos.data(), cos(x).data()) <= 2, "cos({})", x.data());
            }
        }

        fn test_sincos_portable_path() {
            for x in [0.0, 0.5, -1.25, 3.0, 1e3] {
                let (sin_value, cos_value) = portable::sincos_split::<T>(x);
                assert_eq!(sin_value, x.sin());
                assert_eq!(cos_value, x.cos());
            }
        }

        fn test_sincos_special_values() {
            let zero = sincos(Vector::<T>::new(0.0));
            assert_eq!(zero.sin.data(), 0.0);
            assert_eq!(zero.cos.data(), 1.0);

            let nan = sincos(Vector::new(T::NAN));
            assert!(nan.sin.data().is_nan() && nan.cos.data().is_nan());
            let inf = sincos(Vector::new(T::INFINITY));
            assert!(inf.sin.data().is_nan() && inf.cos.data().is_nan());
        }

        fn test_sincos_into_overwrites_outputs() {
            let mut sin_out = Vector::<T>::new(T::NAN);
            let mut cos_out = Vector::<T>::new(123.0);
            sincos_into(Vector::new(0.0), &mut sin_out, &mut cos_out);
            assert_eq!(sin_out.data(), 0.0);
            assert_eq!(cos_out.data(), 1.0);
        }

        fn test_inverse_trig() {
            assert_eq!(asin(Vector::<T>::new(0.0)).data(), 0.0);
            assert!(asin(Vector::<T>::new(1.5)).data().is_nan());
            assert_eq!(asin(Vector::<T>::new(1.0)).data(), std::f64::consts::FRAC_PI_2 as T);
            assert_eq!(atan(Vector::new(T::INFINITY)).data(), std::f64::consts::FRAC_PI_2 as T);
            let x = Vector::<T>::new(1.0);
            let y = Vector::<T>::new(-1.0);
            assert_eq!(atan2(x, y).data(), (1.0 as T).atan2(-1.0));
            assert!(atan2(y, x).data() < 0.0);
        }
    }
}
