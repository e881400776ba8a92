//! Elementwise math on single-lane [`Vector`](crate::Vector)s
//!
//! Each function evaluates the lane with the platform numeric library of the element
//! type, such that the result is bit-for-bit what a multi-lane backend should produce for
//! each of its lanes. Functions are pure, allocation free and never fail: domain errors
//! produce `NaN`, overflow and division by zero produce infinity.
//!
//! Some functions have alternative implementations in [`portable`], which one is used
//! is decided at build time:
//!
//! - [`sincos`]: combined primitive with feature `libm`, two calls otherwise
//!
//! - [`log2`]: native primitive with feature `native_log2`, `ln(x) / ln(2)` otherwise
//!
//! - [`isnan`]/[`isfinite`]: bit pattern on `msvc` or with feature `bit_classify`,
//!   the std predicates otherwise
//!
//! - [`frexp`]/[`ldexp`]: C library routines with feature `libm`, bit pattern otherwise

pub mod arith;
pub mod classify;
pub mod exp_log;
pub mod exponent;
pub mod portable;
pub mod round;
pub mod trig;

pub use arith::{
    abs, max, max_scalar, min, min_scalar, reciprocal, rsqrt, scalar_max, scalar_min, sqrt,
};
pub use classify::{isfinite, isnan};
pub use exp_log::{exp, log, log10, log2};
pub use exponent::{frexp, frexp_into, ldexp, Decomposed};
pub use round::{ceil, floor, round};
pub use trig::{asin, atan, atan2, cos, sin, sincos, sincos_into, SinCos};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::UnaryOp;
    use crate::vector::Vector;
    use rayon::prelude::*;

    #[test]
    fn test_concurrent_evaluation_is_deterministic() {
        let inputs: Vec<f64> = (-2000..2000).map(|i| i as f64 * 0.37).collect();
        let evaluate = |x: f64| {
            let x = Vector::new(x);
            let mut lanes: Vec<u64> = UnaryOp::ALL
                .iter()
                .map(|op| op.evaluate(x).data().to_bits())
                .collect();
            let SinCos { sin, cos } = sincos(x);
            lanes.push(sin.data().to_bits());
            lanes.push(cos.data().to_bits());
            let decomposed: Decomposed<f64, i16> = frexp(x);
            lanes.push(ldexp(decomposed.mantissa, decomposed.exponent).data().to_bits());
            lanes.push(u64::from(isfinite(x).is_full()));
            lanes
        };

        let sequential: Vec<Vec<u64>> = inputs.iter().map(|&x| evaluate(x)).collect();
        let parallel: Vec<Vec<u64>> = inputs.par_iter().map(|&x| evaluate(x)).collect();
        assert_eq!(sequential, parallel);
    }
}
