//! Cross-check the paths selected at build time against their portable alternatives
//!
//! Each selectable operation is evaluated on the same seeded inputs by the selected path,
//! through [`compute`], and by the alternative in [`portable`]. The alternatives are
//! computed in parallel, the comparison is recorded into a [`Report`]

use rand::distributions::uniform::SampleUniform;
use rayon::prelude::*;

use lane_math::compute::{self, portable};
use lane_math::oracle::{ulp_distance, Oracle, OracleError, Report, UnaryOp};
use lane_math::types::FloatElement;
use lane_math::Vector;

use crate::{
    create_halfway_samples, create_log_uniform_samples, create_uniform_samples, special_values,
};

/// Inputs of the sweep: special values, log-uniform values across the whole range,
/// values in a few periods around zero and halfway values
pub fn sweep_inputs<T>(samples: usize, seed: u64) -> Vec<T>
where
    T: FloatElement + SampleUniform,
{
    let period = T::one().ldexp_bits(5);
    let mut inputs = special_values::<T>();
    inputs.extend(create_log_uniform_samples::<T>(samples, seed));
    inputs.extend(create_uniform_samples::<T>(samples, -period, period, seed ^ 0x5eed));
    inputs.extend(create_halfway_samples::<T>(samples / 4, seed.rotate_left(17)));
    inputs
}

/// Sweep element type `T` and record the distances into `report`
pub fn sweep<T>(samples: usize, seed: u64, report: &mut Report) -> Result<(), OracleError>
where
    T: FloatElement + SampleUniform,
{
    let inputs = sweep_inputs::<T>(samples, seed);
    let oracle = Oracle::new();

    let positive: Vec<T> = inputs.iter().map(|x| x.abs()).collect();
    let log2: Vec<T> = positive
        .par_iter()
        .map(|&x| portable::log2_via_ln(x))
        .collect();
    oracle.check_lanes(UnaryOp::Log2, &positive, &log2, report)?;

    let (sin, cos): (Vec<T>, Vec<T>) = inputs
        .par_iter()
        .map(|&x| portable::sincos_split(x))
        .unzip();
    oracle.check_lanes(UnaryOp::Sin, &inputs, &sin, report)?;
    oracle.check_lanes(UnaryOp::Cos, &inputs, &cos, report)?;

    let combined: Vec<(T, T)> = inputs
        .par_iter()
        .map(|&x| {
            let result = compute::sincos(Vector::new(x));
            (result.sin.data(), result.cos.data())
        })
        .collect();
    for (&x, &(sin, cos)) in inputs.iter().zip(&combined) {
        let sin_ulps = ulp_distance(compute::sin(Vector::new(x)).data(), sin);
        let cos_ulps = ulp_distance(compute::cos(Vector::new(x)).data(), cos);
        let ulps = sin_ulps.max(cos_ulps);
        record(report, "sincos", x, ulps, UnaryOp::Sin.default_tolerance());
    }

    for &x in &inputs {
        let decomposed: compute::Decomposed<T, i32> = compute::frexp(Vector::new(x));
        let (mantissa, exponent) = portable::frexp_bits(x);
        let ulps = if decomposed.exponent.data() == exponent {
            ulp_distance(decomposed.mantissa.data(), mantissa)
        } else {
            u64::MAX
        };
        record(report, "frexp", x, ulps, 0);

        // Narrow exponent, shifted into the subnormal and overflow ranges as well
        for shift in [-200_i16, -1, 1, 200] {
            let composed = compute::ldexp(Vector::new(x), Vector::new(shift)).data();
            let ulps = ulp_distance(composed, portable::ldexp_bits(x, i32::from(shift)));
            record(report, "ldexp", x, ulps, 0);
        }

        let is_nan = compute::isnan(Vector::new(x)).is_full();
        let is_finite = compute::isfinite(Vector::new(x)).is_full();
        let classified_by_bits =
            is_nan == portable::is_nan_bits(x) && is_finite == portable::is_finite_bits(x);
        let classified_by_std = is_nan == x.is_nan() && is_finite == x.is_finite();
        let ulps = if classified_by_bits && classified_by_std {
            0
        } else {
            u64::MAX
        };
        record(report, "classify", x, ulps, 0);
    }

    tracing::debug!(
        element_type = ?T::ELEMENT_TYPE,
        lanes = inputs.len(),
        mismatches = report.total_mismatches(),
        "Sweep finished"
    );

    Ok(())
}

fn record<T: FloatElement>(
    report: &mut Report,
    name: &'static str,
    input: T,
    ulps: u64,
    tolerance: u64,
) {
    let mismatch = ulps > tolerance;
    if mismatch {
        tracing::warn!(
            operation = name,
            element_type = ?T::ELEMENT_TYPE,
            ?input,
            ulps,
            "Selected path differs from the portable path"
        );
    }
    report.record(name, T::ELEMENT_TYPE, ulps, mismatch);
}
