pub mod sweep;

use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lane_math::types::FloatElement;

/// Creates random (but fixed-seeded) floats uniformly distributed in `[low, high)`
pub fn create_uniform_samples<T>(size: usize, low: T, high: T, seed: u64) -> Vec<T>
where
    T: FloatElement + SampleUniform,
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(low..high)).collect()
}

/// Creates random (but fixed-seeded) floats whose magnitudes are uniformly distributed in
/// the binary exponent, from the subnormals to the largest finite value. Half of them are
/// negative
pub fn create_log_uniform_samples<T>(size: usize, seed: u64) -> Vec<T>
where
    T: FloatElement + SampleUniform,
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let mantissa = rng.gen_range(T::HALF..T::one());
            let exponent = rng.gen_range(T::MIN_EXP - 20..=T::MAX_EXP);
            let value = mantissa.ldexp_bits(exponent);
            if rng.gen_bool(0.5) { -value } else { value }
        })
        .collect()
}

/// Creates random (but fixed-seeded) halfway values `k + 0.5` with `|k| < 2^12`
pub fn create_halfway_samples<T>(size: usize, seed: u64) -> Vec<T>
where
    T: FloatElement + SampleUniform,
{
    let bound = T::one().ldexp_bits(12);
    create_uniform_samples(size, -bound, bound, seed)
        .into_iter()
        .map(|x| x.floor() + T::HALF)
        .collect()
}

/// Values on the boundaries of the float format
pub fn special_values<T: FloatElement>() -> Vec<T> {
    let smallest_subnormal = T::min_positive_value() * T::epsilon();
    let values = [
        T::zero(),
        T::one(),
        T::HALF,
        T::one() + T::HALF,
        T::TWO + T::HALF,
        T::epsilon(),
        T::min_positive_value(),
        smallest_subnormal,
        T::max_value(),
        T::infinity(),
    ];
    values
        .into_iter()
        .flat_map(|value| [value, -value])
        .chain([T::nan()])
        .collect()
}
