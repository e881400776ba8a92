use std::process::ExitCode;
use std::str::FromStr;

use lane_math::backend::BackendInfo;
use lane_math::oracle::Report;
use lane_math::types::ElementType;
use lane_math_benches::sweep::sweep;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_SAMPLES: usize = 100_000;
const DEFAULT_SEED: u64 = 0x6c616e65;

/// Read the environment variable, fallback to default if it is absent or invalid
fn env_or<T: FromStr + std::fmt::Debug>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("`{key}={value}` is invalid, use default `{default:?}`");
            default
        }),
        Err(_) => default,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let samples = env_or("LANE_MATH_SAMPLES", DEFAULT_SAMPLES);
    let seed = env_or("LANE_MATH_SEED", DEFAULT_SEED);
    let element_types = match std::env::var("LANE_MATH_ELEMENT") {
        Ok(name) => match name.parse::<ElementType>() {
            Ok(element_type) if element_type.is_float() => vec![element_type],
            Ok(element_type) => {
                tracing::error!("Can not sweep `{element_type}`, it is not a float element");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => vec![ElementType::Float32, ElementType::Float64],
    };

    let backend = BackendInfo::current();
    backend.trace();
    println!("{backend}");

    let now = std::time::Instant::now();
    let mut report = Report::new();
    for element_type in element_types {
        let result = match element_type {
            ElementType::Float32 => sweep::<f32>(samples, seed, &mut report),
            ElementType::Float64 => sweep::<f64>(samples, seed, &mut report),
            ElementType::Int32 | ElementType::Int16 => Ok(()),
        };
        if let Err(e) = result {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    }

    tracing::info!(
        samples,
        seed,
        "Sweep takes: {:?}",
        now.elapsed()
    );
    println!("{report}");

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        tracing::error!("{} lanes differ from the reference", report.total_mismatches());
        ExitCode::FAILURE
    }
}
