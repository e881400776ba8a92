//! # LaneMath
//!
//! `LaneMath` is the scalar backend of a type-generic vector math abstraction. Every
//! [`Vector`] holds exactly one lane, and every operation in [`compute`] evaluates that
//! lane with the platform numeric library. It serves two purposes:
//!
//! - portable fallback when no hardware vector unit is targeted
//!
//! - semantics oracle for the hardware backends: each of their lanes must be bit-for-bit
//!   (or within the documented ULPs, see [`oracle`]) equal to the result computed here
//!
//! # Build-time selection
//!
//! Some operations have more than one correct implementation, the fastest one available
//! on the target is chosen at build time through cargo features and `cfg`. The choice is
//! invisible to the caller, [`backend::BackendInfo`] describes what has been selected.
//!
//! # Errors
//!
//! The math never fails. Domain errors produce `NaN`, overflow and division by zero produce
//! infinity. Use [`compute::isnan`] and [`compute::isfinite`] to detect them

pub mod backend;
pub mod compute;
pub mod element;
pub mod error;
mod macros;
pub mod oracle;
pub mod types;
pub mod vector;

pub use vector::{Mask, Vector};

mod private {
    /// Sealed trait protect against downstream implementations
    pub trait Sealed {}
}
