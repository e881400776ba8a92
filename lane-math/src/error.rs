//! Error in lane-math
//!
//! Note that the math itself never fails, errors only come from the surfaces around it

use snafu::Snafu;

#[allow(missing_docs)]
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MathError {
    #[snafu(display(
        "`Vector<{element}>` has {expected} lane, can not load/store it with a slice of {actual} elements"
    ))]
    LaneCount {
        element: &'static str,
        expected: usize,
        actual: usize,
    },
    #[snafu(display("Unknown element type `{name}`"))]
    UnknownElementType { name: String },
}

/// Result type of lane-math
pub type Result<T> = std::result::Result<T, MathError>;
