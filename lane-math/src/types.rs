//! Re-export types and traits
//!
//! Relationships:
//!
//! - [`FloatElement`] types are the ones the math operates on. [`ExponentElement`] types
//!   only store the binary exponent produced by `frexp` and consumed by `ldexp`. Both of
//!   them are described by an [`ElementType`]

use std::fmt::Display;
use std::str::FromStr;

use snafu::OptionExt;

pub use crate::element::{ExponentElement, FloatElement};
use crate::error::{MathError, UnknownElementTypeSnafu};
pub use crate::vector::{Mask, Vector};

/// Element type that can be stored in a [`Vector`]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 32-bit float number, also known as `float`
    Float32,
    /// 64-bit float number, also known as `double`
    Float64,
    /// Signed 32-bit integer, the native exponent storage
    Int32,
    /// Signed 16-bit integer, the narrow exponent storage
    Int16,
}

impl ElementType {
    /// Size of the element in bytes
    #[inline]
    pub const fn size_in_bytes(&self) -> usize {
        match self {
            Self::Float32 | Self::Int32 => 4,
            Self::Float64 => 8,
            Self::Int16 => 2,
        }
    }

    /// Returns true if the element is a float number
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElementType::{:?}", self)
    }
}

impl FromStr for ElementType {
    type Err = MathError;

    /// Parse the rust name, the C name or the variant name, case insensitive
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let element_type = match name.to_ascii_lowercase().as_str() {
            "f32" | "float" | "float32" => Some(Self::Float32),
            "f64" | "double" | "float64" => Some(Self::Float64),
            "i32" | "int" | "int32" => Some(Self::Int32),
            "i16" | "short" | "int16" => Some(Self::Int16),
            _ => None,
        };
        element_type.context(UnknownElementTypeSnafu { name })
    }
}
