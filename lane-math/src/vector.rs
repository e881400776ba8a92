//! [`Vector`] and [`Mask`] of the scalar backend. Both of them hold a single lane

use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Not};

use snafu::ensure;

use crate::error::{LaneCountSnafu, Result};

/// Vector that holds exactly one lane of `T`
///
/// It is a transparent carrier: the math reads the lane via [`Vector::data`] and writes
/// output parameters via [`Vector::data_mut`]
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Vector<T> {
    data: T,
}

impl<T: Copy> Vector<T> {
    /// Number of lanes in the vector
    pub const LANES: usize = 1;

    /// Create a new [`Vector`] from the value
    #[inline]
    pub const fn new(data: T) -> Self {
        Self { data }
    }

    /// Get the value of the lane
    #[inline]
    pub fn data(&self) -> T {
        self.data
    }

    /// Get the mutable reference to the lane
    #[inline]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Load the vector from the slice, the slice should have exactly [`Self::LANES`]
    /// elements
    #[inline]
    pub fn load(slice: &[T]) -> Result<Self> {
        ensure!(
            slice.len() == Self::LANES,
            LaneCountSnafu {
                element: std::any::type_name::<T>(),
                expected: Self::LANES,
                actual: slice.len(),
            }
        );
        Ok(Self { data: slice[0] })
    }

    /// Store the vector into the slice, the slice should have exactly [`Self::LANES`]
    /// elements
    #[inline]
    pub fn store(self, slice: &mut [T]) -> Result<()> {
        ensure!(
            slice.len() == Self::LANES,
            LaneCountSnafu {
                element: std::any::type_name::<T>(),
                expected: Self::LANES,
                actual: slice.len(),
            }
        );
        slice[0] = self.data;
        Ok(())
    }
}

impl<T: Copy> From<T> for Vector<T> {
    #[inline]
    fn from(data: T) -> Self {
        Self { data }
    }
}

/// Boolean result of classifying a [`Vector<T>`]. It is tied to `T` such that the mask of
/// `f32` and `f64` can not be mixed
pub struct Mask<T> {
    value: bool,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Mask<T> {
    /// Create a new [`Mask`]
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Returns true if all of the lanes are set
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.value
    }

    /// Returns true if none of the lanes is set
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.value
    }
}

// Implemented by hand, derive would require `T` to implement these traits

impl<T> Clone for Mask<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Mask<T> {}

impl<T> PartialEq for Mask<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Mask<T> {}

impl<T> Debug for Mask<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mask<{}>({})", std::any::type_name::<T>(), self.value)
    }
}

impl<T> From<bool> for Mask<T> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl<T> From<Mask<T>> for bool {
    #[inline]
    fn from(mask: Mask<T>) -> Self {
        mask.value
    }
}

impl<T> Not for Mask<T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self::new(!self.value)
    }
}

impl<T> BitAnd for Mask<T> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::new(self.value & rhs.value)
    }
}

impl<T> BitOr for Mask<T> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.value | rhs.value)
    }
}
