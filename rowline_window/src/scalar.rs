// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for heights, offsets, and scroll positions.
//!
//! Only `f32` and `f64` implement it.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for item heights, offsets, and scroll positions.
///
/// The trait is deliberately minimal and geared toward floating-point
/// coordinates. Conversions to indices saturate instead of wrapping, so
/// callers can clamp the result into `0..len` afterwards.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Clamps negative values and NaN to zero.
    fn clamp_non_negative(self) -> Self {
        if self > Self::zero() {
            self
        } else {
            Self::zero()
        }
    }

    /// Floors a non-negative value into an index.
    ///
    /// Negative values and NaN saturate to `0`, values past `usize::MAX`
    /// saturate to `usize::MAX`.
    fn floor_to_usize(self) -> usize;

    /// Rounds a non-negative value up into an index, saturating like
    /// [`Scalar::floor_to_usize`].
    fn ceil_to_usize(self) -> usize {
        let floor = self.floor_to_usize();
        if Self::from_usize(floor) < self {
            floor.saturating_add(1)
        } else {
            floor
        }
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate; truncation of a non-negative value is its floor"
        )]
        {
            self as usize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate; truncation of a non-negative value is its floor"
        )]
        {
            self as usize
        }
    }
}
