// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Scalar;

/// A 1D strip of items `0..len` with prefix-sum style queries.
///
/// Offsets are indexed `0..=len`: `offset_of(0)` is zero, `offset_of(len)` is
/// the total extent, and item `i` occupies `offset_of(i)..offset_of(i + 1)`.
/// Offsets must be non-decreasing in `index`.
///
/// [`resolve`](crate::resolve) only talks to a model through this trait, so the
/// same boundary logic runs over a binary-searched [`PositionTable`] and over
/// the closed-form [`FixedExtentModel`].
///
/// [`PositionTable`]: crate::PositionTable
/// [`FixedExtentModel`]: crate::FixedExtentModel
pub trait ExtentModel {
    /// Scalar type used for extents and offsets.
    type Scalar: Scalar;

    /// Number of items in the strip.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all item extents.
    fn total_extent(&self) -> Self::Scalar;

    /// Offset of the leading edge of `index`.
    ///
    /// Indices past `len` are clamped, so `offset_of(len + k)` is the total
    /// extent.
    fn offset_of(&self, index: usize) -> Self::Scalar;

    /// Extent of a single item, or zero past the end.
    fn extent_of(&self, index: usize) -> Self::Scalar {
        if index >= self.len() {
            return Self::Scalar::zero();
        }
        self.offset_of(index + 1) - self.offset_of(index)
    }

    /// Greatest `i` in `0..=len` with `offset_of(i) <= offset`.
    ///
    /// Offsets before the start (and NaN) map to `0`; offsets at or past the
    /// total extent map to `len`.
    fn index_at_offset(&self, offset: Self::Scalar) -> usize;

    /// Smallest `j` in `from..=len` with `offset_of(j) >= offset`, or `len`
    /// when the offset lies past the end.
    ///
    /// `from` lets callers resume a search from an index already known to lie
    /// at or before the answer.
    fn first_index_at_or_after(&self, offset: Self::Scalar, from: usize) -> usize;
}
