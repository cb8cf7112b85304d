// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::check_height;
use crate::{ExtentModel, HeightError, Scalar};

/// Extent model where every item has the same height.
///
/// All queries are closed-form arithmetic. Item `i` starts at `i * height`;
/// `index_at_offset` starts from `floor(offset / height)` and
/// `first_index_at_or_after` from `ceil(offset / height)`, each nudged by at
/// most a step or two so the answer agrees exactly with those products. No
/// table is allocated, so this is the constant-time fast path for uniform
/// rows, and it resolves the same windows as a [`PositionTable`] built for a
/// fixed [`HeightRule`].
///
/// [`PositionTable`]: crate::PositionTable
/// [`HeightRule`]: crate::HeightRule
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedExtentModel<S> {
    len: usize,
    height: S,
}

impl<S: Scalar> FixedExtentModel<S> {
    /// Creates a model of `len` items of `height` each.
    pub fn new(len: usize, height: S) -> Result<Self, HeightError<S>> {
        let height = check_height(0, height)?;
        if !(S::from_usize(len) * height).is_finite() {
            return Err(HeightError::NonFiniteTotal { len });
        }
        Ok(Self { len, height })
    }

    /// Height shared by every item.
    #[must_use]
    pub fn height(&self) -> S {
        self.height
    }
}

impl<S: Scalar> ExtentModel for FixedExtentModel<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.len
    }

    fn total_extent(&self) -> S {
        S::from_usize(self.len) * self.height
    }

    fn offset_of(&self, index: usize) -> S {
        S::from_usize(index.min(self.len)) * self.height
    }

    fn extent_of(&self, index: usize) -> S {
        if index < self.len {
            self.height
        } else {
            S::zero()
        }
    }

    fn index_at_offset(&self, offset: S) -> usize {
        let mut index = (offset / self.height).floor_to_usize().min(self.len);
        // The quotient can round across an item top; settle on the products.
        while index > 0 && self.offset_of(index) > offset {
            index -= 1;
        }
        while index < self.len && self.offset_of(index + 1) <= offset {
            index += 1;
        }
        index
    }

    fn first_index_at_or_after(&self, offset: S, from: usize) -> usize {
        let from = from.min(self.len);
        let mut index = (offset / self.height)
            .ceil_to_usize()
            .max(from)
            .min(self.len);
        while index > from && self.offset_of(index - 1) >= offset {
            index -= 1;
        }
        while index < self.len && self.offset_of(index) < offset {
            index += 1;
        }
        index
    }
}
