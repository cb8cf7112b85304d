// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prefix-sum position table for variable item heights.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::check_height;
use crate::{ExtentModel, HeightError, HeightRule, Scalar};

/// Cumulative item offsets: `offsets[0] == 0`, `offsets[i + 1] == offsets[i] + height(i)`.
///
/// A table for `len` items always stores `len + 1` offsets, the last one being
/// the total height. The table is immutable once built; structural changes
/// (a new item count or height rule) build a fresh table.
///
/// Lookups by offset are binary searches, so resolving a window stays
/// `O(log n)` however long the list gets.
///
/// ```rust
/// use rowline_window::{ExtentModel, HeightRule, PositionTable};
///
/// let rule = HeightRule::variable(|i| if i % 2 == 0 { 20.0 } else { 30.0 });
/// let table = PositionTable::<f64>::build(4, &rule).unwrap();
/// assert_eq!(table.offsets(), &[0.0, 20.0, 50.0, 70.0, 100.0]);
/// assert_eq!(table.index_at_offset(55.0), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PositionTable<S> {
    offsets: Vec<S>,
}

impl<S: Scalar> Default for PositionTable<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Scalar> PositionTable<S> {
    /// Table for an empty list: a single zero offset.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            offsets: vec![S::zero()],
        }
    }

    /// Builds the table for `len` items under `rule`.
    ///
    /// Runs in `O(len)`. Fails on the first height that is not positive and
    /// finite, or if the total overflows.
    pub fn build(len: usize, rule: &HeightRule<S>) -> Result<Self, HeightError<S>> {
        match rule {
            HeightRule::Fixed(height) => Self::uniform(len, *height),
            HeightRule::Variable(height_of) => Self::from_fn(len, |index| height_of(index)),
        }
    }

    /// Offsets are `i * height` rather than a running sum, so they match
    /// [`FixedExtentModel`](crate::FixedExtentModel) bit for bit.
    fn uniform(len: usize, height: S) -> Result<Self, HeightError<S>> {
        let height = check_height(0, height)?;
        let offsets: Vec<S> = (0..=len).map(|i| S::from_usize(i) * height).collect();
        let total = offsets[len];
        if !total.is_finite() {
            return Err(HeightError::NonFiniteTotal { len });
        }
        log::debug!("built uniform position table for {len} items, total height {total:?}");
        Ok(Self { offsets })
    }

    /// Builds the table for `len` items, calling `height_of` once per index in order.
    pub fn from_fn(
        len: usize,
        mut height_of: impl FnMut(usize) -> S,
    ) -> Result<Self, HeightError<S>> {
        let mut offsets = Vec::with_capacity(len.saturating_add(1));
        let mut total = S::zero();
        offsets.push(total);
        for index in 0..len {
            total = total + check_height(index, height_of(index))?;
            offsets.push(total);
        }
        if !total.is_finite() {
            return Err(HeightError::NonFiniteTotal { len });
        }
        log::debug!("built position table for {len} items, total height {total:?}");
        Ok(Self { offsets })
    }

    /// Builds the table from explicit item heights.
    pub fn from_heights(heights: &[S]) -> Result<Self, HeightError<S>> {
        Self::from_fn(heights.len(), |index| heights[index])
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns `true` if the table describes no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.len() == 1
    }

    /// All `len + 1` offsets.
    #[must_use]
    pub fn offsets(&self) -> &[S] {
        &self.offsets
    }

    /// Total height of all items.
    #[must_use]
    pub fn total_height(&self) -> S {
        self.offsets[self.offsets.len() - 1]
    }
}

impl<S: Scalar> ExtentModel for PositionTable<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn total_extent(&self) -> S {
        self.total_height()
    }

    fn offset_of(&self, index: usize) -> S {
        self.offsets[index.min(Self::len(self))]
    }

    fn index_at_offset(&self, offset: S) -> usize {
        // Number of offsets at or before `offset`; the last of them is the answer.
        self.offsets
            .partition_point(|&o| o <= offset)
            .saturating_sub(1)
    }

    fn first_index_at_or_after(&self, offset: S, from: usize) -> usize {
        let len = Self::len(self);
        let from = from.min(len);
        let skipped = self.offsets[from..].partition_point(|&o| o < offset);
        (from + skipped).min(len)
    }
}
