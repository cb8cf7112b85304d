// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window resolution: which items to materialize for a scroll position.

use core::ops::Range;

use crate::{ExtentModel, FixedExtentModel, HeightError, Scalar};

/// Overscan used when the host does not pick one.
pub const DEFAULT_OVERSCAN: usize = 3;

/// The slice of a list that must be materialized for the current viewport.
///
/// A non-empty window covers the inclusive index range
/// `start_index..=end_index`. Hosts render exactly those items, translated by
/// [`offset_y`](Self::offset_y), inside a spacer of
/// [`total_height`](Self::total_height).
///
/// An empty list resolves to the empty window, whose indices are `None`, whose
/// [`range`](Self::range) is `0..0`, and whose offsets are zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderWindow<S> {
    span: Option<(usize, usize)>,
    offset_y: S,
    total_height: S,
}

impl<S: Scalar> RenderWindow<S> {
    /// The window of an empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            span: None,
            offset_y: S::zero(),
            total_height: S::zero(),
        }
    }

    /// First materialized index, or `None` for the empty window.
    #[must_use]
    pub fn start_index(&self) -> Option<usize> {
        self.span.map(|(start, _)| start)
    }

    /// Last materialized index (inclusive), or `None` for the empty window.
    #[must_use]
    pub fn end_index(&self) -> Option<usize> {
        self.span.map(|(_, end)| end)
    }

    /// Materialized indices as a half-open range, convenient for iteration.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        match self.span {
            Some((start, end)) => start..end + 1,
            None => 0..0,
        }
    }

    /// Number of materialized items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range().len()
    }

    /// Returns `true` for the empty window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    /// Returns `true` if `index` is materialized by this window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Offset of the first materialized item within the full content.
    ///
    /// This is also the height of the spacer before the slice.
    #[must_use]
    pub fn offset_y(&self) -> S {
        self.offset_y
    }

    /// Height of the full virtual content.
    #[must_use]
    pub fn total_height(&self) -> S {
        self.total_height
    }

    /// Offset of `index` relative to the top of the materialized slice.
    ///
    /// Returns `None` when `index` is not part of the window. `model` must be
    /// the model the window was resolved against.
    #[must_use]
    pub fn item_offset<M>(&self, model: &M, index: usize) -> Option<S>
    where
        M: ExtentModel<Scalar = S>,
    {
        self.contains(index)
            .then(|| model.offset_of(index) - self.offset_y)
    }

    /// Height of the spacer after the materialized slice.
    #[must_use]
    pub fn after_height<M>(&self, model: &M) -> S
    where
        M: ExtentModel<Scalar = S>,
    {
        match self.span {
            Some((_, end)) => {
                (self.total_height - model.offset_of(end + 1)).clamp_non_negative()
            }
            None => S::zero(),
        }
    }
}

/// Clamps a scroll offset into `[0, max(0, total - viewport)]`.
///
/// Elastic overscroll and mid-resize layouts routinely report offsets outside
/// the content; they are clamped, never rejected. NaN clamps to zero.
#[must_use]
pub fn clamp_scroll_offset<M: ExtentModel>(
    model: &M,
    scroll_offset: M::Scalar,
    viewport_size: M::Scalar,
) -> M::Scalar {
    let viewport = viewport_size.clamp_non_negative();
    let max_scroll = (model.total_extent() - viewport).clamp_non_negative();
    let clamped = scroll_offset.clamp_non_negative().min(max_scroll);
    if clamped != scroll_offset {
        log::trace!("clamped scroll offset {scroll_offset:?} to {clamped:?}");
    }
    clamped
}

/// Resolves the window of items to materialize.
///
/// The start boundary is the last item whose top is at or above the viewport
/// top; the end boundary is the first item whose top is at or below the
/// viewport bottom. Both are found by [`ExtentModel`] searches (binary search
/// for a [`PositionTable`](crate::PositionTable)), widened by `overscan` items
/// on each side and clamped to `0..len`.
///
/// `scroll_offset` is clamped with [`clamp_scroll_offset`], and a
/// non-positive or NaN `viewport_size` is treated as zero.
///
/// ```rust
/// use rowline_window::{FixedExtentModel, resolve};
///
/// let model = FixedExtentModel::new(1_000, 50.0).unwrap();
/// let window = resolve(&model, 100.0, 300.0, 2);
/// assert_eq!(window.start_index(), Some(0));
/// assert_eq!(window.end_index(), Some(10));
/// assert_eq!(window.offset_y(), 0.0);
/// assert_eq!(window.total_height(), 50_000.0);
/// ```
#[must_use]
pub fn resolve<M: ExtentModel>(
    model: &M,
    scroll_offset: M::Scalar,
    viewport_size: M::Scalar,
    overscan: usize,
) -> RenderWindow<M::Scalar> {
    let len = model.len();
    if len == 0 {
        return RenderWindow::empty();
    }
    let last = len - 1;
    let viewport = viewport_size.clamp_non_negative();
    let scroll = clamp_scroll_offset(model, scroll_offset, viewport);

    let raw_start = model.index_at_offset(scroll).min(last);
    let raw_end = model
        .first_index_at_or_after(scroll + viewport, raw_start)
        .min(last);

    let start = raw_start.saturating_sub(overscan);
    let end = raw_end.saturating_add(overscan).min(last);
    RenderWindow {
        span: Some((start, end)),
        offset_y: model.offset_of(start),
        total_height: model.total_extent(),
    }
}

/// Constant-time resolution for lists where every item has `height`.
///
/// Equivalent to [`resolve`] over a [`FixedExtentModel`]: the raw start is
/// `floor(scroll / height)` and the raw end is
/// `ceil((scroll + viewport) / height)`, with the same clamping and overscan.
pub fn resolve_fixed<S: Scalar>(
    len: usize,
    height: S,
    scroll_offset: S,
    viewport_size: S,
    overscan: usize,
) -> Result<RenderWindow<S>, HeightError<S>> {
    let model = FixedExtentModel::new(len, height)?;
    Ok(resolve(&model, scroll_offset, viewport_size, overscan))
}

#[cfg(test)]
mod tests {
    use super::{RenderWindow, clamp_scroll_offset, resolve, resolve_fixed};
    use crate::{FixedExtentModel, PositionTable};

    #[test]
    fn fixed_height_scroll_near_top() {
        let window = resolve_fixed(1_000, 50.0_f64, 100.0, 300.0, 2).unwrap();
        assert_eq!(window.start_index(), Some(0));
        assert_eq!(window.end_index(), Some(10));
        assert_eq!(window.offset_y(), 0.0);
        assert_eq!(window.total_height(), 50_000.0);
        assert_eq!(window.range(), 0..11);
        assert_eq!(window.len(), 11);
    }

    #[test]
    fn fixed_height_scroll_at_bottom_clamps_end() {
        let window = resolve_fixed(1_000, 50.0_f64, 49_700.0, 300.0, 2).unwrap();
        assert_eq!(window.end_index(), Some(999));
        // Raw start 994, minus overscan.
        assert_eq!(window.start_index(), Some(992));
        assert_eq!(window.offset_y(), 49_600.0);
    }

    #[test]
    fn empty_list_yields_empty_window() {
        let table = PositionTable::<f64>::empty();
        let window = resolve(&table, 120.0, 300.0, 4);
        assert_eq!(window, RenderWindow::empty());
        assert!(window.is_empty());
        assert_eq!(window.start_index(), None);
        assert_eq!(window.end_index(), None);
        assert_eq!(window.range(), 0..0);
        assert_eq!(window.len(), 0);
        assert_eq!(window.total_height(), 0.0);
        assert_eq!(window.offset_y(), 0.0);
        assert!(!window.contains(0));
    }

    #[test]
    fn viewport_taller_than_content_covers_everything() {
        let table = PositionTable::from_heights(&[10.0_f32, 20.0, 30.0]).unwrap();
        let window = resolve(&table, 25.0, 500.0, 0);
        assert_eq!(window.range(), 0..3);
        assert_eq!(window.offset_y(), 0.0);
    }

    #[test]
    fn straddling_items_are_included() {
        // offsets: 0, 10, 30, 60, 100
        let table = PositionTable::from_heights(&[10.0_f64, 20.0, 30.0, 40.0]).unwrap();
        // Viewport [15, 35) touches items 1 and 2; item 3 is the first whose
        // top lies at or past the bottom edge and closes the window.
        let window = resolve(&table, 15.0, 20.0, 0);
        assert_eq!(window.range(), 1..4);
        assert_eq!(window.offset_y(), 10.0);
        // Viewport [10, 30) ends exactly on the top of item 2, which is kept.
        let window = resolve(&table, 10.0, 20.0, 0);
        assert_eq!(window.range(), 1..3);
    }

    #[test]
    fn out_of_range_interaction_is_clamped() {
        let model = FixedExtentModel::new(100, 10.0_f64).unwrap();
        assert_eq!(clamp_scroll_offset(&model, -40.0, 50.0), 0.0);
        assert_eq!(clamp_scroll_offset(&model, 5_000.0, 50.0), 950.0);
        assert_eq!(clamp_scroll_offset(&model, f64::NAN, 50.0), 0.0);
        assert_eq!(clamp_scroll_offset(&model, 300.0, 2_000.0), 0.0);

        let overscrolled = resolve(&model, -40.0, 50.0, 1);
        assert_eq!(overscrolled, resolve(&model, 0.0, 50.0, 1));
        let past_end = resolve(&model, 1e9, 50.0, 1);
        assert_eq!(past_end.end_index(), Some(99));
    }

    #[test]
    fn collapsed_viewport_still_resolves() {
        let model = FixedExtentModel::new(100, 10.0_f64).unwrap();
        let window = resolve(&model, 55.0, 0.0, 0);
        assert_eq!(window.range(), 5..7);
        let window = resolve(&model, 50.0, -20.0, 0);
        assert_eq!(window.range(), 5..6);
        let window = resolve(&model, 50.0, f64::NAN, 1);
        assert_eq!(window.range(), 4..7);
    }

    #[test]
    fn item_offsets_are_relative_to_the_slice() {
        let table = PositionTable::from_heights(&[10.0_f64, 20.0, 30.0, 40.0, 50.0]).unwrap();
        let window = resolve(&table, 35.0, 10.0, 0);
        assert_eq!(window.range(), 2..4);
        assert_eq!(window.item_offset(&table, 2), Some(0.0));
        assert_eq!(window.item_offset(&table, 3), Some(30.0));
        assert_eq!(window.item_offset(&table, 4), None);
        // offsets: 0, 10, 30, 60, 100, 150
        assert_eq!(window.after_height(&table), 50.0);
        assert_eq!(RenderWindow::<f64>::empty().after_height(&table), 0.0);
    }
}
