// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll targets: bringing an index into view, and tail anchoring.
//!
//! Tail anchoring covers append-only feeds (activity logs, chat, audit
//! trails): the host asks [`is_at_tail`] before appending, and if the view was
//! pinned to the end it restores [`tail_scroll_offset`] afterwards so new rows
//! stay visible.
//!
//! ```rust
//! use rowline_window::{HeightRule, PositionTable, is_at_tail, tail_scroll_offset};
//!
//! let rule = HeightRule::fixed(10.0_f32);
//! let table = PositionTable::build(3, &rule).unwrap();
//! let viewport = 20.0;
//! let scroll = tail_scroll_offset(&table, viewport);
//! assert!(is_at_tail(&table, scroll, viewport, 1.0));
//!
//! // Append a row and re-pin.
//! let table = PositionTable::build(4, &rule).unwrap();
//! assert!(!is_at_tail(&table, scroll, viewport, 1.0));
//! let scroll = tail_scroll_offset(&table, viewport);
//! assert_eq!(scroll, 20.0);
//! ```

use crate::{ExtentModel, Scalar, clamp_scroll_offset};

/// Where an item should land in the viewport when scrolled to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Align the item's top with the viewport top.
    Start,
    /// Align the item's bottom with the viewport bottom.
    End,
    /// Center the item in the viewport.
    Center,
    /// Scroll as little as possible: leave the offset alone when the item is
    /// fully visible, otherwise align whichever edge is closer.
    #[default]
    Nearest,
}

/// Scroll offset that brings `index` into view under `align`.
///
/// `index` is clamped to the last item, and the result is clamped like any
/// other scroll offset, so items near either end align as far as the content
/// allows. `current` is only consulted for [`ScrollAlign::Nearest`]. An empty
/// model always yields zero.
#[must_use]
pub fn scroll_offset_for_index<M: ExtentModel>(
    model: &M,
    index: usize,
    viewport_size: M::Scalar,
    align: ScrollAlign,
    current: M::Scalar,
) -> M::Scalar {
    if model.is_empty() {
        return M::Scalar::zero();
    }
    let index = index.min(model.len() - 1);
    let viewport = viewport_size.clamp_non_negative();
    let top = model.offset_of(index);
    let bottom = model.offset_of(index + 1);
    let height = bottom - top;

    let target = match align {
        ScrollAlign::Start => top,
        ScrollAlign::End => bottom - viewport,
        ScrollAlign::Center => top - (viewport - height) / M::Scalar::from_usize(2),
        ScrollAlign::Nearest => {
            let current = clamp_scroll_offset(model, current, viewport);
            if top < current || height > viewport {
                // Taller-than-viewport items show their top.
                if top <= current && bottom >= current + viewport {
                    current
                } else {
                    top
                }
            } else if bottom > current + viewport {
                bottom - viewport
            } else {
                current
            }
        }
    };
    clamp_scroll_offset(model, target, viewport)
}

/// Scroll offset that keeps the end of the content visible.
///
/// Zero when the content fits entirely inside the viewport.
#[must_use]
pub fn tail_scroll_offset<M: ExtentModel>(model: &M, viewport_size: M::Scalar) -> M::Scalar {
    (model.total_extent() - viewport_size.clamp_non_negative()).clamp_non_negative()
}

/// Returns `true` if `scroll_offset` is within `epsilon` of the tail offset.
///
/// The check is asymmetric: any offset at most `epsilon` above the tail (and
/// anything past it) counts as anchored, so rows that sit "almost at the
/// bottom" keep following new content.
#[must_use]
pub fn is_at_tail<M: ExtentModel>(
    model: &M,
    scroll_offset: M::Scalar,
    viewport_size: M::Scalar,
    epsilon: M::Scalar,
) -> bool {
    let tail = tail_scroll_offset(model, viewport_size);
    scroll_offset.clamp_non_negative() + epsilon >= tail
}
