// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container geometry in `kurbo` types.
//!
//! Hosts usually observe their scroll container as a rectangle or size in
//! logical pixels. These helpers take those directly and hand back the
//! rectangles a renderer needs: the spacer, the visible region, and the
//! materialized slice, all in content coordinates (origin at the top of the
//! first item).

use kurbo::{Rect, Size};
use rowline_window::ExtentModel;

use crate::ViewportTracker;

impl ViewportTracker<f64> {
    /// Records a resize from the container's new size; only the height matters.
    pub fn on_container_resize(&mut self, size: Size) {
        self.on_resize(size.height);
    }

    /// Records a resize from the container's new bounds.
    pub fn on_container_rect(&mut self, rect: Rect) {
        self.on_resize(rect.height());
    }

    /// Size of the spacer that gives the scroll container its full extent.
    #[must_use]
    pub fn content_size(&self, width: f64) -> Size {
        Size::new(width, self.source().total_extent())
    }

    /// Part of the content currently inside the viewport.
    #[must_use]
    pub fn visible_rect(&self, width: f64) -> Rect {
        let top = self.scroll_offset();
        let bottom = (top + self.viewport_size().max(0.0)).min(self.source().total_extent());
        Rect::new(0.0, top, width, bottom.max(top))
    }

    /// Area covered by the most recently emitted window.
    ///
    /// Zero-sized at the origin for the empty window.
    #[must_use]
    pub fn window_rect(&self, width: f64) -> Rect {
        let window = self.window();
        match window.end_index() {
            Some(end) => Rect::new(
                0.0,
                window.offset_y(),
                width,
                self.source().offset_of(end + 1),
            ),
            None => Rect::ZERO,
        }
    }
}
