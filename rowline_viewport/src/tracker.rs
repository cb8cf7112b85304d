// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rowline_window::{
    DEFAULT_OVERSCAN, ExtentModel, HeightError, HeightRule, RenderWindow, Scalar, ScrollAlign,
    clamp_scroll_offset, is_at_tail, resolve, scroll_offset_for_index, tail_scroll_offset,
};

use crate::{ExtentSource, Pending};

/// Inputs of the most recent resolve; a frame with an equal key is skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FrameKey<S> {
    generation: u64,
    scroll_offset: S,
    viewport_size: S,
    overscan: usize,
}

/// Feeds host scroll and resize notifications into window resolution.
///
/// `ViewportTracker` owns the item count, the [`HeightRule`], and the extent
/// model built from them, and records the latest scroll offset and viewport
/// size reported by the host. It guarantees two things:
///
/// - **No stale models.** Structural changes ([`set_item_count`],
///   [`set_height_rule`], [`refresh_heights`]) rebuild the model before they
///   return, so a resolve never sees an outdated table.
/// - **At most one resolve per frame.** Notifications ([`on_scroll`],
///   [`on_resize`]) only record values and set [`Pending`] bits. The host calls
///   [`on_frame`] once per repaint; bursts of events in between cost a single
///   `O(log n)` resolve, and none at all if the inputs did not change.
///
/// ```rust
/// use rowline_window::HeightRule;
/// use rowline_viewport::ViewportTracker;
///
/// let mut tracker = ViewportTracker::new(1_000, HeightRule::fixed(50.0), 300.0)
///     .unwrap()
///     .with_overscan(2);
///
/// // A burst of wheel events within one frame.
/// tracker.on_scroll(40.0);
/// tracker.on_scroll(80.0);
/// tracker.on_scroll(100.0);
///
/// let window = tracker.on_frame().unwrap();
/// assert_eq!(window.range(), 0..11);
/// assert_eq!(tracker.resolve_count(), 1);
///
/// // Nothing changed since: no work, nothing emitted.
/// assert!(tracker.on_frame().is_none());
/// ```
///
/// [`set_item_count`]: Self::set_item_count
/// [`set_height_rule`]: Self::set_height_rule
/// [`refresh_heights`]: Self::refresh_heights
/// [`on_scroll`]: Self::on_scroll
/// [`on_resize`]: Self::on_resize
/// [`on_frame`]: Self::on_frame
#[derive(Clone, Debug)]
pub struct ViewportTracker<S> {
    rule: HeightRule<S>,
    source: ExtentSource<S>,
    generation: u64,
    overscan: usize,
    scroll_offset: S,
    viewport_size: S,
    follow_tail: bool,
    tail_epsilon: S,
    pending: Pending,
    last_key: Option<FrameKey<S>>,
    emitted: Option<RenderWindow<S>>,
    resolve_count: u64,
}

impl<S: Scalar> ViewportTracker<S> {
    /// Creates a tracker for `item_count` items under `rule`, scrolled to the top.
    ///
    /// Uses [`DEFAULT_OVERSCAN`] and a tail tolerance of one unit. The first
    /// [`on_frame`](Self::on_frame) always resolves.
    pub fn new(
        item_count: usize,
        rule: HeightRule<S>,
        viewport_size: S,
    ) -> Result<Self, HeightError<S>> {
        let source = ExtentSource::build(item_count, &rule)?;
        Ok(Self {
            rule,
            source,
            generation: 0,
            overscan: DEFAULT_OVERSCAN,
            scroll_offset: S::zero(),
            viewport_size,
            follow_tail: false,
            tail_epsilon: S::from_usize(1),
            pending: Pending::STRUCTURE,
            last_key: None,
            emitted: None,
            resolve_count: 0,
        })
    }

    /// Sets the overscan count, builder style.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.set_overscan(overscan);
        self
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.source.len()
    }

    /// Current height rule.
    #[must_use]
    pub fn height_rule(&self) -> &HeightRule<S> {
        &self.rule
    }

    /// The extent model built from the current item count and rule.
    #[must_use]
    pub fn source(&self) -> &ExtentSource<S> {
        &self.source
    }

    /// Counter bumped on every successful structural change.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current overscan count.
    #[must_use]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Changes the overscan count.
    pub fn set_overscan(&mut self, overscan: usize) {
        if self.overscan != overscan {
            self.overscan = overscan;
            self.pending |= Pending::OVERSCAN;
        }
    }

    /// Latest viewport size reported by the host.
    #[must_use]
    pub fn viewport_size(&self) -> S {
        self.viewport_size
    }

    /// Scroll offset clamped to the current content.
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        clamp_scroll_offset(&self.source, self.scroll_offset, self.viewport_size)
    }

    /// Changes recorded since the last frame.
    #[must_use]
    pub fn pending(&self) -> Pending {
        self.pending
    }

    /// Number of resolves run so far.
    #[must_use]
    pub fn resolve_count(&self) -> u64 {
        self.resolve_count
    }

    /// The most recently emitted window, or the empty window before the first frame.
    #[must_use]
    pub fn window(&self) -> RenderWindow<S> {
        self.emitted.unwrap_or_else(RenderWindow::empty)
    }

    /// Records a scroll notification from the host.
    ///
    /// Out-of-range offsets (elastic overscroll) are kept as reported and
    /// clamped when the frame resolves.
    pub fn on_scroll(&mut self, scroll_offset: S) {
        self.scroll_offset = scroll_offset;
        self.pending |= Pending::SCROLL;
    }

    /// Records a container resize notification from the host.
    ///
    /// Transient non-positive sizes are accepted and treated as a collapsed
    /// viewport until the next resize.
    pub fn on_resize(&mut self, viewport_size: S) {
        self.viewport_size = viewport_size;
        self.pending |= Pending::RESIZE;
    }

    /// Resolves the window for this frame, if anything changed.
    ///
    /// Returns `Some` only when the new window differs from the last emitted
    /// one. Call this once per host repaint.
    pub fn on_frame(&mut self) -> Option<RenderWindow<S>> {
        if self.pending.is_empty() {
            return None;
        }
        let pending = core::mem::take(&mut self.pending);

        let viewport_size = self.viewport_size.clamp_non_negative();
        // The reported offset is kept as is; a transient clamp must not stick.
        let scroll_offset = clamp_scroll_offset(&self.source, self.scroll_offset, viewport_size);

        let key = FrameKey {
            generation: self.generation,
            scroll_offset,
            viewport_size,
            overscan: self.overscan,
        };
        if self.last_key == Some(key) {
            log::trace!("frame skipped, inputs unchanged after {pending:?}");
            return None;
        }
        self.last_key = Some(key);

        let window = resolve(&self.source, scroll_offset, viewport_size, self.overscan);
        self.resolve_count += 1;
        log::trace!(
            "resolved {:?} for {pending:?} at scroll {scroll_offset:?}",
            window.range()
        );
        if self.emitted == Some(window) {
            return None;
        }
        self.emitted = Some(window);
        Some(window)
    }

    /// Changes the item count, rebuilding the model.
    ///
    /// A no-op when the count is unchanged; use
    /// [`refresh_heights`](Self::refresh_heights) to force a rebuild. On error
    /// the tracker keeps its previous model.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<(), HeightError<S>> {
        if item_count == self.source.len() {
            return Ok(());
        }
        let rule = self.rule.clone();
        self.rebuild(item_count, rule)
    }

    /// Replaces the height rule, rebuilding the model.
    ///
    /// On error the tracker keeps its previous rule and model.
    pub fn set_height_rule(&mut self, rule: HeightRule<S>) -> Result<(), HeightError<S>> {
        self.rebuild(self.source.len(), rule)
    }

    /// Rebuilds the model because the heights behind a variable rule changed.
    pub fn refresh_heights(&mut self) -> Result<(), HeightError<S>> {
        let rule = self.rule.clone();
        self.rebuild(self.source.len(), rule)
    }

    fn rebuild(&mut self, item_count: usize, rule: HeightRule<S>) -> Result<(), HeightError<S>> {
        let pinned = self.follow_tail && self.is_at_tail();
        let source = ExtentSource::build(item_count, &rule).inspect_err(|err| {
            log::warn!("rejected structural change to {item_count} items: {err}");
        })?;
        self.source = source;
        self.rule = rule;
        self.generation += 1;
        self.pending |= Pending::STRUCTURE;
        if pinned {
            self.scroll_offset = tail_scroll_offset(&self.source, self.viewport_size);
        }
        log::debug!(
            "structure generation {} with {item_count} items, total height {:?}",
            self.generation,
            self.source.total_extent()
        );
        Ok(())
    }

    /// Scrolls so that `index` is visible with the given alignment.
    ///
    /// Returns the new scroll offset, which the host should apply to its
    /// native scroll container.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> S {
        let target = scroll_offset_for_index(
            &self.source,
            index,
            self.viewport_size,
            align,
            self.scroll_offset(),
        );
        self.on_scroll(target);
        target
    }

    /// Scrolls to the end of the content and returns the new offset.
    pub fn scroll_to_tail(&mut self) -> S {
        let target = tail_scroll_offset(&self.source, self.viewport_size);
        self.on_scroll(target);
        target
    }

    /// Returns `true` if the view is pinned to the end of the content.
    #[must_use]
    pub fn is_at_tail(&self) -> bool {
        is_at_tail(
            &self.source,
            self.scroll_offset,
            self.viewport_size,
            self.tail_epsilon,
        )
    }

    /// When enabled, a structural change made while the view is at the tail
    /// keeps it at the (new) tail.
    pub fn set_follow_tail(&mut self, follow: bool) {
        self.follow_tail = follow;
    }

    /// Returns `true` if tail following is enabled.
    #[must_use]
    pub fn follows_tail(&self) -> bool {
        self.follow_tail
    }

    /// Sets how far above the tail the view may be and still count as pinned.
    pub fn set_tail_epsilon(&mut self, epsilon: S) {
        self.tail_epsilon = epsilon.clamp_non_negative();
    }
}
