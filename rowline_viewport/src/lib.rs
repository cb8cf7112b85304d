// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rowline_viewport --heading-base-level=0

//! Rowline Viewport: the host-facing side of list virtualization.
//!
//! [`rowline_window`] computes render windows as pure functions. This crate
//! wraps those functions in a [`ViewportTracker`] that a UI host drives from
//! its event loop:
//!
//! - Scroll and resize notifications ([`ViewportTracker::on_scroll`],
//!   [`ViewportTracker::on_resize`], or the `kurbo` based
//!   [`ViewportTracker::on_container_rect`]) only record the latest values.
//! - Once per repaint the host calls [`ViewportTracker::on_frame`], which runs
//!   at most one resolve and yields a new [`RenderWindow`] only if it changed.
//! - Structural changes (item count, height rule) rebuild the extent model
//!   immediately, so no frame resolves against stale heights.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use rowline_viewport::ViewportTracker;
//! use rowline_window::{HeightRule, ScrollAlign};
//!
//! let mut tracker = ViewportTracker::new(0, HeightRule::fixed(32.0), 0.0).unwrap();
//! tracker.on_container_rect(Rect::new(0.0, 0.0, 480.0, 640.0));
//! tracker.set_item_count(25_000).unwrap();
//! tracker.scroll_to_index(12_000, ScrollAlign::Center);
//!
//! if let Some(window) = tracker.on_frame() {
//!     assert!(window.contains(12_000));
//!     // Paint `window.range()` at `window.offset_y()` inside a spacer of
//!     // `tracker.content_size(480.0)`.
//! }
//! ```
//!
//! This crate is `no_std`.
//!
//! [`RenderWindow`]: rowline_window::RenderWindow

#![no_std]

mod container;
mod pending;
mod source;
mod tracker;

pub use pending::Pending;
pub use source::ExtentSource;
pub use tracker::ViewportTracker;
