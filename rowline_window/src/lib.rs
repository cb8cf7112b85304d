// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rowline_window --heading-base-level=0

//! Rowline Window: the windowing core of a virtualized list.
//!
//! Given a potentially huge ordered collection and a bounded viewport, this
//! crate computes which contiguous index range must be materialized and where
//! that slice sits inside the full-size scrollable content. It never looks at
//! item data; hosts own the items and the rendering.
//!
//! The core concepts are:
//!
//! - [`HeightRule`]: a constant height or a per-index height callback.
//! - [`PositionTable`]: the prefix sums of item heights, `len + 1` offsets
//!   from `0` to the total height, built in one `O(n)` pass.
//! - [`FixedExtentModel`]: closed-form offsets for uniform heights, the
//!   constant-time fast path.
//! - [`ExtentModel`]: the query interface both of the above implement.
//! - [`resolve`]: scroll offset + viewport size + overscan to a
//!   [`RenderWindow`], in `O(log n)` over a position table.
//! - [`scroll_offset_for_index`] with [`ScrollAlign`], plus the tail anchoring
//!   helpers [`tail_scroll_offset`] and [`is_at_tail`].
//!
//! Everything here is a pure function of its inputs. Tables are rebuilt from
//! scratch on structural changes and then treated as immutable, and every
//! resolve produces a fresh `Copy` window.
//!
//! ## Minimal example
//!
//! ```rust
//! use rowline_window::{HeightRule, PositionTable, resolve};
//!
//! // 10 000 rows, alternating between 24 and 48 logical pixels tall.
//! let rule = HeightRule::variable(|i| if i % 2 == 0 { 24.0 } else { 48.0 });
//! let table = PositionTable::<f64>::build(10_000, &rule).unwrap();
//!
//! let window = resolve(&table, 3_600.0, 600.0, 3);
//! for index in window.range() {
//!     let _top = window.item_offset(&table, index).unwrap();
//!     // Host paints item `index` at `_top` inside a slice translated by
//!     // `window.offset_y()`.
//! }
//! assert_eq!(window.total_height(), 360_000.0);
//! ```
//!
//! Heights must be positive and finite. Building a table from anything else
//! fails with [`HeightError`]; out-of-range scroll offsets and collapsed
//! viewports are clamped instead.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod align;
mod error;
mod fixed;
mod model;
mod rule;
mod scalar;
mod table;
mod window;

pub use align::{ScrollAlign, is_at_tail, scroll_offset_for_index, tail_scroll_offset};
pub use error::HeightError;
pub use fixed::FixedExtentModel;
pub use model::ExtentModel;
pub use rule::HeightRule;
pub use scalar::Scalar;
pub use table::PositionTable;
pub use window::{DEFAULT_OVERSCAN, RenderWindow, clamp_scroll_offset, resolve, resolve_fixed};
