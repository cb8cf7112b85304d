// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Changes recorded since the last frame.
    ///
    /// Notifications only set bits; [`ViewportTracker::on_frame`] consumes them
    /// all at once.
    ///
    /// [`ViewportTracker::on_frame`]: crate::ViewportTracker::on_frame
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Pending: u8 {
        /// The scroll position moved.
        const SCROLL    = 0b0000_0001;
        /// The container was resized.
        const RESIZE    = 0b0000_0010;
        /// The item count or height rule changed and the model was rebuilt.
        const STRUCTURE = 0b0000_0100;
        /// The overscan count changed.
        const OVERSCAN  = 0b0000_1000;
    }
}
