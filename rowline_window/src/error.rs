// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Scalar;

/// Error returned when a height rule produces data the position table cannot hold.
///
/// These indicate a bug upstream of the windowing engine (a broken measurement
/// or a height callback returning garbage), so they are surfaced instead of
/// being clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightError<S> {
    /// The height of `index` is NaN or infinite.
    NonFinite {
        /// Offending item index.
        index: usize,
        /// The height that was returned.
        height: S,
    },
    /// The height of `index` is zero or negative.
    NonPositive {
        /// Offending item index.
        index: usize,
        /// The height that was returned.
        height: S,
    },
    /// Every height was valid, but their sum over `len` items is not finite.
    NonFiniteTotal {
        /// Number of items that were summed.
        len: usize,
    },
}

impl<S: fmt::Debug> fmt::Display for HeightError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index, height } => {
                write!(f, "height of item {index} is not finite ({height:?})")
            }
            Self::NonPositive { index, height } => {
                write!(f, "height of item {index} is not positive ({height:?})")
            }
            Self::NonFiniteTotal { len } => {
                write!(f, "total height of {len} items is not finite")
            }
        }
    }
}

impl<S: fmt::Debug> core::error::Error for HeightError<S> {}

/// Checks that a single item height is usable as a prefix-sum step.
pub(crate) fn check_height<S: Scalar>(index: usize, height: S) -> Result<S, HeightError<S>> {
    if !height.is_finite() {
        return Err(HeightError::NonFinite { index, height });
    }
    if height <= S::zero() {
        return Err(HeightError::NonPositive { index, height });
    }
    Ok(height)
}
