// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Height rules: how tall each item is.

use alloc::rc::Rc;
use core::fmt;

use crate::Scalar;

/// How item heights are determined.
///
/// The rule is dispatched once per table build: [`PositionTable::build`]
/// matches on the variant and then runs a tight summation loop, so lookups
/// after the build never go through the callback again.
///
/// [`PositionTable::build`]: crate::PositionTable::build
pub enum HeightRule<S> {
    /// Every item has the same height.
    Fixed(S),
    /// Item heights come from a per-index callback.
    ///
    /// The callback must be total over `0..len` and return positive, finite
    /// heights.
    Variable(Rc<dyn Fn(usize) -> S>),
}

impl<S: Scalar> HeightRule<S> {
    /// Creates a rule giving every item the height `height`.
    #[must_use]
    pub fn fixed(height: S) -> Self {
        Self::Fixed(height)
    }

    /// Creates a rule backed by a per-index height callback.
    #[must_use]
    pub fn variable(height_of: impl Fn(usize) -> S + 'static) -> Self {
        Self::Variable(Rc::new(height_of))
    }

    /// Returns the height the rule assigns to `index`, without validation.
    #[must_use]
    pub fn height_of(&self, index: usize) -> S {
        match self {
            Self::Fixed(height) => *height,
            Self::Variable(height_of) => height_of(index),
        }
    }

    /// Returns the constant height if this is a [`HeightRule::Fixed`] rule.
    #[must_use]
    pub fn as_fixed(&self) -> Option<S> {
        match self {
            Self::Fixed(height) => Some(*height),
            Self::Variable(_) => None,
        }
    }
}

impl<S: Clone> Clone for HeightRule<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(height) => Self::Fixed(height.clone()),
            Self::Variable(height_of) => Self::Variable(Rc::clone(height_of)),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for HeightRule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(height) => f.debug_tuple("Fixed").field(height).finish(),
            Self::Variable(_) => f.debug_tuple("Variable").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::HeightRule;

    #[test]
    fn height_of_dispatches_on_variant() {
        let fixed = HeightRule::fixed(24.0_f64);
        assert_eq!(fixed.height_of(0), 24.0);
        assert_eq!(fixed.height_of(10_000), 24.0);
        assert_eq!(fixed.as_fixed(), Some(24.0));

        let variable = HeightRule::variable(|i| 10.0_f64 + i as f64);
        assert_eq!(variable.height_of(0), 10.0);
        assert_eq!(variable.height_of(5), 15.0);
        assert_eq!(variable.as_fixed(), None);
    }

    #[test]
    fn clones_share_the_callback() {
        let rule = HeightRule::variable(|i| if i % 2 == 0 { 20.0_f32 } else { 40.0 });
        let copy = rule.clone();
        assert_eq!(copy.height_of(1), 40.0);
        assert_eq!(format!("{copy:?}"), "Variable(..)");
        assert_eq!(format!("{:?}", HeightRule::fixed(3.0_f32)), "Fixed(3.0)");
    }
}
