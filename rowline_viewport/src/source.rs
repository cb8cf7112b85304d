// Copyright 2025 the Rowline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rowline_window::{
    ExtentModel, FixedExtentModel, HeightError, HeightRule, PositionTable, Scalar,
};

/// The extent model a tracker resolves against, built from a [`HeightRule`].
///
/// Fixed rules use the closed-form [`FixedExtentModel`] and never allocate a
/// table; variable rules get a full [`PositionTable`]. The variant is chosen
/// once per build, so queries do not re-dispatch on the rule.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtentSource<S> {
    /// Uniform heights.
    Fixed(FixedExtentModel<S>),
    /// Per-item heights.
    Table(PositionTable<S>),
}

impl<S: Scalar> ExtentSource<S> {
    /// Builds the model for `len` items under `rule`.
    pub fn build(len: usize, rule: &HeightRule<S>) -> Result<Self, HeightError<S>> {
        Ok(match rule {
            HeightRule::Fixed(height) => Self::Fixed(FixedExtentModel::new(len, *height)?),
            HeightRule::Variable(_) => Self::Table(PositionTable::build(len, rule)?),
        })
    }

    /// Returns the position table for variable rules.
    #[must_use]
    pub fn table(&self) -> Option<&PositionTable<S>> {
        match self {
            Self::Fixed(_) => None,
            Self::Table(table) => Some(table),
        }
    }
}

impl<S: Scalar> ExtentModel for ExtentSource<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        match self {
            Self::Fixed(model) => model.len(),
            Self::Table(table) => table.len(),
        }
    }

    fn total_extent(&self) -> S {
        match self {
            Self::Fixed(model) => model.total_extent(),
            Self::Table(table) => table.total_extent(),
        }
    }

    fn offset_of(&self, index: usize) -> S {
        match self {
            Self::Fixed(model) => model.offset_of(index),
            Self::Table(table) => table.offset_of(index),
        }
    }

    fn extent_of(&self, index: usize) -> S {
        match self {
            Self::Fixed(model) => model.extent_of(index),
            Self::Table(table) => table.extent_of(index),
        }
    }

    fn index_at_offset(&self, offset: S) -> usize {
        match self {
            Self::Fixed(model) => model.index_at_offset(offset),
            Self::Table(table) => table.index_at_offset(offset),
        }
    }

    fn first_index_at_or_after(&self, offset: S, from: usize) -> usize {
        match self {
            Self::Fixed(model) => model.first_index_at_or_after(offset, from),
            Self::Table(table) => table.first_index_at_or_after(offset, from),
        }
    }
}

#[cfg(test)]
mod tests {
    use rowline_window::{ExtentModel, HeightError, HeightRule};

    use super::ExtentSource;

    #[test]
    fn rule_variant_selects_model() {
        let fixed = ExtentSource::build(100, &HeightRule::fixed(12.0_f64)).unwrap();
        assert!(matches!(fixed, ExtentSource::Fixed(_)));
        assert!(fixed.table().is_none());
        assert_eq!(fixed.total_extent(), 1_200.0);

        let variable =
            ExtentSource::build(4, &HeightRule::variable(|i| (i + 1) as f64)).unwrap();
        assert_eq!(variable.table().map(|t| t.offsets().len()), Some(5));
        assert_eq!(variable.total_extent(), 10.0);
        assert_eq!(variable.index_at_offset(3.0), 2);
        assert_eq!(variable.first_index_at_or_after(3.5, 0), 3);
        assert_eq!(variable.extent_of(3), 4.0);
    }

    #[test]
    fn build_errors_pass_through() {
        assert_eq!(
            ExtentSource::build(3, &HeightRule::fixed(-1.0_f32)),
            Err(HeightError::NonPositive {
                index: 0,
                height: -1.0
            })
        );
    }
}
