//! Boolean row masks.

use std::ops::{BitOr, BitOrAssign};

/// One flag per table row, aligned to the table's row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMask(Vec<bool>);

impl RowMask {
    /// Creates an all-false mask for `len` rows.
    pub fn new(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// Number of rows covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the mask covers no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected rows.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&selected| selected).count()
    }

    /// Returns true if any row is selected.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&selected| selected)
    }

    /// Returns the flag for `row`, or `None` past the end.
    pub fn get(&self, row: usize) -> Option<bool> {
        self.0.get(row).copied()
    }

    /// Iterates over the flags in row order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Indices of the selected rows.
    pub fn matching_rows(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(row, &selected)| selected.then_some(row))
            .collect()
    }

    /// Returns the flags as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for RowMask {
    fn from(flags: Vec<bool>) -> Self {
        Self(flags)
    }
}

impl FromIterator<bool> for RowMask {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl BitOrAssign<&RowMask> for RowMask {
    fn bitor_assign(&mut self, rhs: &RowMask) {
        debug_assert_eq!(self.len(), rhs.len(), "row masks must cover the same rows");
        for (flag, other) in self.0.iter_mut().zip(&rhs.0) {
            *flag |= *other;
        }
    }
}

impl BitOrAssign for RowMask {
    fn bitor_assign(&mut self, rhs: RowMask) {
        *self |= &rhs;
    }
}

impl BitOr for RowMask {
    type Output = RowMask;

    fn bitor(mut self, rhs: RowMask) -> RowMask {
        self |= &rhs;
        self
    }
}
