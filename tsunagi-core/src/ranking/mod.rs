//! Descending value ranking with prefix and suffix selection.
//!
//! A small utility kept apart from the graph code: values are ordered from
//! largest to smallest and callers slice off the top or bottom `k`.
//!
//! # Examples
//! ```
//! use tsunagi_core::ranking::rank_values;
//!
//! let ranked = rank_values([2000, 400, 350, 4500, 3200]);
//! assert_eq!(ranked.as_slice(), &[4500, 3200, 2000, 400, 350]);
//! assert_eq!(ranked.top(2), &[4500, 3200]);
//! assert_eq!(ranked.bottom(2), &[400, 350]);
//! assert_eq!(ranked.without_bottom(2), &[4500, 3200, 2000]);
//! ```

use crate::EdgeWeight;

/// Values sorted in descending order.
///
/// Equal values keep their input order. Floats are ordered with `total_cmp`,
/// so NaN ranks above every finite value instead of breaking the sort.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedValues<T> {
    values: Vec<T>,
}

/// Sorts `values` from largest to smallest.
#[must_use]
pub fn rank_values<T, I>(values: I) -> RankedValues<T>
where
    T: EdgeWeight,
    I: IntoIterator<Item = T>,
{
    let mut values: Vec<T> = values.into_iter().collect();
    values.sort_by(|left, right| right.weight_cmp(left));
    RankedValues { values }
}

impl<T> RankedValues<T> {
    /// Returns all values, largest first.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[T] { &self.values }

    /// Returns the number of ranked values.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` when nothing was ranked.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Returns the `k` largest values, largest first.
    ///
    /// Saturates at the full list when `k` exceeds the length.
    #[must_use]
    pub fn top(&self, k: usize) -> &[T] {
        self.values.get(..k.min(self.values.len())).unwrap_or_default()
    }

    /// Returns the `k` smallest values in ranked order (smallest last).
    #[must_use]
    pub fn bottom(&self, k: usize) -> &[T] {
        self.values.get(self.split_point(k)..).unwrap_or_default()
    }

    /// Returns every value except the `k` smallest.
    #[must_use]
    pub fn without_bottom(&self, k: usize) -> &[T] {
        self.values.get(..self.split_point(k)).unwrap_or_default()
    }

    /// Consumes the ranking, returning the sorted values.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    fn split_point(&self, k: usize) -> usize {
        self.values.len().saturating_sub(k)
    }
}
