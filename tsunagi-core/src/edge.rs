//! Weighted undirected edges and the weight abstraction used to order them.

use std::{cmp::Ordering, fmt};

use num_traits::{CheckedAdd, Zero};

/// Numeric weight that can be totally ordered and summed.
///
/// Integers are always admissible. Floating-point weights are ordered with
/// `total_cmp` and are admissible only when finite, so NaN and infinities are
/// rejected before they can reach the priority queue.
///
/// Running totals are formed with [`EdgeWeight::checked_total`], which
/// reports integer overflow and float sums that leave the finite range
/// instead of wrapping or saturating.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use tsunagi_core::EdgeWeight;
///
/// assert_eq!(EdgeWeight::weight_cmp(&2_u32, &3_u32), Ordering::Less);
/// assert!(1.5_f64.is_admissible());
/// assert!(!f32::NAN.is_admissible());
/// ```
pub trait EdgeWeight: Copy + fmt::Debug + PartialEq + Zero {
    /// Total order used to sort candidate edges.
    fn weight_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` when the weight may take part in an MST computation.
    fn is_admissible(&self) -> bool;

    /// Adds `other` to `self`, or returns `None` when the sum is not
    /// representable.
    fn checked_total(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EdgeWeight for $ty {
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn is_admissible(&self) -> bool {
                    true
                }

                fn checked_total(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EdgeWeight for $ty {
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn is_admissible(&self) -> bool {
                    self.is_finite()
                }

                #[expect(
                    clippy::float_arithmetic,
                    reason = "float weights are summed directly; the result is range-checked"
                )]
                fn checked_total(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }
            }
        )+
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// An undirected edge `(u, v)` carrying a weight.
///
/// Endpoints are stored as supplied; no canonical ordering is imposed so that
/// results echo the caller's input.
///
/// # Examples
/// ```
/// use tsunagi_core::Edge;
///
/// let edge = Edge::from((1, 2, 3.5));
/// assert_eq!(edge.endpoints(), (1, 2));
/// assert_eq!(edge.weight(), 3.5);
/// assert_eq!(edge.to_string(), "(1, 2, 3.5)");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge<W> {
    u: usize,
    v: usize,
    weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge between `u` and `v`.
    #[must_use]
    pub const fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> usize { self.u }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> usize { self.v }

    /// Returns both endpoints in input order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (usize, usize) { (self.u, self.v) }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_self_loop(&self) -> bool { self.u == self.v }
}

impl<W: Copy> Edge<W> {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((u, v, weight): (usize, usize, W)) -> Self {
        Self::new(u, v, weight)
    }
}

impl<W> From<Edge<W>> for (usize, usize, W) {
    fn from(edge: Edge<W>) -> Self {
        (edge.u, edge.v, edge.weight)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.u, self.v, self.weight)
    }
}
