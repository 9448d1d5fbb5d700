//! Edge-cost abstraction for the shortest-path engine.
//!
//! Dijkstra needs three things from a cost type: a zero, addition, and a
//! comparison.  Floats only offer a partial order, so [`Weight::cmp_cost`]
//! gives the search a total order to sort its frontier with.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

/// An orderable, additive edge cost.
///
/// Implemented for the primitive numeric types.  Correct search results
/// require every weight in the graph to be `>= ZERO`.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Cost of the empty path.
    const ZERO: Self;

    /// Total order over costs.  For floats this is IEEE `total_cmp`.
    fn cmp_cost(&self, other: &Self) -> Ordering;

    /// `true` if this cost is usable by the search (non-negative, and not NaN).
    fn is_valid_cost(&self) -> bool {
        *self >= Self::ZERO
    }
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn cmp_cost(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*};
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;

            #[inline]
            fn cmp_cost(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

float_weight!(f32, f64);
int_weight!(u16, u32, u64, usize, i32, i64);
