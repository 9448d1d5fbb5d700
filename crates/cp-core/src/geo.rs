//! Planar coordinate type used as the node label of the campus graph.
//!
//! Coordinates come straight from the record files (pixel positions on the
//! campus map image), so no projection or geodesy is involved.
//!
//! # Identity
//!
//! `Point` is a hash-map key, so equality and hashing are defined on the bit
//! pattern of each coordinate rather than on IEEE comparison.  `-0.0` is
//! folded onto `0.0` at construction so the two spellings name the same
//! point.  NaN coordinates are rejected by the record loader before a `Point`
//! is ever built from them.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A 2-D point with double-precision coordinates.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: fold_zero(x), y: fold_zero(y) }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[inline]
fn fold_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        fold_zero(self.x).to_bits() == fold_zero(other.x).to_bits()
            && fold_zero(self.y).to_bits() == fold_zero(other.y).to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold_zero(self.x).to_bits().hash(state);
        fold_zero(self.y).to_bits().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Lexicographic on `(x, y)` using IEEE total order.
    fn cmp(&self, other: &Self) -> Ordering {
        fold_zero(self.x)
            .total_cmp(&fold_zero(other.x))
            .then_with(|| fold_zero(self.y).total_cmp(&fold_zero(other.y)))
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
