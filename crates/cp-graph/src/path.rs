//! Immutable weighted paths.
//!
//! A [`Path`] is a value: [`Path::extend`] returns a new path one segment
//! longer and leaves the receiver untouched, so two paths that grew from the
//! same prefix never observe each other.  The search engine does not extend
//! `Path`s segment by segment; it keeps its own index-linked trail and only
//! builds a `Path` for the winning candidate (see [`crate::search`]).

use cp_core::Weight;

// ── Segment ───────────────────────────────────────────────────────────────────

/// One traversed edge: `start → end` at cost `weight`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<N, W> {
    pub start:  N,
    pub end:    N,
    pub weight: W,
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered sequence of segments starting at an origin label, together
/// with its total cost.
///
/// # Example
///
/// ```
/// use cp_graph::Path;
///
/// let origin: Path<&str, f64> = Path::new("A");
/// let ab = origin.extend("B", 1.5);
/// let abc = ab.extend("C", 2.0);
///
/// assert_eq!(origin.cost(), 0.0);
/// assert_eq!(*origin.end(), "A");
/// assert_eq!(ab.len(), 1);
/// assert_eq!(abc.cost(), 3.5);
/// assert_eq!(*abc.end(), "C");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N, W> {
    start:    N,
    segments: Vec<Segment<N, W>>,
    cost:     W,
}

impl<N: Clone, W: Weight> Path<N, W> {
    /// The empty path sitting at `start`.  Cost zero, no segments.
    pub fn new(start: N) -> Self {
        Self { start, segments: Vec::new(), cost: W::ZERO }
    }

    /// Build a path from already-ordered segments.  The cost is summed left
    /// to right, the same order [`extend`](Self::extend) accumulates in.
    pub(crate) fn from_segments(start: N, segments: Vec<Segment<N, W>>) -> Self
    where
        N: PartialEq,
    {
        debug_assert!(segments.first().is_none_or(|s| s.start == start));
        debug_assert!(segments.windows(2).all(|w| w[0].end == w[1].start));
        let cost = segments.iter().fold(W::ZERO, |acc, s| acc + s.weight);
        Self { start, segments, cost }
    }

    /// A new path equal to `self` followed by the segment `end() → next`.
    #[must_use]
    pub fn extend(&self, next: N, weight: W) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(Segment { start: self.end().clone(), end: next, weight });
        Self {
            start: self.start.clone(),
            segments,
            cost: self.cost + weight,
        }
    }
}

impl<N, W: Copy> Path<N, W> {
    /// Origin label.
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Label of the last segment's destination, or the origin when empty.
    pub fn end(&self) -> &N {
        self.segments.last().map_or(&self.start, |s| &s.end)
    }

    /// Sum of all segment weights.
    #[inline]
    pub fn cost(&self) -> W {
        self.cost
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment<N, W>] {
        &self.segments
    }

    /// Segments in traversal order, origin → destination.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment<N, W>> {
        self.segments.iter()
    }
}

impl<'a, N, W> IntoIterator for &'a Path<N, W> {
    type Item = &'a Segment<N, W>;
    type IntoIter = std::slice::Iter<'a, Segment<N, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl<N, W> IntoIterator for Path<N, W> {
    type Item = Segment<N, W>;
    type IntoIter = std::vec::IntoIter<Segment<N, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}
