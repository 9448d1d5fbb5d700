//! Dijkstra shortest-path search.
//!
//! # Algorithm
//!
//! Lazy-deletion Dijkstra over a binary-heap frontier of candidate paths:
//!
//! 1. Seed the frontier with the empty path at `start`.
//! 2. Pop the cheapest candidate.  If its end node is already finalized the
//!    entry is stale; drop it.  If its end node is the destination, it is the
//!    minimum-cost path; return it.
//! 3. Otherwise finalize the end node and push one extended candidate per
//!    outgoing edge whose target is not yet finalized.
//! 4. An exhausted frontier means the destination is unreachable.
//!
//! There is no decrease-key: a node may sit in the frontier several times and
//! the finalized check on pop discards every copy after the first.
//!
//! # Candidate storage
//!
//! Candidates share prefixes.  Rather than cloning a `Path` per push, every
//! extension appends one `Step` to a trail and records the index of the step
//! it grew from.  A frontier entry is just `(cost, step index)`.  Only the
//! winning candidate is walked back through its parents and turned into a
//! [`Path`].
//!
//! Equal-cost candidates pop in the order they were pushed, so results are
//! deterministic for a given graph.
//!
//! Complexity: O((V + E) log E).  Weights must be non-negative; debug builds
//! assert this on every relaxed edge.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

use tracing::debug;

use cp_core::{NodeId, Weight};

use crate::graph::Graph;
use crate::path::{Path, Segment};
use crate::{GraphError, GraphResult};

// ── Trail ─────────────────────────────────────────────────────────────────────

struct Step<W> {
    node:   NodeId,
    parent: Option<usize>,
    /// Weight of the edge from `parent` to `node`.
    weight: W,
}

struct Candidate<W> {
    cost: W,
    step: usize,
}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Candidate<W> {}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Candidate<W> {
    /// Ascending cost, then ascending push order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp_cost(&other.cost)
            .then_with(|| self.step.cmp(&other.step))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Minimum-cost path from `start` to `end` in `graph`.
///
/// - `Ok(Some(path))`: the cheapest route.  `start == end` yields the empty
///   path with cost zero.
/// - `Ok(None)`: both nodes exist but `end` is unreachable from `start`.
/// - `Err(GraphError::UnknownNode)`: a label is not in the graph (`start` is
///   checked first).
///
/// # Example
///
/// ```
/// use cp_graph::{dijkstra, Graph};
///
/// let mut g: Graph<&str, f64> = Graph::new();
/// for n in ["A", "B", "C"] {
///     g.add_node(n);
/// }
/// g.add_edge(&"A", &"B", 5.0);
/// g.add_edge(&"A", &"C", 2.0);
/// g.add_edge(&"C", &"B", 2.0);
///
/// let path = dijkstra(&g, &"A", &"B").unwrap().unwrap();
/// assert_eq!(path.cost(), 4.0);
/// assert_eq!(path.len(), 2);
/// ```
pub fn dijkstra<N, W>(graph: &Graph<N, W>, start: &N, end: &N) -> GraphResult<Option<Path<N, W>>, N>
where
    N: Eq + Hash + Clone,
    W: Weight,
{
    let Some(from) = graph.node_id(start) else {
        return Err(GraphError::UnknownNode(start.clone()));
    };
    let Some(to) = graph.node_id(end) else {
        return Err(GraphError::UnknownNode(end.clone()));
    };

    if from == to {
        return Ok(Some(Path::new(start.clone())));
    }

    let mut trail: Vec<Step<W>> = vec![Step { node: from, parent: None, weight: W::ZERO }];
    let mut finalized = vec![false; graph.node_count()];
    let mut settled = 0usize;

    // Reverse turns BinaryHeap (max) into a min-heap.
    let mut frontier: BinaryHeap<Reverse<Candidate<W>>> = BinaryHeap::new();
    frontier.push(Reverse(Candidate { cost: W::ZERO, step: 0 }));

    while let Some(Reverse(candidate)) = frontier.pop() {
        let node = trail[candidate.step].node;

        // Stale entry for a node already settled at lower cost.
        if finalized[node.index()] {
            continue;
        }

        if node == to {
            debug!(
                settled,
                trail_len = trail.len(),
                cost = ?candidate.cost,
                "dijkstra reached destination"
            );
            return Ok(Some(reconstruct(graph, &trail, candidate.step)));
        }

        finalized[node.index()] = true;
        settled += 1;

        for edge in graph.node_at(node).edges() {
            if finalized[edge.to.index()] {
                continue;
            }
            debug_assert!(
                edge.label.is_valid_cost(),
                "negative or NaN edge weight {:?}",
                edge.label
            );
            trail.push(Step {
                node:   edge.to,
                parent: Some(candidate.step),
                weight: edge.label,
            });
            frontier.push(Reverse(Candidate {
                cost: candidate.cost + edge.label,
                step: trail.len() - 1,
            }));
        }
    }

    debug!(settled, "dijkstra exhausted frontier without reaching destination");
    Ok(None)
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Walk `step`'s parent chain back to the origin and build the `Path`.
fn reconstruct<N, W>(graph: &Graph<N, W>, trail: &[Step<W>], step: usize) -> Path<N, W>
where
    N: Eq + Hash + Clone,
    W: Weight,
{
    let mut chain = Vec::new();
    let mut cur = step;
    while let Some(parent) = trail[cur].parent {
        chain.push((parent, cur));
        cur = parent;
    }
    chain.reverse();

    let label = |s: usize| graph.node_at(trail[s].node).label().clone();
    let segments = chain
        .into_iter()
        .map(|(parent, child)| Segment {
            start:  label(parent),
            end:    label(child),
            weight: trail[child].weight,
        })
        .collect();

    Path::from_segments(label(cur), segments)
}
