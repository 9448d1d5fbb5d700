//! Full structural check of a [`Graph`].
//!
//! The mutating operations keep these invariants by construction, so this is
//! not run on every insert.  Builders call it once after a bulk load (in
//! debug builds) and tests call it directly.

use std::hash::Hash;

use cp_core::NodeId;

use crate::graph::Graph;
use crate::{GraphError, GraphResult};

/// Check every structural invariant of `graph`:
///
/// 1. The label index and the arena hold the same number of nodes.
/// 2. Each node's label maps back to its own arena slot.
/// 3. Every edge targets a node inside the arena.
/// 4. No node holds two edges with the same `(destination, label)` pair.
/// 5. The cached edge count matches the edges actually stored.
///
/// Returns the first violation found.
pub fn validate<N, E>(graph: &Graph<N, E>) -> GraphResult<(), N>
where
    N: Eq + Hash + Clone,
    E: PartialEq,
{
    let stored = graph.nodes.len();
    if graph.index.len() != stored {
        return Err(GraphError::IndexSizeMismatch { indexed: graph.index.len(), stored });
    }

    let mut edge_total = 0usize;
    for (i, node) in graph.nodes.iter().enumerate() {
        let slot = NodeId(i as u32);
        if graph.index.get(node.label()) != Some(&slot) {
            return Err(GraphError::InconsistentIndex { label: node.label().clone(), slot });
        }

        let edges = node.edges();
        for (j, edge) in edges.iter().enumerate() {
            if edge.to.index() >= stored {
                return Err(GraphError::DanglingEdge { from: node.label().clone(), to: edge.to });
            }
            if edges[..j].iter().any(|e| e.to == edge.to && e.label == edge.label) {
                return Err(GraphError::DuplicateEdge { from: node.label().clone(), to: edge.to });
            }
        }
        edge_total += edges.len();
    }

    if edge_total != graph.edge_count {
        return Err(GraphError::EdgeCountMismatch { counted: graph.edge_count, stored: edge_total });
    }

    Ok(())
}
