//! Graph-subsystem error type.
//!
//! Duplicate nodes and duplicate edges are not errors: `add_node` and
//! `add_edge` report them with a `false` return.  A search that cannot reach
//! its destination is not an error either; it returns `Ok(None)`.

use thiserror::Error;

use cp_core::NodeId;

/// Errors produced by `cp-graph`, generic over the node label type.
#[derive(Debug, Error)]
pub enum GraphError<N> {
    #[error("unknown node {0:?}")]
    UnknownNode(N),

    #[error("label index holds {indexed} entries but the arena holds {stored} nodes")]
    IndexSizeMismatch { indexed: usize, stored: usize },

    #[error("node {label:?} at {slot} is not indexed at that slot")]
    InconsistentIndex { label: N, slot: NodeId },

    #[error("edge from {from:?} targets {to}, which is outside the arena")]
    DanglingEdge { from: N, to: NodeId },

    #[error("node {from:?} holds a duplicate edge to {to}")]
    DuplicateEdge { from: N, to: NodeId },

    #[error("edge counter reads {counted} but nodes hold {stored} edges")]
    EdgeCountMismatch { counted: usize, stored: usize },
}

pub type GraphResult<T, N> = Result<T, GraphError<N>>;
