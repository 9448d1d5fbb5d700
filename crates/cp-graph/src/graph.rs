//! Directed labeled graph stored as a node arena.
//!
//! # Data layout
//!
//! Nodes live in a `Vec` and are addressed by [`NodeId`] (their position in
//! that `Vec`).  A hash index maps each node label to its `NodeId`.  Every
//! node owns its outgoing edges, and an edge stores the *index* of its
//! destination, never a reference to a node object:
//!
//! ```text
//! nodes[from].edges = [ Edge { to: NodeId, label: E }, ... ]
//! ```
//!
//! Because edges can only be inserted through [`Graph`] by label or by id,
//! there is no way to attach an edge to a node instance that the graph does
//! not own.
//!
//! Nodes are never removed, so a `NodeId` handed out by a graph stays valid
//! for that graph's lifetime.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use cp_core::NodeId;

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed edge, owned by its origin node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<E> {
    /// Arena index of the destination node.
    pub to: NodeId,
    /// Edge label.  For routing graphs this is the segment distance.
    pub label: E,
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// A labeled node and its outgoing edges.
///
/// Two nodes compare equal iff their labels are equal; the edge lists are not
/// part of a node's identity.
#[derive(Debug, Clone)]
pub struct Node<N, E> {
    pub(crate) label: N,
    pub(crate) edges: Vec<Edge<E>>,
}

impl<N, E> Node<N, E> {
    fn new(label: N) -> Self {
        Self { label, edges: Vec::new() }
    }

    pub fn label(&self) -> &N {
        &self.label
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

impl<N, E: PartialEq> Node<N, E> {
    /// Insert an edge unless one with the same `(to, label)` pair exists.
    ///
    /// Edges to the same destination with different labels, and edges to
    /// different destinations with the same label, are both allowed.
    fn insert_edge(&mut self, to: NodeId, label: E) -> bool {
        if self.edges.iter().any(|e| e.to == to && e.label == label) {
            return false;
        }
        self.edges.push(Edge { to, label });
        true
    }
}

impl<N: PartialEq, E> PartialEq for Node<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<N: Eq, E> Eq for Node<N, E> {}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// A mutable directed labeled graph.
///
/// `N` is the node label (unique per graph); `E` is the edge label.
///
/// # Example
///
/// ```
/// use cp_graph::Graph;
///
/// let mut g: Graph<String, f64> = Graph::new();
/// assert!(g.add_node("A".to_string()));
/// assert!(g.add_node("B".to_string()));
/// assert!(!g.add_node("A".to_string())); // duplicate label
/// assert!(g.add_edge("A", "B", 2.5));
/// assert!(!g.add_edge("A", "B", 2.5)); // duplicate (dest, label)
/// assert!(!g.add_edge("A", "Z", 1.0)); // unknown endpoint
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    pub(crate) nodes: Vec<Node<N, E>>,
    pub(crate) index: FxHashMap<N, NodeId>,
    pub(crate) edge_count: usize,
}

impl<N, E> Graph<N, E>
where
    N: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            nodes:      Vec::new(),
            index:      FxHashMap::default(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for the expected number of nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes:      Vec::with_capacity(nodes),
            index:      FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            edge_count: 0,
        }
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Store a new node labeled `label`.
    ///
    /// Returns `false` (and leaves the graph unchanged) if a node with that
    /// label already exists.  Panics once the graph holds more nodes than a
    /// [`NodeId`] can address.
    pub fn add_node(&mut self, label: N) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }
        self.push_node(label);
        true
    }

    /// Return the id of the node labeled `label`, inserting it first if
    /// absent.
    pub fn ensure_node(&mut self, label: N) -> NodeId {
        match self.index.get(&label) {
            Some(&id) => id,
            None => self.push_node(label),
        }
    }

    /// # Panics
    ///
    /// If the arena already holds `u32::MAX + 1` nodes, the most a `NodeId`
    /// can address.
    fn push_node(&mut self, label: N) -> NodeId {
        let id = NodeId::try_from(self.nodes.len()).expect("graph arena is limited to u32::MAX + 1 nodes");
        self.index.insert(label.clone(), id);
        self.nodes.push(Node::new(label));
        id
    }

    /// The stored node labeled `label`, if any.
    pub fn node<Q>(&self, label: &Q) -> Option<&Node<N, E>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node_id(label).map(|id| &self.nodes[id.index()])
    }

    /// Arena id of the node labeled `label`, if any.
    pub fn node_id<Q>(&self, label: &Q) -> Option<NodeId>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(label).copied()
    }

    /// The node stored at `id`, or `None` if `id` is out of range.
    pub fn node_by_id(&self, id: NodeId) -> Option<&Node<N, E>> {
        self.nodes.get(id.index())
    }

    /// Label of the node stored at `id`.
    pub fn label_of(&self, id: NodeId) -> Option<&N> {
        self.node_by_id(id).map(Node::label)
    }

    pub fn contains_node<Q>(&self, label: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(label)
    }

    /// Read-only view of every stored node.  Order is unspecified.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node<N, E>> + '_ {
        self.nodes.iter()
    }

    /// `(destination label, edge label)` for every outgoing edge of the node
    /// labeled `label`, or `None` if no such node exists.
    pub fn children<'a, Q>(
        &'a self,
        label: &Q,
    ) -> Option<impl Iterator<Item = (&'a N, &'a E)> + use<'a, N, E, Q>>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = self.node(label)?;
        Some(
            node.edges
                .iter()
                .map(|e| (&self.nodes[e.to.index()].label, &e.label)),
        )
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at an id this graph handed out.  Panics on a foreign id.
    #[inline]
    pub(crate) fn node_at(&self, id: NodeId) -> &Node<N, E> {
        &self.nodes[id.index()]
    }
}

impl<N, E> Graph<N, E>
where
    N: Eq + Hash + Clone,
    E: PartialEq,
{
    // ── Edges ─────────────────────────────────────────────────────────────

    /// Add a directed edge `from → to` labeled `label`.
    ///
    /// Returns `true` iff both labels name stored nodes and `from` did not
    /// already hold an edge with the same `(to, label)` pair.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q, label: E) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.node_id(from), self.node_id(to)) {
            (Some(from), Some(to)) => self.add_edge_by_id(from, to, label),
            _ => false,
        }
    }

    /// Index form of [`add_edge`](Self::add_edge).  Returns `false` if either
    /// id is out of range.
    pub fn add_edge_by_id(&mut self, from: NodeId, to: NodeId, label: E) -> bool {
        if to.index() >= self.nodes.len() {
            return false;
        }
        let Some(node) = self.nodes.get_mut(from.index()) else {
            return false;
        };
        let inserted = node.insert_edge(to, label);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }
}

impl<N, E> Default for Graph<N, E>
where
    N: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
