//! Unit tests for cp-graph.
//!
//! All tests use small hand-built graphs labeled by strings.

#[cfg(test)]
mod helpers {
    use crate::Graph;

    /// Graph with `labels` as nodes and `(from, to, weight)` edges.
    pub fn graph(labels: &[&str], edges: &[(&str, &str, f64)]) -> Graph<String, f64> {
        let mut g = Graph::new();
        for l in labels {
            g.add_node(l.to_string());
        }
        for &(a, b, w) in edges {
            assert!(g.add_edge(a, b, w), "fixture edge {a}->{b} rejected");
        }
        g
    }

    /// Nodes A, B, C; edges A→B (5), A→C (2), C→B (2).
    ///
    /// The direct A→B edge is more expensive than the detour through C.
    pub fn triangle() -> Graph<String, f64> {
        graph(
            &["A", "B", "C"],
            &[("A", "B", 5.0), ("A", "C", 2.0), ("C", "B", 2.0)],
        )
    }
}

// ── Graph & node ADT ──────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use cp_core::NodeId;

    use crate::{validate, Graph};

    #[test]
    fn empty_graph() {
        let g: Graph<String, f64> = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.nodes().count(), 0);
        assert!(validate(&g).is_ok());
    }

    #[test]
    fn duplicate_node_rejected() {
        let mut g: Graph<String, f64> = Graph::new();
        assert!(g.add_node("A".into()));
        assert!(!g.add_node("A".into()));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn get_and_contains() {
        let g = super::helpers::triangle();
        assert!(g.contains_node("A"));
        assert!(!g.contains_node("Z"));
        assert_eq!(g.node("B").unwrap().label(), "B");
        assert!(g.node("Z").is_none());
    }

    #[test]
    fn ensure_node_is_get_or_insert() {
        let mut g: Graph<String, f64> = Graph::new();
        let a = g.ensure_node("A".into());
        let b = g.ensure_node("B".into());
        assert_ne!(a, b);
        assert_eq!(g.ensure_node("A".into()), a);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.label_of(b).map(String::as_str), Some("B"));
    }

    #[test]
    fn ids_are_stable_and_sequential() {
        let g = super::helpers::triangle();
        assert_eq!(g.node_id("A"), Some(NodeId(0)));
        assert_eq!(g.node_id("C"), Some(NodeId(2)));
        assert!(g.node_by_id(NodeId(3)).is_none());
    }

    #[test]
    fn edge_with_unknown_endpoint_rejected() {
        let mut g = super::helpers::graph(&["A"], &[]);
        assert!(!g.add_edge("A", "Z", 1.0));
        assert!(!g.add_edge("Z", "A", 1.0));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node("A").unwrap().out_degree(), 0);
    }

    #[test]
    fn edge_by_foreign_id_rejected() {
        let mut g = super::helpers::graph(&["A"], &[]);
        assert!(!g.add_edge_by_id(NodeId(0), NodeId(9), 1.0));
        assert!(!g.add_edge_by_id(NodeId(9), NodeId(0), 1.0));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn duplicate_edge_rejected() {
        let mut g = super::helpers::graph(&["A", "B", "C"], &[("A", "B", 1.0)]);
        assert!(!g.add_edge("A", "B", 1.0));
        // Same destination, different label.
        assert!(g.add_edge("A", "B", 2.0));
        // Same label, different destination.
        assert!(g.add_edge("A", "C", 1.0));
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.node("A").unwrap().out_degree(), 3);
        assert!(validate(&g).is_ok());
    }

    #[test]
    fn self_loop_allowed() {
        let mut g = super::helpers::graph(&["A"], &[]);
        assert!(g.add_edge("A", "A", 1.0));
        let children: Vec<_> = g.children("A").unwrap().collect();
        assert_eq!(children, vec![(&"A".to_string(), &1.0)]);
    }

    #[test]
    fn edges_are_directed() {
        let g = super::helpers::graph(&["A", "B"], &[("A", "B", 1.0)]);
        assert_eq!(g.node("A").unwrap().out_degree(), 1);
        assert_eq!(g.node("B").unwrap().out_degree(), 0);
    }

    #[test]
    fn children_resolve_labels() {
        let g = super::helpers::triangle();
        let mut children: Vec<(String, f64)> = g
            .children("A")
            .unwrap()
            .map(|(l, w)| (l.clone(), *w))
            .collect();
        children.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(children, vec![("B".to_string(), 5.0), ("C".to_string(), 2.0)]);
        assert!(g.children("Z").is_none());
    }

    #[test]
    fn node_equality_ignores_edges() {
        let with_edges = super::helpers::triangle();
        let bare = super::helpers::graph(&["A"], &[]);
        assert_eq!(with_edges.node("A").unwrap(), bare.node("A").unwrap());
        assert_ne!(with_edges.node("A").unwrap(), with_edges.node("B").unwrap());
    }
}

// ── Structural validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use cp_core::NodeId;

    use crate::graph::Edge;
    use crate::{validate, GraphError};

    #[test]
    fn well_formed_graph_passes() {
        assert!(validate(&super::helpers::triangle()).is_ok());
    }

    #[test]
    fn dangling_edge_detected() {
        let mut g = super::helpers::triangle();
        g.nodes[0].edges.push(Edge { to: NodeId(99), label: 1.0 });
        g.edge_count += 1;
        assert!(matches!(validate(&g), Err(GraphError::DanglingEdge { to: NodeId(99), .. })));
    }

    #[test]
    fn duplicate_edge_detected() {
        let mut g = super::helpers::triangle();
        let dup = g.nodes[0].edges[0].clone();
        g.nodes[0].edges.push(dup);
        g.edge_count += 1;
        assert!(matches!(validate(&g), Err(GraphError::DuplicateEdge { .. })));
    }

    #[test]
    fn edge_count_drift_detected() {
        let mut g = super::helpers::triangle();
        g.edge_count += 1;
        assert!(matches!(
            validate(&g),
            Err(GraphError::EdgeCountMismatch { counted: 4, stored: 3 })
        ));
    }

    #[test]
    fn index_mismatch_detected() {
        let mut g = super::helpers::triangle();
        g.index.insert("ghost".to_string(), NodeId(0));
        assert!(matches!(validate(&g), Err(GraphError::IndexSizeMismatch { indexed: 4, stored: 3 })));
    }

    #[test]
    fn misindexed_label_detected() {
        let mut g = super::helpers::triangle();
        g.index.insert("A".to_string(), NodeId(1));
        assert!(matches!(validate(&g), Err(GraphError::InconsistentIndex { .. })));
    }
}

// ── Path value ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use crate::{Path, Segment};

    #[test]
    fn empty_path() {
        let p: Path<&str, f64> = Path::new("A");
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.cost(), 0.0);
        assert_eq!(*p.start(), "A");
        assert_eq!(*p.end(), "A");
        assert_eq!(p.iter().count(), 0);
    }

    #[test]
    fn extend_does_not_mutate_receiver() {
        let a: Path<&str, f64> = Path::new("A");
        let ab = a.extend("B", 1.0);
        let ac = a.extend("C", 4.0);
        let abd = ab.extend("D", 2.5);

        assert!(a.is_empty());
        assert_eq!(ab.len(), 1);
        assert_eq!(*ac.end(), "C");
        assert_eq!(ac.cost(), 4.0);
        assert_eq!(abd.cost(), 3.5);
        // Shared prefix is unchanged in both branches.
        assert_eq!(abd.segments()[0], ab.segments()[0]);
    }

    #[test]
    fn iteration_is_in_traversal_order() {
        let p: Path<&str, u32> = Path::new("A").extend("B", 1).extend("C", 2).extend("D", 3);
        let hops: Vec<(&str, &str, u32)> = p.iter().map(|s| (s.start, s.end, s.weight)).collect();
        assert_eq!(hops, vec![("A", "B", 1), ("B", "C", 2), ("C", "D", 3)]);

        let by_ref: Vec<&Segment<&str, u32>> = (&p).into_iter().collect();
        assert_eq!(by_ref.len(), 3);
        let owned: Vec<Segment<&str, u32>> = p.into_iter().collect();
        assert_eq!(owned[2].end, "D");
    }

    #[test]
    fn from_segments_sums_cost() {
        let segs = vec![
            Segment { start: "A", end: "B", weight: 0.1 },
            Segment { start: "B", end: "C", weight: 0.2 },
        ];
        let built: Path<&str, f64> = Path::from_segments("A", segs);
        let extended: Path<&str, f64> = Path::new("A").extend("B", 0.1).extend("C", 0.2);
        assert_eq!(built, extended);
    }
}

// ── Dijkstra search ───────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use crate::{dijkstra, GraphError};

    #[test]
    fn triangle_prefers_detour() {
        let g = super::helpers::triangle();
        let path = dijkstra(&g, &"A".to_string(), &"B".to_string()).unwrap().unwrap();
        assert_eq!(path.cost(), 4.0);
        let hops: Vec<(&str, &str)> = path.iter().map(|s| (s.start.as_str(), s.end.as_str())).collect();
        assert_eq!(hops, vec![("A", "C"), ("C", "B")]);
    }

    #[test]
    fn disconnected_returns_none() {
        let mut g = super::helpers::triangle();
        g.add_node("D".into());
        let result = dijkstra(&g, &"A".to_string(), &"D".to_string()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn self_path_is_empty() {
        let g = super::helpers::triangle();
        let path = dijkstra(&g, &"A".to_string(), &"A".to_string()).unwrap().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.end(), "A");
    }

    #[test]
    fn unknown_start_or_end_errors() {
        let g = super::helpers::triangle();
        let start = dijkstra(&g, &"Z".to_string(), &"A".to_string());
        assert!(matches!(start, Err(GraphError::UnknownNode(ref n)) if n == "Z"));
        let end = dijkstra(&g, &"A".to_string(), &"Y".to_string());
        assert!(matches!(end, Err(GraphError::UnknownNode(ref n)) if n == "Y"));
        // Start is reported first when both are missing.
        let both = dijkstra(&g, &"Z".to_string(), &"Y".to_string());
        assert!(matches!(both, Err(GraphError::UnknownNode(ref n)) if n == "Z"));
    }

    #[test]
    fn respects_edge_direction() {
        let g = super::helpers::triangle();
        // Every edge points away from A.
        let back = dijkstra(&g, &"B".to_string(), &"A".to_string()).unwrap();
        assert!(back.is_none());
    }

    #[test]
    fn parallel_edges_use_cheapest() {
        let g = super::helpers::graph(&["A", "B"], &[("A", "B", 3.0), ("A", "B", 1.0), ("A", "B", 2.0)]);
        let path = dijkstra(&g, &"A".to_string(), &"B".to_string()).unwrap().unwrap();
        assert_eq!(path.cost(), 1.0);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn zero_weight_edges() {
        let g = super::helpers::graph(
            &["A", "B", "C"],
            &[("A", "B", 0.0), ("B", "C", 0.0), ("A", "C", 1.0)],
        );
        let path = dijkstra(&g, &"A".to_string(), &"C".to_string()).unwrap().unwrap();
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn self_loops_are_ignored() {
        let g = super::helpers::graph(&["A", "B"], &[("A", "A", 0.5), ("A", "B", 1.0)]);
        let path = dijkstra(&g, &"A".to_string(), &"B".to_string()).unwrap().unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.cost(), 1.0);
    }

    #[test]
    fn longer_grid_route() {
        // 0 - 1 - 2
        // |       |
        // 3 ----- 4
        let g = super::helpers::graph(
            &["n0", "n1", "n2", "n3", "n4"],
            &[
                ("n0", "n1", 10.0), ("n1", "n0", 10.0),
                ("n1", "n2", 10.0), ("n2", "n1", 10.0),
                ("n2", "n4", 10.0), ("n4", "n2", 10.0),
                ("n0", "n3", 50.0), ("n3", "n0", 50.0),
                ("n3", "n4", 10.0), ("n4", "n3", 10.0),
            ],
        );
        let path = dijkstra(&g, &"n0".to_string(), &"n4".to_string()).unwrap().unwrap();
        assert_eq!(path.cost(), 30.0);
        let ends: Vec<&str> = path.iter().map(|s| s.end.as_str()).collect();
        assert_eq!(ends, vec!["n1", "n2", "n4"]);

        let back = dijkstra(&g, &"n3".to_string(), &"n1".to_string()).unwrap().unwrap();
        assert_eq!(back.cost(), 30.0);
    }

    #[test]
    fn equal_cost_routes_are_deterministic() {
        // Two routes A→B→D and A→C→D of equal cost.
        let g = super::helpers::graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0), ("C", "D", 1.0)],
        );
        let first = dijkstra(&g, &"A".to_string(), &"D".to_string()).unwrap().unwrap();
        for _ in 0..10 {
            let again = dijkstra(&g, &"A".to_string(), &"D".to_string()).unwrap().unwrap();
            assert_eq!(again, first);
        }
        assert_eq!(first.cost(), 2.0);
    }

    #[test]
    fn integer_weights() {
        let mut g: crate::Graph<u32, u32> = crate::Graph::new();
        for n in 0..4 {
            g.add_node(n);
        }
        g.add_edge(&0, &1, 7);
        g.add_edge(&0, &2, 1);
        g.add_edge(&2, &1, 1);
        g.add_edge(&1, &3, 1);
        let path = dijkstra(&g, &0, &3).unwrap().unwrap();
        assert_eq!(path.cost(), 3);
        assert_eq!(*path.end(), 3);
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::{dijkstra, Graph};

    /// Reference shortest distances by Bellman–Ford relaxation.
    fn bellman_ford(n: usize, edges: &[(usize, usize, u32)], src: usize) -> Vec<Option<u64>> {
        let mut dist = vec![None; n];
        dist[src] = Some(0u64);
        for _ in 0..n {
            for &(a, b, w) in edges {
                if let Some(da) = dist[a] {
                    let cand = da + w as u64;
                    if dist[b].is_none_or(|db| cand < db) {
                        dist[b] = Some(cand);
                    }
                }
            }
        }
        dist
    }

    fn random_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
        (1usize..10).prop_flat_map(|n| {
            (Just(n), prop::collection::vec((0..n, 0..n, 0u32..50), 0..30))
        })
    }

    proptest! {
        #[test]
        fn matches_bellman_ford((n, edges) in random_graph(), src_seed in 0usize..10, dst_seed in 0usize..10) {
            let (src, dst) = (src_seed % n, dst_seed % n);

            let mut g: Graph<usize, u64> = Graph::new();
            for i in 0..n {
                g.add_node(i);
            }
            for &(a, b, w) in &edges {
                g.add_edge(&a, &b, w as u64);
            }

            let expected = bellman_ford(n, &edges, src)[dst];
            let found = dijkstra(&g, &src, &dst).unwrap();
            prop_assert_eq!(found.as_ref().map(|p| p.cost()), expected);

            if let Some(path) = found {
                // Connected chain from src to dst.
                prop_assert_eq!(*path.start(), src);
                prop_assert_eq!(*path.end(), dst);
                for w in path.segments().windows(2) {
                    prop_assert_eq!(w[0].end, w[1].start);
                }
            }
        }

        #[test]
        fn cost_equals_segment_sum(
            weights in prop::collection::vec(0.0_f64..1_000.0, 1..12),
            shortcut in 0.0_f64..20_000.0,
        ) {
            // A chain 0 → 1 → … → k plus one direct 0 → k edge.
            let k = weights.len();
            let mut g: Graph<usize, f64> = Graph::new();
            for i in 0..=k {
                g.add_node(i);
            }
            for (i, &w) in weights.iter().enumerate() {
                g.add_edge(&i, &(i + 1), w);
            }
            g.add_edge(&0, &k, shortcut);

            let path = dijkstra(&g, &0, &k).unwrap().unwrap();
            let sum: f64 = path.iter().map(|s| s.weight).sum();
            prop_assert!((path.cost() - sum).abs() <= 1e-9 * sum.max(1.0));

            let chain: f64 = weights.iter().sum();
            prop_assert!(path.cost() <= chain + 1e-9 * chain.max(1.0));
            prop_assert!(path.cost() <= shortcut);
        }
    }
}
