//! Fluent builder for constructing a [`CampusMap`].

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use cp_core::Point;
use cp_graph::Graph;

use crate::records::{ConnectionRecord, LocationRecord};
use crate::spatial::BuildingIndex;
use crate::{CampusMap, MapError, MapResult};

/// Fluent builder for [`CampusMap`].
///
/// Records are buffered in the order given and only checked and placed on
/// the graph in [`build`](Self::build).
///
/// # Build steps
///
/// 1. For every location: register short → long name and short → point, and
///    ensure a graph node exists for the point.  A repeated short name
///    replaces the earlier record (logged at `warn`).
/// 2. For every connection: ensure nodes for both endpoints (unnamed
///    waypoints are allowed), then add one directed edge in each direction,
///    both weighted by the record's distance.
///
/// # Example
///
/// ```
/// use cp_core::Point;
/// use cp_map::{CampusMap, ConnectionRecord, LocationRecord};
///
/// let map = CampusMap::builder()
///     .location(LocationRecord::new("LIB", "Main Library", 0.0, 0.0))
///     .location(LocationRecord::new("GYM", "Athletics Center", 30.0, 40.0))
///     .connection(ConnectionRecord::new(Point::new(0.0, 0.0), Point::new(30.0, 40.0), 50.0))
///     .build()
///     .unwrap();
///
/// assert_eq!(map.node_count(), 2);
/// assert_eq!(map.edge_count(), 2); // bidirectional
/// let path = map.find_shortest_path("LIB", "GYM").unwrap().unwrap();
/// assert_eq!(path.cost(), 50.0);
/// ```
#[derive(Debug, Default)]
pub struct CampusMapBuilder {
    locations:   Vec<LocationRecord>,
    connections: Vec<ConnectionRecord>,
}

impl CampusMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, record: LocationRecord) -> Self {
        self.locations.push(record);
        self
    }

    pub fn locations(mut self, records: impl IntoIterator<Item = LocationRecord>) -> Self {
        self.locations.extend(records);
        self
    }

    pub fn connection(mut self, record: ConnectionRecord) -> Self {
        self.connections.push(record);
        self
    }

    pub fn connections(mut self, records: impl IntoIterator<Item = ConnectionRecord>) -> Self {
        self.connections.extend(records);
        self
    }

    /// Check every record, build the graph and the name tables, and return a
    /// ready-to-query [`CampusMap`].
    pub fn build(self) -> MapResult<CampusMap> {
        let mut graph: Graph<Point, f64> = Graph::with_capacity(self.locations.len());
        let mut long_names: BTreeMap<String, String> = BTreeMap::new();
        let mut points: FxHashMap<String, Point> = FxHashMap::default();

        // ── Buildings ─────────────────────────────────────────────────────
        for (i, record) in self.locations.into_iter().enumerate() {
            record
                .check()
                .map_err(|reason| MapError::InvalidRecord { row: i + 1, reason })?;

            let point = record.point();
            graph.ensure_node(point);
            points.insert(record.short_name.clone(), point);
            if let Some(previous) = long_names.insert(record.short_name.clone(), record.long_name) {
                warn!(
                    short_name = %record.short_name,
                    replaced = %previous,
                    "duplicate building short name, keeping the later record"
                );
            }
        }

        // ── Connections ───────────────────────────────────────────────────
        let mut repeated = 0usize;
        for (i, record) in self.connections.iter().enumerate() {
            record
                .check()
                .map_err(|reason| MapError::InvalidRecord { row: i + 1, reason })?;

            let a = graph.ensure_node(record.start());
            let b = graph.ensure_node(record.end());
            let forward = graph.add_edge_by_id(a, b, record.distance);
            let backward = graph.add_edge_by_id(b, a, record.distance);
            if !forward && !backward {
                repeated += 1;
            }
        }
        if repeated > 0 {
            debug!(repeated, "skipped connection records already on the map");
        }

        debug_assert!(cp_graph::validate(&graph).is_ok());
        debug_assert!(long_names.keys().all(|k| points.contains_key(k)));
        debug_assert_eq!(long_names.len(), points.len());

        let index = BuildingIndex::build(points.iter());

        info!(
            buildings = long_names.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "campus map built"
        );

        Ok(CampusMap::from_parts(long_names, points, graph, index))
    }
}
