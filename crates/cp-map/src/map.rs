//! The campus map facade.
//!
//! `CampusMap` is immutable once built: every query takes `&self`, so a
//! single instance can be shared behind an `Arc` by concurrent readers.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use cp_core::Point;
use cp_graph::{dijkstra, Graph, Path};

use crate::builder::CampusMapBuilder;
use crate::records::{ConnectionRecord, LocationRecord};
use crate::spatial::BuildingIndex;
use crate::{MapError, MapResult};

/// A walkable campus: named buildings, waypoints, and the segments between
/// them.
///
/// Do not construct directly; use [`CampusMap::builder`] or
/// [`CampusMap::from_records`].
#[derive(Debug)]
pub struct CampusMap {
    /// Short name → long name.  Ordered so listings are stable.
    long_names: BTreeMap<String, String>,
    /// Short name → position.  Same key set as `long_names`.
    points:     FxHashMap<String, Point>,
    graph:      Graph<Point, f64>,
    index:      BuildingIndex,
}

impl CampusMap {
    pub fn builder() -> CampusMapBuilder {
        CampusMapBuilder::new()
    }

    /// Build a map from complete record sets.
    pub fn from_records(
        locations:   impl IntoIterator<Item = LocationRecord>,
        connections: impl IntoIterator<Item = ConnectionRecord>,
    ) -> MapResult<Self> {
        CampusMapBuilder::new()
            .locations(locations)
            .connections(connections)
            .build()
    }

    pub(crate) fn from_parts(
        long_names: BTreeMap<String, String>,
        points:     FxHashMap<String, Point>,
        graph:      Graph<Point, f64>,
        index:      BuildingIndex,
    ) -> Self {
        Self { long_names, points, graph, index }
    }

    // ── Name queries ──────────────────────────────────────────────────────

    /// `true` iff `short_name` is a listed building.
    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.long_names.contains_key(short_name)
    }

    /// Full display name of the building `short_name`.
    pub fn long_name_for_short(&self, short_name: &str) -> MapResult<&str> {
        self.long_names
            .get(short_name)
            .map(String::as_str)
            .ok_or_else(|| MapError::UnknownName(short_name.to_string()))
    }

    /// Every building, short name → long name, in short-name order.
    pub fn building_names(&self) -> &BTreeMap<String, String> {
        &self.long_names
    }

    /// Position of the building `short_name`.
    pub fn point_for_short(&self, short_name: &str) -> Option<Point> {
        self.points.get(short_name).copied()
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Shortest walking route between two buildings.
    ///
    /// Returns `Ok(None)` when both buildings exist but no route connects
    /// them.  Fails with [`MapError::UnknownName`] if either short name is
    /// not a listed building (`start` is checked first).
    pub fn find_shortest_path(&self, start: &str, end: &str) -> MapResult<Option<Path<Point, f64>>> {
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;
        Ok(dijkstra(&self.graph, &from, &to)?)
    }

    fn resolve(&self, short_name: &str) -> MapResult<Point> {
        self.point_for_short(short_name)
            .ok_or_else(|| MapError::UnknownName(short_name.to_string()))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Short name of the building closest to `pos`, or `None` if the map has
    /// no buildings.
    pub fn nearest_building(&self, pos: Point) -> Option<&str> {
        self.index.nearest(pos)
    }

    /// Up to `k` buildings closest to `pos`, nearest first.
    pub fn nearest_buildings(&self, pos: Point, k: usize) -> Vec<&str> {
        self.index.k_nearest(pos, k)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Read access to the routing graph.
    pub fn graph(&self) -> &Graph<Point, f64> {
        &self.graph
    }

    pub fn building_count(&self) -> usize {
        self.long_names.len()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
