//! Spatial index over building positions.
//!
//! An R-tree (via `rstar`) maps a map coordinate to the nearest building.
//! Only named buildings are indexed; unnamed waypoints are never returned.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use cp_core::Point;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a building position and its short name.
#[derive(Clone, Debug)]
struct BuildingEntry {
    point:      [f64; 2],
    short_name: String,
}

impl RTreeObject for BuildingEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for BuildingEntry {
    /// Squared Euclidean distance in map coordinates.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── BuildingIndex ─────────────────────────────────────────────────────────────

/// Nearest-building lookup.  Built once alongside the map, read-only after.
pub struct BuildingIndex {
    tree: RTree<BuildingEntry>,
}

impl BuildingIndex {
    /// Bulk-load the index from `(short name, position)` pairs.
    ///
    /// O(N log N); faster than N single inserts.
    pub fn build<'a>(buildings: impl IntoIterator<Item = (&'a String, &'a Point)>) -> Self {
        let entries: Vec<BuildingEntry> = buildings
            .into_iter()
            .map(|(name, p)| BuildingEntry { point: [p.x, p.y], short_name: name.clone() })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Short name of the building closest to `pos`.
    ///
    /// Returns `None` only if the index is empty.
    pub fn nearest(&self, pos: Point) -> Option<&str> {
        self.tree
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.short_name.as_str())
    }

    /// Up to `k` building short names sorted by ascending distance to `pos`.
    pub fn k_nearest(&self, pos: Point, k: usize) -> Vec<&str> {
        self.tree
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.short_name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl std::fmt::Debug for BuildingIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildingIndex").field("len", &self.len()).finish()
    }
}
