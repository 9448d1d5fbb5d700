//! Record file locations.

use std::path::PathBuf;

use tracing::info;

use crate::loader::{load_connections_tsv, load_locations_tsv};
use crate::{CampusMap, MapResult};

/// Where to find the two record files a [`CampusMap`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapConfig {
    /// Building records (`shortName  longName  x  y`).
    /// Default: `data/campus_buildings.tsv`.
    pub buildings: PathBuf,

    /// Walkable segment records (`x1  y1  x2  y2  distance`).
    /// Default: `data/campus_paths.tsv`.
    pub paths: PathBuf,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            buildings: PathBuf::from("data/campus_buildings.tsv"),
            paths:     PathBuf::from("data/campus_paths.tsv"),
        }
    }
}

impl MapConfig {
    pub fn new(buildings: impl Into<PathBuf>, paths: impl Into<PathBuf>) -> Self {
        Self { buildings: buildings.into(), paths: paths.into() }
    }

    /// Read both files and build the map.
    pub fn load(&self) -> MapResult<CampusMap> {
        let locations = load_locations_tsv(&self.buildings)?;
        let connections = load_connections_tsv(&self.paths)?;
        info!(
            buildings = %self.buildings.display(),
            paths = %self.paths.display(),
            locations = locations.len(),
            connections = connections.len(),
            "loaded campus records"
        );
        CampusMap::from_records(locations, connections)
    }
}
