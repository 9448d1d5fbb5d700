//! `cp-map` — campus map construction and name-based routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`records`]  | `LocationRecord`, `ConnectionRecord`                       |
//! | [`loader`]   | `load_locations_tsv`, `load_connections_tsv`, `*_reader`   |
//! | [`builder`]  | `CampusMapBuilder`                                         |
//! | [`map`]      | `CampusMap` (name lookups, shortest-path queries)          |
//! | [`spatial`]  | R-tree of building positions for nearest-building lookup   |
//! | [`config`]   | `MapConfig` (record file locations)                        |
//! | [`error`]    | `MapError`, `MapResult<T>`                                 |
//!
//! # Graph model
//!
//! Every distinct coordinate in the input becomes one graph node labeled by
//! its [`Point`](cp_core::Point).  Buildings are points with a short and a
//! long name; any other endpoint of a connection is an unnamed waypoint.
//! Each connection record becomes two directed edges of equal weight.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives on `MapConfig`; enables serde on `Point` and `Path`.   |

pub mod builder;
pub mod config;
pub mod error;
pub mod loader;
pub mod map;
pub mod records;
pub mod spatial;


pub use builder::CampusMapBuilder;
pub use config::MapConfig;
pub use error::{MapError, MapResult};
pub use loader::{
    load_connections_reader, load_connections_tsv, load_locations_reader, load_locations_tsv,
};
pub use map::CampusMap;
pub use records::{ConnectionRecord, LocationRecord};
