//! `cp-core` — foundational types for the `campus_paths` router.
//!
//! This crate is a dependency of every other `cp-*` crate.  It has no `cp-*`
//! dependencies and no required external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `NodeId`                                               |
//! | [`geo`]      | `Point` (hashable planar coordinate)                   |
//! | [`weight`]   | `Weight` trait for edge costs                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;
pub mod weight;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::Point;
pub use ids::NodeId;
pub use weight::Weight;
